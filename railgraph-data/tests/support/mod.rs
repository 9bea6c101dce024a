//! Fixture access shared by the behaviour tests.

use std::fs;
use std::path::PathBuf;

/// Directory containing the JSON fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Read the fixture `name` (without extension) as text.
pub fn fixture_text(name: &str) -> String {
    let path = fixtures_dir().join(format!("{name}.json"));
    fs::read_to_string(&path).unwrap_or_else(|err| {
        panic!("failed to read fixture {path:?}: {err}");
    })
}
