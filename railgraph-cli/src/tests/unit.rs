//! Focused unit tests covering import CLI configuration and execution.

use super::*;
use crate::import::{
    AreaFetchBuilder, ImportArgs, ImportConfig, ImportSource, config_from_layers_for_test,
    run_import_with,
};
use camino::{Utf8Path, Utf8PathBuf};
use railgraph_core::{AreaFetch, FetchError, TrackFilter};
use railgraph_data::overpass::test_support::StubAreaFetch;
use railgraph_data::{AreaImportError, DEFAULT_OVERPASS_URL, OverpassClientConfig};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::time::Duration;
use tempfile::TempDir;

const TWO_STATIONS: &str = r#"{
    "version": 0.6,
    "elements": [
        {"type": "node", "id": 1, "lat": 50.1109, "lon": 8.6821, "tags": {"railway": "station"}},
        {"type": "node", "id": 2, "lat": 50.1119, "lon": 8.6831, "tags": {"railway": "station"}},
        {"type": "node", "id": 5, "lat": 50.2000, "lon": 8.7000},
        {"type": "way", "id": 3, "nodes": [1, 2], "tags": {"railway": "rail"},
         "geometry": [{"lat": 50.1109, "lon": 8.6821}, {"lat": 50.1119, "lon": 8.6831}]}
    ]
}"#;

/// Builds stub fetchers answering with a fixed document or error.
enum StubBuilder {
    Document(&'static str),
    Error(FetchError),
}

impl AreaFetchBuilder for StubBuilder {
    fn build(&self, _config: &OverpassClientConfig) -> Result<Box<dyn AreaFetch>, CliError> {
        let stub = match self {
            Self::Document(text) => StubAreaFetch::with_document(*text),
            Self::Error(error) => StubAreaFetch::with_error(error.clone()),
        };
        Ok(Box::new(stub))
    }
}

struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, contents).expect("write fixture");
        path
    }
}

#[fixture]
fn workspace() -> Workspace {
    let dir = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
    Workspace { _dir: dir, root }
}

fn file_config(path: &Utf8Path) -> ImportConfig {
    ImportConfig::try_from(ImportArgs {
        input: Some(path.to_path_buf()),
        ..ImportArgs::default()
    })
    .expect("config should build")
}

fn area_config(area: &str) -> ImportConfig {
    ImportConfig::try_from(ImportArgs {
        area: Some(area.to_owned()),
        ..ImportArgs::default()
    })
    .expect("config should build")
}

fn run_to_json(config: &ImportConfig, builder: &dyn AreaFetchBuilder) -> Value {
    let mut output = Vec::new();
    run_import_with(config, builder, &mut output).expect("import should succeed");
    serde_json::from_slice(&output).expect("output should be JSON")
}

#[rstest]
fn converting_without_source_errors() {
    let err = ImportConfig::try_from(ImportArgs::default()).expect_err("missing source");
    match err {
        CliError::MissingSource { area, input, env } => {
            assert_eq!(area, ARG_AREA);
            assert_eq!(input, ARG_INPUT);
            assert_eq!(env, ENV_AREA);
        }
        other => panic!("expected MissingSource, found {other:?}"),
    }
}

#[rstest]
fn converting_with_both_sources_errors() {
    let args = ImportArgs {
        area: Some("Bern".to_owned()),
        input: Some(Utf8PathBuf::from("bern.json")),
        ..ImportArgs::default()
    };
    let err = ImportConfig::try_from(args).expect_err("conflicting sources");
    assert!(matches!(err, CliError::ConflictingSources { .. }));
}

#[rstest]
fn defaults_target_public_interpreter() {
    let config = area_config("Bern");
    assert_eq!(config.source, ImportSource::Area("Bern".to_owned()));
    assert_eq!(config.client.base_url, DEFAULT_OVERPASS_URL);
    assert_eq!(config.client.timeout, Duration::from_secs(180));
    assert_eq!(config.options.filter, TrackFilter::AnyWay);
}

#[rstest]
fn overrides_apply_to_client_and_filter() {
    let args = ImportArgs {
        area: Some("Bern".to_owned()),
        overpass_url: Some("http://localhost:12345/api/interpreter".to_owned()),
        timeout_secs: Some(30),
        railway_only: Some(true),
        ..ImportArgs::default()
    };
    let config = ImportConfig::try_from(args).expect("config should build");
    assert_eq!(config.client.base_url, "http://localhost:12345/api/interpreter");
    assert_eq!(config.client.timeout, Duration::from_secs(30));
    assert_eq!(config.options.filter, TrackFilter::RailwayTagged);
}

#[rstest]
fn importing_a_file_prints_statistics(workspace: Workspace) {
    let path = workspace.write("two_stations.json", TWO_STATIONS);
    let stats = run_to_json(&file_config(&path), &StubBuilder::Document("{}"));

    assert_eq!(stats["node_count"], 3);
    assert_eq!(stats["edge_count"], 1);
    assert_eq!(stats["isolated_nodes"], 1);
    assert!(stats["total_length_m"].as_f64().is_some_and(|len| len > 0.0));
}

#[rstest]
fn missing_input_file_is_reported(workspace: Workspace) {
    let path = workspace.root.join("absent.json");
    let mut output = Vec::new();
    let err = run_import_with(&file_config(&path), &StubBuilder::Document("{}"), &mut output)
        .expect_err("missing file should fail");
    match err {
        CliError::ReadInput { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ReadInput, found {other:?}"),
    }
    assert!(output.is_empty());
}

#[rstest]
fn malformed_input_file_is_reported(workspace: Workspace) {
    let path = workspace.write("broken.json", r#"{"version": 0.6}"#);
    let mut output = Vec::new();
    let err = run_import_with(&file_config(&path), &StubBuilder::Document("{}"), &mut output)
        .expect_err("malformed document should fail");
    assert!(matches!(err, CliError::ImportDocument { .. }));
}

#[rstest]
fn importing_an_area_uses_the_fetcher() {
    let stats = run_to_json(&area_config("Frankfurt"), &StubBuilder::Document(TWO_STATIONS));
    assert_eq!(stats["node_count"], 3);
    assert_eq!(stats["edge_count"], 1);
    assert!(stats["bounds"].is_object());
}

#[rstest]
fn area_fetch_failures_are_reported() {
    let builder = StubBuilder::Error(FetchError::Timeout {
        url: DEFAULT_OVERPASS_URL.to_owned(),
        timeout_secs: 180,
    });
    let mut output = Vec::new();
    let err = run_import_with(&area_config("Frankfurt"), &builder, &mut output)
        .expect_err("fetch should fail");
    match err {
        CliError::ImportArea { area, source } => {
            assert_eq!(area, "Frankfurt");
            assert!(matches!(
                source,
                AreaImportError::Fetch(FetchError::Timeout { .. })
            ));
        }
        other => panic!("expected ImportArea, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "timeout_secs": "soon" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "area": "From File",
            "overpass_url": "http://from-file/api/interpreter",
            "timeout_secs": 60,
        }),
        None,
    );
    composer.push_environment(json!({
        "area": "From Env",
        "railway_only": true,
    }));
    composer.push_cli(json!({
        "timeout_secs": 15,
    }));

    let config = config_from_layers_for_test(composer.layers()).expect("merged config");
    assert_eq!(config.source, ImportSource::Area("From Env".to_owned()));
    assert_eq!(config.client.base_url, "http://from-file/api/interpreter");
    assert_eq!(config.client.timeout, Duration::from_secs(15));
    assert_eq!(config.options.filter, TrackFilter::RailwayTagged);
}
