//! Behavioural tests for `fetch_and_import` using a stub area service.

mod support;

use std::cell::RefCell;

use railgraph_core::{FetchError, ImportError, RailwayGraph};
use railgraph_data::overpass::test_support::StubAreaFetch;
use railgraph_data::{AreaImportError, ImportOptions, fetch_and_import};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use support::fixture_text;

const INTERPRETER_URL: &str = "http://overpass.example.com/api/interpreter";

type ServiceCell = RefCell<Option<StubAreaFetch>>;
type OutcomeCell = RefCell<Option<Result<RailwayGraph, AreaImportError>>>;

#[fixture]
fn service() -> ServiceCell {
    RefCell::new(None)
}

#[fixture]
fn outcome() -> OutcomeCell {
    RefCell::new(None)
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime should build")
        .block_on(future)
}

fn expect_error(outcome: &OutcomeCell) -> AreaImportError {
    let guard = outcome.borrow();
    match guard.as_ref() {
        Some(Err(err)) => err.clone(),
        other => panic!("expected an error, got {other:?}"),
    }
}

#[given("an area service returning the {name} document")]
fn service_returning(#[from(service)] service: &ServiceCell, name: String) {
    let text = fixture_text(name.trim_matches('"'));
    *service.borrow_mut() = Some(StubAreaFetch::with_document(text));
}

#[given("an area service that times out")]
fn service_timing_out(#[from(service)] service: &ServiceCell) {
    *service.borrow_mut() = Some(StubAreaFetch::with_error(FetchError::Timeout {
        url: INTERPRETER_URL.to_owned(),
        timeout_secs: 180,
    }));
}

#[given("an area service answering with HTTP status {status}")]
fn service_http_error(#[from(service)] service: &ServiceCell, status: u16) {
    *service.borrow_mut() = Some(StubAreaFetch::with_error(FetchError::Http {
        url: INTERPRETER_URL.to_owned(),
        status,
        message: "rate limited".to_owned(),
    }));
}

#[when("the area {area} is fetched and imported")]
fn fetch_area(
    #[from(service)] service: &ServiceCell,
    #[from(outcome)] outcome: &OutcomeCell,
    area: String,
) {
    let guard = service.borrow();
    let stub = guard.as_ref().expect("service must be configured");
    let area_name = area.trim_matches('"');
    let result = block_on(fetch_and_import(stub, area_name, &ImportOptions::default()));
    *outcome.borrow_mut() = Some(result);
}

#[then("the area graph has {nodes} nodes and {edges} edges")]
fn area_graph_counts(#[from(outcome)] outcome: &OutcomeCell, nodes: usize, edges: usize) {
    let guard = outcome.borrow();
    let Some(Ok(graph)) = guard.as_ref() else {
        panic!("expected a graph, got {guard:?}");
    };
    assert_eq!(graph.node_count(), nodes);
    assert_eq!(graph.edge_count(), edges);
}

#[then("the service was asked for {area}")]
fn service_was_asked(#[from(service)] service: &ServiceCell, area: String) {
    let guard = service.borrow();
    let stub = guard.as_ref().expect("service must be configured");
    assert_eq!(stub.requested_areas(), vec![area.trim_matches('"').to_owned()]);
}

#[then("a timeout fetch error is returned")]
fn timeout_returned(#[from(outcome)] outcome: &OutcomeCell) {
    let err = expect_error(outcome);
    assert_eq!(
        err,
        AreaImportError::Fetch(FetchError::Timeout {
            url: INTERPRETER_URL.to_owned(),
            timeout_secs: 180,
        })
    );
}

#[then("an HTTP fetch error with status {status} is returned")]
fn http_error_returned(#[from(outcome)] outcome: &OutcomeCell, status: u16) {
    let err = expect_error(outcome);
    assert!(
        matches!(err, AreaImportError::Fetch(FetchError::Http { status: got, .. }) if got == status),
        "unexpected error {err:?}"
    );
}

#[then("an empty area name error is returned")]
fn empty_name_returned(#[from(outcome)] outcome: &OutcomeCell) {
    assert_eq!(
        expect_error(outcome),
        AreaImportError::Fetch(FetchError::EmptyAreaName)
    );
}

#[then("a malformed input error is returned")]
fn malformed_returned(#[from(outcome)] outcome: &OutcomeCell) {
    assert!(matches!(
        expect_error(outcome),
        AreaImportError::Import(ImportError::MalformedInput { .. })
    ));
}

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/area_fetch.feature", name = $title)]
        fn $fn_name(service: ServiceCell, outcome: OutcomeCell) {
            let _ = (service, outcome);
        }
    };
}

register_scenario!(fetched_area_imported, "A fetched area is imported into a graph");
register_scenario!(timeout_reported, "A timeout is reported unchanged");
register_scenario!(http_status_reported, "A failing HTTP status is reported unchanged");
register_scenario!(empty_area_rejected, "An empty area name is rejected");
register_scenario!(
    malformed_document_reported,
    "A malformed fetched document is an import error"
);
