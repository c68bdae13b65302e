#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Fixture-driven regression suite
///
/// Parse/render expectations plus the REQUEST_URI reduction heuristic are
/// pinned as data, so edge cases (full URLs in REQUEST_URI, paths that start
/// with "http", rewrite headers) stay locked instead of being re-derived.
#[path = "fixtures/fixture_loader.rs"]
mod fixture_loader;

#[path = "fixtures/fixture_runner.rs"]
mod fixture_runner;

use fixture_loader::FixtureCase;

#[test]
fn test_fixture_suite() {
    let data = include_str!("fixtures/uri_cases.json");
    let cases: Vec<FixtureCase> =
        serde_json::from_str(data).expect("Failed to parse fixture data");
    assert!(!cases.is_empty());

    let report = fixture_runner::run_fixture_cases(cases);
    assert_eq!(
        report.failed,
        0,
        "{}\n{:#?}",
        report.summary(),
        report.failures
    );
}
