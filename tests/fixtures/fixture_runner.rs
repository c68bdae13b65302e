/// Fixture runner
///
/// Runs every case against the crate and collects field-level mismatches
/// into a report instead of stopping at the first failure.
use super::fixture_loader::{FixtureCase, FixtureReport};
use uri_marshal::{Uri, marshal_request_uri};

pub fn run_fixture_cases(cases: Vec<FixtureCase>) -> FixtureReport {
    let mut report = FixtureReport::new();
    let mut case_num = 0;

    for case in cases {
        match case {
            FixtureCase::Comment(_) => {}
            FixtureCase::RequestUri {
                server,
                request_uri,
            } => {
                case_num += 1;
                let label = format!("{server:?}");
                let actual = marshal_request_uri(&server);
                report.check(case_num, &label, "request_uri", &request_uri, &actual);
            }
            FixtureCase::UriCase {
                input,
                failure,
                rendered,
                scheme,
                username,
                password,
                host,
                port,
                path,
                query,
                fragment,
                authority,
            } => {
                case_num += 1;
                let parsed = Uri::parse(&input);

                if failure == Some(true) {
                    let actual = if parsed.is_ok() { "success" } else { "failure" };
                    report.check(case_num, &input, "parsing", "failure", actual);
                    continue;
                }
                let Ok(uri) = parsed else {
                    report.check(case_num, &input, "parsing", "success", "failure");
                    continue;
                };

                if let Some(expected) = rendered {
                    report.check(case_num, &input, "rendered", &expected, uri.as_str());
                }
                if let Some(expected) = scheme {
                    report.check(case_num, &input, "scheme", &expected, uri.scheme().as_str());
                }
                if let Some(expected) = username {
                    report.check(case_num, &input, "username", &expected, uri.username());
                }
                if let Some(expected) = password {
                    report.check(case_num, &input, "password", &expected, uri.password());
                }
                if let Some(expected) = host {
                    report.check(case_num, &input, "host", &expected, uri.host());
                }
                if let Some(expected) = port {
                    let actual = uri.port().map(|p| p.to_string()).unwrap_or_default();
                    report.check(case_num, &input, "port", &expected, &actual);
                }
                if let Some(expected) = path {
                    report.check(case_num, &input, "path", &expected, uri.path());
                }
                if let Some(expected) = query {
                    report.check(case_num, &input, "query", &expected, uri.query());
                }
                if let Some(expected) = fragment {
                    report.check(case_num, &input, "fragment", &expected, uri.fragment());
                }
                if let Some(expected) = authority {
                    report.check(case_num, &input, "authority", &expected, &uri.authority());
                }
            }
        }
    }

    report
}
