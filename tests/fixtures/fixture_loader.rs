/// Fixture loader for the data-driven URI suite
///
/// The JSON is a flat array: URI cases carry an `input` plus the expected
/// component values, request-URI cases carry a `server` map plus the reduced
/// value, and bare strings are comments.
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum FixtureCase {
    /// A request-URI reduction case
    RequestUri {
        server: BTreeMap<String, String>,
        request_uri: String,
    },
    /// A URI parse/render case
    UriCase {
        input: String,
        #[serde(default)]
        failure: Option<bool>,
        #[serde(default)]
        rendered: Option<String>,
        #[serde(default)]
        scheme: Option<String>,
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        password: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        port: Option<String>,
        #[serde(default)]
        path: Option<String>,
        #[serde(default)]
        query: Option<String>,
        #[serde(default)]
        fragment: Option<String>,
        #[serde(default)]
        authority: Option<String>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Default)]
pub struct FixtureReport {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

#[derive(Debug)]
#[allow(dead_code)]
pub struct FixtureFailure {
    pub case_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl FixtureReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare one field and record the outcome
    pub fn check(&mut self, case_num: usize, input: &str, field: &str, expected: &str, actual: &str) {
        if expected == actual {
            self.passed += 1;
        } else {
            self.failed += 1;
            self.failures.push(FixtureFailure {
                case_num,
                input: input.to_string(),
                field: field.to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
    }

    pub fn summary(&self) -> String {
        format!("fixture checks: {} passed, {} failed", self.passed, self.failed)
    }
}
