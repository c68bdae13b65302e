use crate::compat::{String, ToString};

/// Transient host/port accumulator used while marshaling a URI from server
/// parameters and headers.
///
/// Candidate sources (Host header, `SERVER_NAME`/`SERVER_PORT`,
/// `SERVER_ADDR`) are resolved into it progressively. Each marshaling call
/// owns its own accumulator; it is discarded once the Uri is built and is
/// never shared across invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostPort {
    pub host: String,
    pub port: Option<u16>,
}

impl HostPort {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolved host and port candidate
    pub fn set(&mut self, host: &str, port: Option<u16>) {
        self.host = host.to_string();
        self.port = port;
    }
}
