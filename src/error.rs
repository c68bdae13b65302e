/// Errors that can occur while constructing or mutating a URI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriError {
    /// Malformed URI string (e.g. an authority marker with no authority)
    InvalidUri,
    /// Port number outside `[1, 65535]`
    InvalidPort,
    /// Path containing a raw `?` or `#` delimiter
    InvalidPath,
    /// Query containing a raw `#` delimiter
    InvalidQuery,
}

impl core::fmt::Display for UriError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidUri => "Invalid URI",
            Self::InvalidPort => "Invalid port",
            Self::InvalidPath => "Invalid path",
            Self::InvalidQuery => "Invalid query",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UriError {}

/// Result type for URI construction operations
pub type Result<T> = core::result::Result<T, UriError>;
