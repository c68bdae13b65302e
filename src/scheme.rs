/// Recognized URI schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    Http,
    Https,
    /// No scheme specified
    #[default]
    Empty,
}

impl Scheme {
    /// Resolve a scheme from its textual form.
    ///
    /// Matches case-insensitively and accepts an optional trailing `":"` or
    /// `"://"`. The empty string resolves to [`Scheme::Empty`]; any other
    /// unrecognized name resolves to [`Scheme::Http`], reproducing the
    /// upstream SAPI behavior this crate is compatible with.
    pub fn from_name(raw: &str) -> Self {
        let name = raw
            .strip_suffix("://")
            .or_else(|| raw.strip_suffix(':'))
            .unwrap_or(raw);
        let bytes = name.as_bytes();

        // Filter by length + first byte before the full comparison
        match (bytes.len(), bytes.first()) {
            (0, None) => Self::Empty,
            (4, Some(b'h' | b'H')) if name.eq_ignore_ascii_case("http") => Self::Http,
            (5, Some(b'h' | b'H')) if name.eq_ignore_ascii_case("https") => Self::Https,
            _ => Self::Http,
        }
    }

    /// Get the standard port for this scheme
    pub fn standard_port(self) -> Option<u16> {
        match self {
            Self::Http => Some(80),
            Self::Https => Some(443),
            Self::Empty => None,
        }
    }

    /// Check if this scheme denotes a secure transport
    pub fn is_secure(self) -> bool {
        self == Self::Https
    }

    /// Check if no scheme was specified
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// Get the lowercase scheme name, or `""` for [`Scheme::Empty`]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
            Self::Empty => "",
        }
    }
}

impl core::fmt::Display for Scheme {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
