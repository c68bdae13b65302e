use crate::error::{Result, UriError};
use crate::scheme::Scheme;

/// Parse a port string, enforcing the `[1, 65535]` range.
/// Parses wide first so an overlong value cannot wrap into range.
pub fn parse_port(port: &str) -> Result<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UriError::InvalidPort);
    }
    match port.parse::<u32>() {
        Ok(n @ 1..=65535) => Ok(n as u16),
        _ => Err(UriError::InvalidPort),
    }
}

/// Validate a port number already narrowed to `u16`; 0 is outside the range.
pub fn validate_port(port: u16) -> Result<()> {
    if port == 0 {
        return Err(UriError::InvalidPort);
    }
    Ok(())
}

/// Validate that a path carries no raw query or fragment delimiter.
/// Percent-escaped sequences (`%3F`, `%23`) pass.
pub fn validate_path(path: &str) -> Result<()> {
    if memchr::memchr2(b'?', b'#', path.as_bytes()).is_some() {
        return Err(UriError::InvalidPath);
    }
    Ok(())
}

/// Validate that a query carries no raw fragment delimiter.
pub fn validate_query(query: &str) -> Result<()> {
    if memchr::memchr(b'#', query.as_bytes()).is_some() {
        return Err(UriError::InvalidQuery);
    }
    Ok(())
}

// Fragments accept any input; there is deliberately no validate_fragment.

/// Check whether a port may be elided from the rendered URI.
/// An absent port is always standard.
pub fn is_standard_port(scheme: Scheme, host: &str, port: Option<u16>) -> bool {
    let Some(port) = port else {
        return true;
    };
    if host.is_empty() {
        return scheme.standard_port() == Some(port);
    }
    is_standard_unsecure_port(scheme, port) || is_standard_secure_port(scheme, port)
}

/// True only for plain http on port 80
pub fn is_standard_unsecure_port(scheme: Scheme, port: u16) -> bool {
    scheme == Scheme::Http && port == 80
}

/// True only for https on port 443
pub fn is_standard_secure_port(scheme: Scheme, port: u16) -> bool {
    scheme == Scheme::Https && port == 443
}

/// Check if a string has the shape of a scheme token:
/// ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
pub fn is_scheme_token(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.first().is_some_and(u8::is_ascii_alphabetic)
        && bytes
            .iter()
            .all(|&b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}

/// Check if a string has the shape of a bracketed IPv6 literal
/// (fast preliminary check, not full address validation).
pub fn is_bracketed_ipv6(host: &str) -> bool {
    let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) else {
        return false;
    };
    !inner.is_empty() && inner.bytes().all(|b| b.is_ascii_hexdigit() || b == b':')
}
