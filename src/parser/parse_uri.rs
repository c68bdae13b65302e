use crate::checkers::{is_scheme_token, parse_port};
use crate::compat::ToString;
use crate::error::{Result, UriError};
use crate::helpers::{prune_fragment, prune_query, split_host_port};
use crate::scheme::Scheme;
use crate::uri::{Parts, Uri};

/// Parse a raw URI string into a validated [`Uri`].
///
/// Both absolute URIs and relative references are accepted; a string with no
/// authority marker is treated entirely as path, query and fragment.
///
/// # Errors
///
/// Returns [`UriError::InvalidUri`] when an authority marker is present but
/// the authority resolves to an empty host (a bare `"//"` being the shortest
/// such input), and the component-specific error when a part fails
/// validation.
pub fn parse_uri(input: &str) -> Result<Uri> {
    let (scheme, after_scheme) = match split_scheme(input) {
        Some((scheme, rest)) => (Scheme::from_name(scheme), rest),
        None => (Scheme::Empty, input),
    };

    let (authority, remainder) = match after_scheme.strip_prefix("//") {
        Some(after_marker) => {
            let (authority, remainder) = split_authority(after_marker);
            (Some(authority), remainder)
        }
        None => (None, after_scheme),
    };

    let (before_fragment, fragment) = prune_fragment(remainder);
    let (path, query) = prune_query(before_fragment);

    let mut parts = Parts {
        scheme,
        path: path.to_string(),
        query: query.unwrap_or("").to_string(),
        fragment: fragment.unwrap_or("").to_string(),
        ..Parts::default()
    };
    if let Some(authority) = authority {
        parse_authority(authority, &mut parts)?;
    }
    Uri::from_parts(parts)
}

/// Split a leading `scheme://` marker.
///
/// The marker only counts when the text before `"://"` is a plausible scheme
/// token; a `"://"` occurring later (e.g. inside a query value) does not
/// create a scheme. The returned rest keeps its leading `"//"`.
fn split_scheme(input: &str) -> Option<(&str, &str)> {
    let marker = input.find("://")?;
    let scheme = &input[..marker];
    if !is_scheme_token(scheme) {
        return None;
    }
    Some((scheme, &input[marker + 1..]))
}

/// Cut the authority section: everything up to the first '/', '?' or '#'.
fn split_authority(input: &str) -> (&str, &str) {
    match memchr::memchr3(b'/', b'?', b'#', input.as_bytes()) {
        Some(pos) => (&input[..pos], &input[pos..]),
        None => (input, ""),
    }
}

/// Parse `[user[:password]@]host[:port]` into the component set.
///
/// An authority resolving to an empty host is malformed; this is what
/// rejects a bare `"//"`.
fn parse_authority(authority: &str, parts: &mut Parts) -> Result<()> {
    let (user_info, host_port_text) = match authority.rfind('@') {
        Some(pos) => (&authority[..pos], &authority[pos + 1..]),
        None => ("", authority),
    };
    if !user_info.is_empty() {
        match user_info.split_once(':') {
            Some((user, password)) => {
                parts.username = user.to_string();
                parts.password = password.to_string();
            }
            None => parts.username = user_info.to_string(),
        }
    }

    let (host, port_text) = split_host_port(host_port_text);
    if host.is_empty() {
        return Err(UriError::InvalidUri);
    }
    parts.host = host.to_string();
    parts.port = match port_text {
        None | Some("") => None,
        Some(text) => Some(parse_port(text)?),
    };
    Ok(())
}
