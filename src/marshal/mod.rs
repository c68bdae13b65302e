mod request_uri;

pub use request_uri::marshal_request_uri;

use crate::checkers::{is_bracketed_ipv6, parse_port};
use crate::compat::{BTreeMap, String, ToString, format};
use crate::error::Result;
use crate::headers::HeaderMap;
use crate::helpers::{filter_query, prune_fragment, split_host_port, strip_query_string};
use crate::host_port::HostPort;
use crate::scheme::Scheme;
use crate::uri::{Parts, Uri};

/// Exact-case server parameter map (`HTTPS`, `SERVER_NAME`, `REQUEST_URI`, ...)
pub type ServerParams = BTreeMap<String, String>;

/// SAPI flag truthiness: empty and `"0"` are false.
pub(crate) fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

/// Reconstruct a canonical [`Uri`] from server parameters and request
/// headers.
///
/// Missing inputs resolve to empty components — absence of an optional
/// server value is expected, not an error.
///
/// # Errors
///
/// Propagates the typed validation errors of URI construction.
///
/// # Examples
///
/// ```
/// use uri_marshal::{HeaderMap, ServerParams, marshal_uri_from_server};
///
/// let params: ServerParams = [
///     ("REQUEST_URI", "/orders/17"),
///     ("QUERY_STRING", "expand=items"),
/// ]
/// .into_iter()
/// .map(|(k, v)| (k.into(), v.into()))
/// .collect();
/// let headers: HeaderMap = [("Host", "shop.example:8443")].into_iter().collect();
///
/// let uri = marshal_uri_from_server(&params, &headers)?;
/// assert_eq!(uri.host(), "shop.example");
/// assert_eq!(uri.port(), Some(8443));
/// assert_eq!(uri.path(), "/orders/17");
/// assert_eq!(uri.query(), "expand=items");
/// # Ok::<(), uri_marshal::UriError>(())
/// ```
pub fn marshal_uri_from_server(params: &ServerParams, headers: &HeaderMap) -> Result<Uri> {
    let mut accumulator = HostPort::new();
    marshal_host_and_port(&mut accumulator, params, headers);

    let request_uri = marshal_request_uri(params);
    let (before_fragment, fragment) = prune_fragment(&request_uri);

    Uri::from_parts(Parts {
        scheme: marshal_scheme(params, headers),
        host: accumulator.host,
        port: accumulator.port,
        path: strip_query_string(before_fragment).to_string(),
        query: params
            .get("QUERY_STRING")
            .map(|query| filter_query(query).to_string())
            .unwrap_or_default(),
        fragment: fragment.unwrap_or("").to_string(),
        ..Parts::default()
    })
}

/// https wins when the SAPI flag or a forwarded-proto header says so.
fn marshal_scheme(params: &ServerParams, headers: &HeaderMap) -> Scheme {
    if let Some(https) = params.get("HTTPS") {
        if is_truthy(https) && !https.eq_ignore_ascii_case("off") {
            return Scheme::Https;
        }
    }
    if headers
        .value_or("x-forwarded-proto", "")
        .eq_ignore_ascii_case("https")
    {
        return Scheme::Https;
    }
    Scheme::Http
}

/// Resolve host and port into the accumulator.
///
/// A `Host` header wins outright; otherwise `SERVER_NAME`/`SERVER_PORT` are
/// consulted, reconciled against `SERVER_ADDR` for IPv6 deployments. Port
/// values that do not parse are dropped rather than reported — an
/// undeterminable port is an absent one.
pub fn marshal_host_and_port(
    accumulator: &mut HostPort,
    params: &ServerParams,
    headers: &HeaderMap,
) {
    if let Some(host_header) = headers.get("host") {
        let (host, port_text) = split_host_port(host_header);
        accumulator.set(host, port_text.and_then(|text| parse_port(text).ok()));
        return;
    }

    let Some(server_name) = params.get("SERVER_NAME") else {
        return;
    };
    accumulator.host = server_name.clone();
    accumulator.port = params
        .get("SERVER_PORT")
        .and_then(|port| parse_port(port).ok());

    let Some(server_addr) = params.get("SERVER_ADDR") else {
        return;
    };
    if is_bracketed_ipv6(&accumulator.host) {
        reconcile_ipv6_host(accumulator, server_addr);
    } else if server_addr.contains(':') && !accumulator.host.starts_with('[') {
        // SERVER_NAME is unusable as an IPv6 host; fall back to the address
        accumulator.host = format!("[{server_addr}]");
    }
}

/// Rebuild a bracketed IPv6 host from `SERVER_ADDR`, dropping the port when
/// the address's last group was mistaken for one upstream. An ambiguous
/// address+port combination resolves to "no port", never a guess.
fn reconcile_ipv6_host(accumulator: &mut HostPort, server_addr: &str) {
    let host = format!("[{server_addr}]");
    let port = accumulator.port.unwrap_or(80);
    if let Some(pos) = host.rfind(':') {
        if host[pos + 1..] == format!("{port}]") {
            accumulator.port = None;
        }
    }
    accumulator.host = host;
}
