use super::{ServerParams, is_truthy};
use crate::checkers::is_scheme_token;
use crate::compat::{String, ToString};

/// Resolve the raw request-URI value from the server parameter set.
///
/// Rewrite-aware priority, first present wins: `UNENCODED_URL` (when
/// `IIS_WasUrlRewritten` is truthy), `HTTP_X_REWRITE_URL`,
/// `HTTP_X_ORIGINAL_URL`, `REQUEST_URI` (reduced to its path-onward part
/// when it carries a full URL), `ORIG_PATH_INFO` (empty maps to `"/"`),
/// and finally `"/"`.
pub fn marshal_request_uri(params: &ServerParams) -> String {
    if params.get("IIS_WasUrlRewritten").is_some_and(|v| is_truthy(v)) {
        if let Some(unencoded) = params.get("UNENCODED_URL") {
            if !unencoded.is_empty() {
                return unencoded.clone();
            }
        }
    }
    if let Some(rewrite_url) = params.get("HTTP_X_REWRITE_URL") {
        return rewrite_url.clone();
    }
    if let Some(original_url) = params.get("HTTP_X_ORIGINAL_URL") {
        return original_url.clone();
    }
    if let Some(request_uri) = params.get("REQUEST_URI") {
        return strip_scheme_and_authority(request_uri).to_string();
    }
    if let Some(orig_path_info) = params.get("ORIG_PATH_INFO") {
        return if orig_path_info.is_empty() {
            "/".to_string()
        } else {
            orig_path_info.clone()
        };
    }
    "/".to_string()
}

/// Reduce an absolute request URI to its path-onward part.
///
/// A value only counts as absolute when a scheme token immediately precedes
/// `"://"` and a non-empty authority follows it; a plain path that happens
/// to start with `"http"` is left untouched.
fn strip_scheme_and_authority(request_uri: &str) -> &str {
    let Some(marker) = request_uri.find("://") else {
        return request_uri;
    };
    if !is_scheme_token(&request_uri[..marker]) {
        return request_uri;
    }
    let after_marker = &request_uri[marker + 3..];
    match memchr::memchr3(b'/', b'?', b'#', after_marker.as_bytes()) {
        Some(0) => request_uri, // empty authority: not a full URL
        Some(pos) => &after_marker[pos..],
        None => "",
    }
}
