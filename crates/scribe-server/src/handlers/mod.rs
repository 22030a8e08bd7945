//! HTTP request handlers.

pub(crate) mod pages;

use axum::http::HeaderMap;

/// Header an htmx client sends on partial-page requests.
const FRAGMENT_HEADER: &str = "hx-request";

/// Classify a request as a fragment (partial-page) request.
///
/// True only for an exact `"true"` value; the header name is matched
/// case-insensitively per HTTP, the value is not. Advisory to the template
/// layer only.
pub(crate) fn is_fragment_request(headers: &HeaderMap) -> bool {
    headers
        .get(FRAGMENT_HEADER)
        .is_some_and(|value| value.as_bytes() == b"true")
}
