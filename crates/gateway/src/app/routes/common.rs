//! The repeating proxy shape shared by every resource route.
//!
//! Read the session cookie, forward the request with a bearer header, relay
//! the backend's status and body unchanged. The bearer value is computed
//! here per request and passed explicitly into the outbound call; there is
//! no ambient token store.

use axum::http::{HeaderMap, Method};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use crate::app::{AppState, errors};
use crate::session;

/// Authorization value forwarded upstream.
///
/// Requests without a session still carry the header, with an empty value,
/// rather than omitting it: some backends treat empty and missing
/// differently, and the original system sent the empty form. Enforcement
/// of missing/invalid credentials stays with the backend.
pub fn bearer_from_cookie(headers: &HeaderMap) -> String {
    match session::token_from_headers(headers) {
        Some(token) => format!("Bearer {token}"),
        None => String::new(),
    }
}

/// Forward one resource request and relay the backend's answer.
pub async fn relay(
    state: &AppState,
    headers: &HeaderMap,
    method: Method,
    path: &str,
    query: Option<String>,
    body: Option<Value>,
) -> Response {
    let auth = bearer_from_cookie(headers);
    match state
        .backend
        .forward(method, path, query.as_deref(), Some(&auth), body.as_ref())
        .await
    {
        Ok(upstream) => upstream.into_response(),
        Err(e) => errors::backend_error_to_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header};

    #[test]
    fn bearer_prefixes_cookie_token() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("ges_token=abc"));
        assert_eq!(bearer_from_cookie(&headers), "Bearer abc");
    }

    #[test]
    fn missing_cookie_yields_empty_header_value() {
        assert_eq!(bearer_from_cookie(&HeaderMap::new()), "");
    }
}
