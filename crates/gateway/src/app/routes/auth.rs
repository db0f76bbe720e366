//! Auth endpoints: the cookie ↔ bearer-token bridge.
//!
//! Login and register forward credentials to the backend; session and
//! logout are local. The session endpoint reflects the cookie's claims
//! without calling the backend, so identity shown to the UI can lag
//! backend-side changes (revocation, role change) until the cookie
//! expires or the user logs in again. That window is accepted; the
//! backend re-checks the token on every proxied call.

use std::sync::Arc;

use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::{Value, json};

use ges_auth::SessionClaims;

use crate::app::{AppState, errors};
use crate::session;

pub fn router() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/session", get(session_info))
        .route("/logout", post(logout))
}

/// POST /api/auth/login
///
/// Forwards credentials and relays the backend's reply verbatim. Only when
/// the backend accepted and returned a token is the session cookie
/// installed; a rejected login never touches the cookie.
pub async fn login(
    Extension(state): Extension<Arc<AppState>>,
    Json(credentials): Json<Value>,
) -> Response {
    let upstream = match state
        .backend
        .forward(Method::POST, "/api/auth/login", None, None, Some(&credentials))
        .await
    {
        Ok(upstream) => upstream,
        Err(e) => return errors::backend_error_to_response(e),
    };

    let token = upstream
        .status
        .is_success()
        .then(|| upstream.token().map(str::to_owned))
        .flatten();

    let mut response = upstream.into_response();
    if let Some(token) = token {
        let cookie = session::session_cookie(&token, state.config.cookie_secure);
        if let Some(value) = session::to_header_value(&cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }
    response
}

/// POST /api/auth/register: pure pass-through; never touches the cookie.
pub async fn register(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Response {
    match state
        .backend
        .forward(Method::POST, "/api/auth/register", None, None, Some(&body))
        .await
    {
        Ok(upstream) => upstream.into_response(),
        Err(e) => errors::backend_error_to_response(e),
    }
}

/// GET /api/auth/session: local reflection of the cookie's claims.
pub async fn session_info(headers: HeaderMap) -> Response {
    let Some(token) = session::token_from_headers(&headers) else {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "user": null }))).into_response();
    };

    match SessionClaims::from_token(&token) {
        Some(claims) => (StatusCode::OK, Json(json!({ "user": claims }))).into_response(),
        None => (StatusCode::BAD_REQUEST, Json(json!({ "user": null }))).into_response(),
    }
}

/// POST /api/auth/logout: clears the session cookie. Idempotent: with no
/// session present this still answers 200.
pub async fn logout() -> Response {
    let mut response = (StatusCode::OK, Json(json!({ "ok": true }))).into_response();
    if let Some(value) = session::to_header_value(&session::removal_cookie()) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}
