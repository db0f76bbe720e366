//! Navigation rendered for the current session's role.
//!
//! Presentational gating only: this decides which links the UI draws, not
//! what the backend permits. A client that requests an ungated path anyway
//! is answered by the backend's own authorization.

use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use ges_auth::SessionClaims;

use crate::session;

/// GET /api/nav
///
/// No cookie → 401 with an empty section list. Otherwise the sections for
/// the decoded role; an undecodable token or unknown role gates as the
/// lowest tier.
pub async fn navigation(headers: HeaderMap) -> Response {
    let Some(token) = session::token_from_headers(&headers) else {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "sections": [] }))).into_response();
    };

    let role = SessionClaims::from_token(&token).and_then(|claims| claims.role());
    let sections = ges_auth::navigation(role);

    (StatusCode::OK, Json(json!({ "sections": sections }))).into_response()
}
