use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::backend::BackendError;

/// A backend call that failed at the transport layer.
///
/// Surfaced immediately as 502; never retried, never swallowed.
pub fn backend_error_to_response(err: BackendError) -> axum::response::Response {
    tracing::warn!(error = %err, "backend call failed");
    match err {
        BackendError::Unreachable(e) => {
            json_error(StatusCode::BAD_GATEWAY, "backend_unreachable", e.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
