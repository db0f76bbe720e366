use std::sync::Arc;

use axum::extract::{Path, RawQuery};
use axum::http::{HeaderMap, Method};
use axum::response::Response;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::Value;

use crate::app::AppState;
use crate::app::routes::common;

// User creation goes through /api/auth/register, so there is no POST here.
pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

pub async fn list_users(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    common::relay(&state, &headers, Method::GET, "/api/users", query, None).await
}

pub async fn get_user(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    common::relay(&state, &headers, Method::GET, &format!("/api/users/{id}"), None, None).await
}

pub async fn update_user(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    common::relay(&state, &headers, Method::PUT, &format!("/api/users/{id}"), None, Some(body))
        .await
}

pub async fn delete_user(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    common::relay(&state, &headers, Method::DELETE, &format!("/api/users/{id}"), None, None).await
}
