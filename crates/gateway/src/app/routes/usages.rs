use std::sync::Arc;

use axum::extract::{Path, RawQuery};
use axum::http::{HeaderMap, Method};
use axum::response::Response;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::Value;

use crate::app::AppState;
use crate::app::routes::common;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_usages).post(create_usage))
        .route("/:id", get(get_usage).put(update_usage).delete(delete_usage))
}

pub async fn list_usages(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    common::relay(&state, &headers, Method::GET, "/api/usages", query, None).await
}

pub async fn create_usage(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    common::relay(&state, &headers, Method::POST, "/api/usages", None, Some(body)).await
}

pub async fn get_usage(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    common::relay(&state, &headers, Method::GET, &format!("/api/usages/{id}"), None, None).await
}

pub async fn update_usage(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    common::relay(&state, &headers, Method::PUT, &format!("/api/usages/{id}"), None, Some(body))
        .await
}

pub async fn delete_usage(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    common::relay(&state, &headers, Method::DELETE, &format!("/api/usages/{id}"), None, None).await
}
