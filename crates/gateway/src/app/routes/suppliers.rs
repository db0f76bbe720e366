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
        .route("/", get(list_suppliers).post(create_supplier))
        .route("/:id", get(get_supplier).put(update_supplier).delete(delete_supplier))
}

pub async fn list_suppliers(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    common::relay(&state, &headers, Method::GET, "/api/suppliers", query, None).await
}

pub async fn create_supplier(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    common::relay(&state, &headers, Method::POST, "/api/suppliers", None, Some(body)).await
}

pub async fn get_supplier(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    common::relay(&state, &headers, Method::GET, &format!("/api/suppliers/{id}"), None, None).await
}

pub async fn update_supplier(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    common::relay(&state, &headers, Method::PUT, &format!("/api/suppliers/{id}"), None, Some(body))
        .await
}

pub async fn delete_supplier(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    common::relay(&state, &headers, Method::DELETE, &format!("/api/suppliers/{id}"), None, None)
        .await
}
