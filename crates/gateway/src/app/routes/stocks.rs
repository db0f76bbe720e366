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
        .route("/", get(list_stocks).post(create_stock))
        .route("/:id", get(get_stock).put(update_stock).delete(delete_stock))
}

pub async fn list_stocks(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    common::relay(&state, &headers, Method::GET, "/api/stocks", query, None).await
}

pub async fn create_stock(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    common::relay(&state, &headers, Method::POST, "/api/stocks", None, Some(body)).await
}

pub async fn get_stock(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    common::relay(&state, &headers, Method::GET, &format!("/api/stocks/{id}"), None, None).await
}

pub async fn update_stock(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    common::relay(&state, &headers, Method::PUT, &format!("/api/stocks/{id}"), None, Some(body))
        .await
}

pub async fn delete_stock(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    common::relay(&state, &headers, Method::DELETE, &format!("/api/stocks/{id}"), None, None).await
}
