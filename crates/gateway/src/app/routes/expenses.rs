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
        .route("/", get(list_expenses).post(create_expense))
        .route("/:id", get(get_expense).put(update_expense).delete(delete_expense))
}

pub async fn list_expenses(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    common::relay(&state, &headers, Method::GET, "/api/expenses", query, None).await
}

pub async fn create_expense(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    common::relay(&state, &headers, Method::POST, "/api/expenses", None, Some(body)).await
}

pub async fn get_expense(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    common::relay(&state, &headers, Method::GET, &format!("/api/expenses/{id}"), None, None).await
}

pub async fn update_expense(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    common::relay(&state, &headers, Method::PUT, &format!("/api/expenses/{id}"), None, Some(body))
        .await
}

pub async fn delete_expense(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    common::relay(&state, &headers, Method::DELETE, &format!("/api/expenses/{id}"), None, None)
        .await
}
