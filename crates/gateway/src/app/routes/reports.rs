use std::sync::Arc;

use axum::extract::RawQuery;
use axum::http::{HeaderMap, Method};
use axum::response::Response;
use axum::routing::get;
use axum::{Extension, Router};

use crate::app::AppState;
use crate::app::routes::common;

pub fn router() -> Router {
    Router::new().route("/monthly", get(monthly_report))
}

/// GET /api/reports/monthly: the `month` query (YYYY-MM) is forwarded verbatim.
pub async fn monthly_report(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    common::relay(&state, &headers, Method::GET, "/api/reports/monthly", query, None).await
}
