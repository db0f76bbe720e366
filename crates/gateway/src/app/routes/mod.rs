use axum::http::StatusCode;
use axum::{Router, routing::get};

pub mod auth;
pub mod common;
pub mod expenses;
pub mod nav;
pub mod purchases;
pub mod reports;
pub mod stocks;
pub mod suppliers;
pub mod usages;
pub mod users;

/// Router for the whole `/api` surface.
pub fn router() -> Router {
    Router::new()
        .nest("/api/auth", auth::router())
        .route("/api/nav", get(nav::navigation))
        .nest("/api/stocks", stocks::router())
        .nest("/api/suppliers", suppliers::router())
        .nest("/api/purchases", purchases::router())
        .nest("/api/expenses", expenses::router())
        .nest("/api/usages", usages::router())
        .nest("/api/users", users::router())
        .nest("/api/reports", reports::router())
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
