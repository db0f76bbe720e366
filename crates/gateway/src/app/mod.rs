//! HTTP application wiring (axum router + shared state).
//!
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::backend::BackendClient;
use crate::config::GatewayConfig;

pub mod errors;
pub mod routes;

/// State shared by every handler: the outbound client and the startup
/// configuration. Immutable after construction; requests never write here.
pub struct AppState {
    pub backend: BackendClient,
    pub config: GatewayConfig,
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: GatewayConfig) -> Router {
    let state = Arc::new(AppState {
        backend: BackendClient::new(config.backend_url.clone()),
        config,
    });

    Router::new()
        .route("/health", get(routes::health))
        .merge(routes::router())
        .layer(Extension(state))
        .layer(ServiceBuilder::new())
}
