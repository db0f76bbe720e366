use ges_gateway::config::GatewayConfig;

#[tokio::main]
async fn main() {
    ges_observability::init();

    let config = GatewayConfig::from_env();
    let bind_addr = config.bind_addr.clone();
    tracing::info!(backend_url = %config.backend_url, "starting ges-gateway");

    let app = ges_gateway::app::build_app(config);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
