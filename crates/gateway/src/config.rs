//! Environment-derived gateway configuration.

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the inventory backend all requests are forwarded to.
    pub backend_url: String,
    /// Address the gateway listens on.
    pub bind_addr: String,
    /// Whether the session cookie carries the `Secure` flag (production).
    pub cookie_secure: bool,
}

impl GatewayConfig {
    /// Read configuration from the environment, falling back to dev
    /// defaults (`BACKEND_URL`, `GES_BIND_ADDR`, `GES_ENV=production`).
    pub fn from_env() -> Self {
        let backend_url = std::env::var("BACKEND_URL").unwrap_or_else(|_| {
            tracing::warn!("BACKEND_URL not set; using http://localhost:8080");
            "http://localhost:8080".to_owned()
        });

        let bind_addr =
            std::env::var("GES_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_owned());

        let cookie_secure = matches!(std::env::var("GES_ENV").as_deref(), Ok("production"));

        Self { backend_url, bind_addr, cookie_secure }
    }
}
