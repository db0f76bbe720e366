//! Outbound client for the inventory backend.
//!
//! A thin pass-through: one inbound request issues at most one outbound
//! request, and the backend's status and JSON body are relayed unchanged.
//! No retries and no extra timeouts: the first failure surfaces
//! immediately rather than being swallowed or re-attempted.

use axum::Json;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use thiserror::Error;

/// Transport-level failure talking to the backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),
}

/// What the backend answered: its status, and its JSON body if any.
///
/// `body` is `None` for 204 responses, which must relay as an empty body
/// rather than an empty JSON document. Non-JSON bodies on other statuses
/// normalize to `{}`.
#[derive(Debug, Clone)]
pub struct Upstream {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl Upstream {
    /// The `token` field of the body, when present and a string.
    pub fn token(&self) -> Option<&str> {
        self.body.as_ref()?.get("token")?.as_str()
    }
}

impl IntoResponse for Upstream {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (self.status, Json(body)).into_response(),
            None => self.status.into_response(),
        }
    }
}

/// Shared HTTP client bound to the backend base URL.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http: reqwest::Client::new(), base_url }
    }

    /// Forward one request to the backend and capture its reply.
    ///
    /// `auth` is the exact `Authorization` header value to send: `None`
    /// omits the header (auth endpoints), `Some("")` sends it empty. The
    /// backend, not this gateway, is the enforcement point for missing
    /// credentials. `query` is appended verbatim.
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        auth: Option<&str>,
        body: Option<&Value>,
    ) -> Result<Upstream, BackendError> {
        let mut url = format!("{}{}", self.base_url, path);
        if let Some(query) = query {
            url.push('?');
            url.push_str(query);
        }

        tracing::debug!(%method, %url, "forwarding to backend");

        let mut request = self.http.request(method, &url);
        if let Some(auth) = auth {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return Ok(Upstream { status, body: None });
        }

        let body = response.json::<Value>().await.unwrap_or_else(|_| Value::Object(Default::default()));
        Ok(Upstream { status, body: Some(body) })
    }
}
