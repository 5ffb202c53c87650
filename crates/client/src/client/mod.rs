//! HTTP client for the ruffnote API.

pub mod items;

use ruffnote_core::service::{ServiceDescriptor, DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_VERSION};

use crate::error::{ClientError, Result};

/// HTTP client for the ruffnote API.
#[derive(Debug, Clone)]
pub struct RuffnoteClient {
    client: reqwest::Client,
    base_url: String,
    api_root: String,
    token: Option<String>,
}

impl RuffnoteClient {
    /// Create a new client for the default service root.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_root: api_root(DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_VERSION),
            token: None,
        }
    }

    /// Sends `Authorization: Bearer <token>` on every item call.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Targets a service registered under a non-default name or version.
    pub fn with_service(mut self, name: &str, version: &str) -> Self {
        self.api_root = api_root(name, version);
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for a method path relative to the service root.
    fn url(&self, path: &str) -> String {
        format!("{}{}/{}", self.base_url, self.api_root, path)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Fetch the service registration metadata.
    pub async fn discovery(&self) -> Result<ServiceDescriptor> {
        let response = self.client.get(self.url("discovery")).send().await?;
        self.handle_response(response).await
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::from_response_body(status.as_u16(), &body))
        }
    }
}

fn api_root(name: &str, version: &str) -> String {
    format!("/api/{name}/{version}")
}
