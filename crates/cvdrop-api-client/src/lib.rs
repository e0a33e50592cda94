//! Shared HTTP client for the cvdrop API.
//!
//! Provides a minimal client with generic GET/POST helpers, domain methods
//! for the résumé endpoints (list, upload-url, confirm, download-url), and
//! the presigned-upload workflow engine. The CLI uses this client directly.

pub mod api;
pub mod workflow;

use cvdrop_core::{ClientConfig, ClientError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client for the cvdrop backend API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(&config.api_base_url, config.request_timeout_secs)
    }

    /// Create client from environment: CVDROP_API_URL (or API_URL), with
    /// http://localhost:8000 as the documented default.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = ClientConfig::from_env()?;
        Ok(Self::from_config(&config)?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET request. Deserializes the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.build_url(path);
        let response = self.client.get(&url).send().await?;
        Self::json_or_api_error(response).await
    }

    /// POST JSON body and deserialize the response.
    pub async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let url = self.build_url(path);
        let response = self.client.post(&url).json(body).send().await?;
        Self::json_or_api_error(response).await
    }

    /// POST JSON body where only the status matters; any response body is
    /// discarded.
    pub async fn post_json_no_response<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ClientError> {
        let url = self.build_url(path);
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::api_error(status.as_u16(), response).await);
        }
        Ok(())
    }

    /// Raw client for requests outside the backend API, such as the direct
    /// storage upload.
    pub fn client(&self) -> &Client {
        &self.client
    }

    async fn json_or_api_error<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::api_error(status.as_u16(), response).await);
        }
        Ok(response.json().await?)
    }

    async fn api_error(status: u16, response: reqwest::Response) -> ClientError {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        ClientError::Api { status, message }
    }
}

// Re-export workflow types for convenience.
pub use workflow::{UploadStage, UploadWorkflow};
