//! Configuration module
//!
//! Client configuration resolved once at startup from the environment, with
//! documented defaults for local development.

use std::env;

// Common constants
const DEFAULT_API_URL: &str = "http://localhost:8000";
const REQUEST_TIMEOUT_SECS: u64 = 60;
const MAX_FILE_SIZE_MB: u64 = 10;
const STAGE_DONE_RESET_MS: u64 = 1200;

/// Client configuration for the cvdrop API and upload workflow.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Backend base URL (CVDROP_API_URL or API_URL).
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub max_file_size_bytes: u64,
    pub allowed_extensions: Vec<String>,
    pub allowed_content_types: Vec<String>,
    /// How long the `Done` stage stays visible before resetting to `Idle`.
    pub stage_done_reset_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            max_file_size_bytes: MAX_FILE_SIZE_MB * 1024 * 1024,
            allowed_extensions: default_extensions(),
            allowed_content_types: default_content_types(),
            stage_done_reset_ms: STAGE_DONE_RESET_MS,
        }
    }
}

fn default_extensions() -> Vec<String> {
    ["pdf", "docx", "png", "jpg", "jpeg"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_content_types() -> Vec<String> {
    [
        "application/pdf",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "image/png",
        "image/jpeg",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("CVDROP_API_URL")
            .or_else(|_| env::var("API_URL"))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let max_file_size_mb = env::var("MAX_FILE_SIZE_MB")
            .unwrap_or_else(|_| MAX_FILE_SIZE_MB.to_string())
            .parse::<u64>()
            .unwrap_or(MAX_FILE_SIZE_MB);

        let allowed_extensions = env::var("ALLOWED_EXTENSIONS")
            .map(|s| {
                s.split(',')
                    .map(|e| e.trim().to_lowercase())
                    .filter(|e| !e.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| default_extensions());

        let allowed_content_types = env::var("ALLOWED_CONTENT_TYPES")
            .map(|s| {
                s.split(',')
                    .map(|e| e.trim().to_lowercase())
                    .filter(|e| !e.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| default_content_types());

        let config = ClientConfig {
            api_base_url,
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| REQUEST_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(REQUEST_TIMEOUT_SECS),
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            allowed_extensions,
            allowed_content_types,
            stage_done_reset_ms: env::var("STAGE_DONE_RESET_MS")
                .unwrap_or_else(|_| STAGE_DONE_RESET_MS.to_string())
                .parse()
                .unwrap_or(STAGE_DONE_RESET_MS),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(anyhow::anyhow!(
                "CVDROP_API_URL must be an http(s) URL, got '{}'",
                self.api_base_url
            ));
        }
        if self.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than 0"));
        }
        if self.allowed_content_types.is_empty() {
            return Err(anyhow::anyhow!("ALLOWED_CONTENT_TYPES must not be empty"));
        }
        Ok(())
    }

    /// Client-side filter: is this MIME type accepted for upload?
    pub fn is_content_type_allowed(&self, content_type: &str) -> bool {
        self.allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(content_type))
    }
}
