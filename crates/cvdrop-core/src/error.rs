//! Error types module
//!
//! All client-side failures are unified under the `ClientError` enum so that
//! every remote operation resolves to an explicit success value or failure
//! variant the caller must branch on.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Backend returned a non-success status for an API request.
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// The direct-to-storage POST returned something other than 201/204.
    #[error("storage upload rejected with status {0}")]
    StorageRejected(u16),

    /// An upload workflow is already in flight for this session.
    #[error("an upload is already in progress")]
    UploadInProgress,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("file too large: {size} bytes exceeds limit of {limit} bytes")]
    PayloadTooLarge { size: u64, limit: u64 },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl ClientError {
    /// Whether a manual retry of the same invocation can reasonably succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ClientError::Api { status, .. } => *status >= 500,
            ClientError::StorageRejected(_) => false,
            ClientError::UploadInProgress => true,
            ClientError::InvalidInput(_) => false,
            ClientError::PayloadTooLarge { .. } => false,
            ClientError::Transport(_) => true,
            ClientError::Io(_) => false,
        }
    }

    /// Variant name for log fields and error displays.
    pub fn error_type(&self) -> &'static str {
        match self {
            ClientError::Api { .. } => "Api",
            ClientError::StorageRejected(_) => "StorageRejected",
            ClientError::UploadInProgress => "UploadInProgress",
            ClientError::InvalidInput(_) => "InvalidInput",
            ClientError::PayloadTooLarge { .. } => "PayloadTooLarge",
            ClientError::Transport(_) => "Transport",
            ClientError::Io(_) => "Io",
        }
    }
}
