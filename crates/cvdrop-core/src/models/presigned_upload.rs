use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request for upload credentials for a selected local file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadUrlRequest {
    /// Original filename
    pub filename: String,
    /// Content type (MIME type)
    pub content_type: String,
    /// File size in bytes
    pub size: u64,
}

/// Presigned POST credentials issued by the backend: a target URL, the form
/// fields the storage provider requires, and the storage key the backend
/// will expect at confirmation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresignedPost {
    pub url: String,
    pub fields: HashMap<String, String>,
    pub key: String,
}
