//! Domain methods for the cvdrop API client.
//!
//! Request/response types are re-exported from `cvdrop_core::models` where
//! possible; the download-url wrapper is defined here.

use crate::ApiClient;
use cvdrop_core::{ClientError, PresignedPost, ResumeRecord, UploadUrlRequest};

/// Download-url response shape. Matches GET /resumes/{id}/download-url.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct DownloadUrlResponse {
    pub url: String,
}

impl ApiClient {
    /// Fetch the full résumé collection. Full-refresh semantics only: the
    /// caller replaces its collection wholesale with the returned array.
    pub async fn list_resumes(&self) -> Result<Vec<ResumeRecord>, ClientError> {
        self.get("/resumes").await
    }

    /// Ask the backend for presigned upload credentials for a local file.
    pub async fn request_upload_url(
        &self,
        request: &UploadUrlRequest,
    ) -> Result<PresignedPost, ClientError> {
        self.post_json("/resumes/upload-url", request).await
    }

    /// Notify the backend that the object now exists at the storage key.
    pub async fn confirm_upload(&self, key: &str) -> Result<(), ClientError> {
        self.post_json_no_response("/resumes/confirm", &serde_json::json!({ "key": key }))
            .await
    }

    /// Fetch a short-lived download URL for a record.
    pub async fn download_url(&self, resume_id: &str) -> Result<String, ClientError> {
        let response: DownloadUrlResponse = self
            .get(&format!("/resumes/{}/download-url", resume_id))
            .await?;
        Ok(response.url)
    }
}
