//! Presigned-upload workflow.
//!
//! Drives the strictly ordered sequence: request upload credentials, POST
//! the file directly to storage, confirm with the backend, refresh the
//! listing. Progress is published on a watch channel as an `UploadStage`;
//! every failure resolves to an explicit `ClientError` and a `Failed` stage.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use cvdrop_core::{ClientConfig, ClientError, PendingUpload, PresignedPost, ResumeRecord, UploadUrlRequest};
use reqwest::multipart::{Form, Part};
use tokio::sync::watch;

use crate::ApiClient;

/// Observable phase of the upload workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStage {
    Idle,
    RequestingUrl,
    UploadingToStorage,
    Confirming,
    Refreshing,
    Done,
    Failed(String),
}

impl Display for UploadStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UploadStage::Idle => write!(f, "idle"),
            UploadStage::RequestingUrl => write!(f, "requesting-url"),
            UploadStage::UploadingToStorage => write!(f, "uploading-to-storage"),
            UploadStage::Confirming => write!(f, "confirming"),
            UploadStage::Refreshing => write!(f, "refreshing"),
            UploadStage::Done => write!(f, "done"),
            UploadStage::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Text fields for the storage form: the backend's fields verbatim, plus a
/// `key` field when the backend did not already include one. The file part
/// is appended separately and must stay last.
fn storage_form_fields(post: &PresignedPost) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> = post
        .fields
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    if !post.fields.contains_key("key") {
        fields.push(("key".to_string(), post.key.clone()));
    }
    fields
}

/// Upload workflow with at-most-one-in-flight semantics per instance.
pub struct UploadWorkflow {
    client: ApiClient,
    config: ClientConfig,
    stage: watch::Sender<UploadStage>,
    busy: AtomicBool,
}

#[derive(Debug)]
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl UploadWorkflow {
    pub fn new(client: ApiClient, config: ClientConfig) -> Self {
        let (stage, _) = watch::channel(UploadStage::Idle);
        Self {
            client,
            config,
            stage,
            busy: AtomicBool::new(false),
        }
    }

    /// Subscribe to stage transitions for progress rendering.
    pub fn stage(&self) -> watch::Receiver<UploadStage> {
        self.stage.subscribe()
    }

    pub fn api_client(&self) -> &ApiClient {
        &self.client
    }

    /// Run the full upload sequence for a selected file and return the
    /// refreshed collection. The pending selection is consumed; a failed
    /// invocation requires the user to re-trigger with a new selection.
    #[tracing::instrument(skip(self, pending), fields(filename = %pending.filename, size = pending.size))]
    pub async fn upload(
        &self,
        pending: PendingUpload,
    ) -> Result<Vec<ResumeRecord>, ClientError> {
        let _guard = self.try_begin()?;

        match self.run(&pending).await {
            Ok(records) => {
                self.set_stage(UploadStage::Done);
                self.schedule_idle_reset();
                Ok(records)
            }
            Err(err) => {
                tracing::warn!(error = %err, error_type = err.error_type(), "upload failed");
                self.set_stage(UploadStage::Failed(err.to_string()));
                Err(err)
            }
        }
    }

    async fn run(&self, pending: &PendingUpload) -> Result<Vec<ResumeRecord>, ClientError> {
        self.validate(pending)?;

        self.set_stage(UploadStage::RequestingUrl);
        let request = UploadUrlRequest {
            filename: pending.filename.clone(),
            content_type: pending.content_type.clone(),
            size: pending.size,
        };
        let post = self.client.request_upload_url(&request).await?;
        tracing::debug!(key = %post.key, url = %post.url, "received presigned post");

        self.set_stage(UploadStage::UploadingToStorage);
        self.upload_to_storage(&post, pending).await?;

        self.set_stage(UploadStage::Confirming);
        self.client.confirm_upload(&post.key).await?;

        self.set_stage(UploadStage::Refreshing);
        let records = self.client.list_resumes().await?;
        tracing::info!(key = %post.key, records = records.len(), "upload complete");
        Ok(records)
    }

    /// Direct multipart POST to the storage URL, bypassing the backend.
    /// Success is exactly 201 or 204; any other status aborts the sequence.
    async fn upload_to_storage(
        &self,
        post: &PresignedPost,
        pending: &PendingUpload,
    ) -> Result<(), ClientError> {
        let bytes = tokio::fs::read(&pending.path).await?;

        let mut form = Form::new();
        for (name, value) in storage_form_fields(post) {
            form = form.text(name, value);
        }
        // The file part goes last; some providers reject forms where fields
        // follow the file.
        let file_part = Part::bytes(bytes)
            .file_name(pending.filename.clone())
            .mime_str(&pending.content_type)?;
        form = form.part("file", file_part);

        let response = self
            .client
            .client()
            .post(&post.url)
            .multipart(form)
            .send()
            .await?;

        match response.status().as_u16() {
            201 | 204 => Ok(()),
            status => Err(ClientError::StorageRejected(status)),
        }
    }

    /// Client-side filter: accepted type and size cap, checked before any
    /// network traffic.
    fn validate(&self, pending: &PendingUpload) -> Result<(), ClientError> {
        if !self.config.is_content_type_allowed(&pending.content_type) {
            return Err(ClientError::InvalidInput(format!(
                "unsupported file type '{}' for {}",
                pending.content_type, pending.filename
            )));
        }
        if pending.size > self.config.max_file_size_bytes {
            return Err(ClientError::PayloadTooLarge {
                size: pending.size,
                limit: self.config.max_file_size_bytes,
            });
        }
        if pending.size == 0 {
            return Err(ClientError::InvalidInput(format!(
                "empty file: {}",
                pending.filename
            )));
        }
        Ok(())
    }

    fn try_begin(&self) -> Result<BusyGuard<'_>, ClientError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .is_err()
        {
            return Err(ClientError::UploadInProgress);
        }
        Ok(BusyGuard(&self.busy))
    }

    fn set_stage(&self, stage: UploadStage) {
        tracing::debug!(stage = %stage, "stage transition");
        self.stage.send_replace(stage);
    }

    /// The `Done` label is UI feedback only; clear it back to `Idle` after
    /// the configured delay unless another upload has already started.
    fn schedule_idle_reset(&self) {
        let stage = self.stage.clone();
        let delay = Duration::from_millis(self.config.stage_done_reset_ms);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            stage.send_if_modified(|current| {
                if *current == UploadStage::Done {
                    *current = UploadStage::Idle;
                    true
                } else {
                    false
                }
            });
        });
    }
}
