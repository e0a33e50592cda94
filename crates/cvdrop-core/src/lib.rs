//! Cvdrop Core Library
//!
//! This crate provides the domain models, error type, and configuration
//! shared by the cvdrop API client and CLI.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::ClientError;
pub use models::{PendingUpload, PresignedPost, ResumeRecord, ResumeStatus, UploadUrlRequest};
