use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Processing lifecycle of an uploaded résumé, owned entirely by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResumeStatus {
    Processing,
    Ready,
    Failed,
}

impl Display for ResumeStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ResumeStatus::Processing => write!(f, "processing"),
            ResumeStatus::Ready => write!(f, "ready"),
            ResumeStatus::Failed => write!(f, "failed"),
        }
    }
}

impl FromStr for ResumeStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing" => Ok(ResumeStatus::Processing),
            "ready" => Ok(ResumeStatus::Ready),
            "failed" => Ok(ResumeStatus::Failed),
            _ => Err(anyhow::anyhow!("Invalid resume status: {}", s)),
        }
    }
}

/// One uploaded document as known to the backend. The client never mutates
/// a record locally; the collection is only replaced by re-fetching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeRecord {
    /// Opaque backend-assigned identifier.
    pub id: String,
    /// Original file name, display only.
    pub filename: String,
    /// Storage object key, correlates the presigned upload with confirmation.
    pub key: String,
    pub size: u64,
    pub content_type: String,
    pub status: ResumeStatus,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

impl ResumeRecord {
    /// Display size in kilobytes, rounded to the nearest whole KB.
    pub fn size_kb(&self) -> u64 {
        ((self.size as f64) / 1024.0).round() as u64
    }
}
