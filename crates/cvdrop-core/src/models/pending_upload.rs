use std::path::{Path, PathBuf};

use crate::error::ClientError;

/// Declared when the file extension gives no better answer.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Transient selected-file state. Exists only between selection and either
/// completion or abandonment of an upload; never persisted.
#[derive(Debug, Clone)]
pub struct PendingUpload {
    pub path: PathBuf,
    pub filename: String,
    pub content_type: String,
    pub size: u64,
}

impl PendingUpload {
    /// Build a pending upload from a local path, inferring the declared
    /// content type from the file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                ClientError::InvalidInput(format!("not a file path: {}", path.display()))
            })?
            .to_string();

        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(ClientError::InvalidInput(format!(
                "not a regular file: {}",
                path.display()
            )));
        }

        let content_type = content_type_for_filename(&filename);

        Ok(PendingUpload {
            path: path.to_path_buf(),
            filename,
            content_type,
            size: metadata.len(),
        })
    }

    pub fn extension(&self) -> Option<String> {
        extension_of(&self.filename)
    }
}

fn extension_of(filename: &str) -> Option<String> {
    let ext = filename.rsplit('.').next()?;
    if ext == filename || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

/// MIME type for the accepted résumé formats; octet-stream otherwise.
fn content_type_for_filename(filename: &str) -> String {
    let mime = match extension_of(filename).as_deref() {
        Some("pdf") => "application/pdf",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => FALLBACK_CONTENT_TYPE,
    };
    mime.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_file(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn test_from_path_infers_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp_file(&dir, "resume.pdf", b"%PDF-1.4");

        let pending = PendingUpload::from_path(&path).unwrap();
        assert_eq!(pending.filename, "resume.pdf");
        assert_eq!(pending.content_type, "application/pdf");
        assert_eq!(pending.size, 8);
        assert_eq!(pending.extension().as_deref(), Some("pdf"));
    }

    #[test]
    fn test_from_path_infers_image_types() {
        let dir = tempfile::tempdir().unwrap();
        let jpg = write_temp_file(&dir, "photo.JPG", b"x");
        let png = write_temp_file(&dir, "scan.png", b"x");

        assert_eq!(
            PendingUpload::from_path(&jpg).unwrap().content_type,
            "image/jpeg"
        );
        assert_eq!(
            PendingUpload::from_path(&png).unwrap().content_type,
            "image/png"
        );
    }

    #[test]
    fn test_from_path_falls_back_to_octet_stream() {
        let dir = tempfile::tempdir().unwrap();
        let unknown = write_temp_file(&dir, "notes.txt", b"hello");
        let bare = write_temp_file(&dir, "README", b"hello");

        assert_eq!(
            PendingUpload::from_path(&unknown).unwrap().content_type,
            FALLBACK_CONTENT_TYPE
        );
        let bare_pending = PendingUpload::from_path(&bare).unwrap();
        assert_eq!(bare_pending.content_type, FALLBACK_CONTENT_TYPE);
        assert_eq!(bare_pending.extension(), None);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = PendingUpload::from_path("/nonexistent/resume.pdf").unwrap_err();
        assert!(matches!(err, ClientError::Io(_)));
    }

    #[test]
    fn test_from_path_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = PendingUpload::from_path(dir.path()).unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput(_)));
    }
}
