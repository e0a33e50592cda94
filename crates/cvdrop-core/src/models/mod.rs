pub mod pending_upload;
pub mod presigned_upload;
pub mod resume;

pub use pending_upload::PendingUpload;
pub use presigned_upload::{PresignedPost, UploadUrlRequest};
pub use resume::{ResumeRecord, ResumeStatus};
