//! Attachment processing for registration files.
//!
//! For each file part of a submission:
//! - Upload the bytes to object storage under the submission's prefix
//! - Record the file metadata
//! - Mint a signed link for the back-office email

mod error;
mod service;
mod types;

pub use error::AttachmentError;
pub use service::{AttachmentProcessor, AttachmentRepository};
pub use types::{Attachment, FileUpload, NewAttachment};
