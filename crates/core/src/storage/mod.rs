//! Object storage for registration attachments using Apache OpenDAL.
//!
//! Supported backends:
//! - S3-compatible: Supabase Storage, Cloudflare R2, AWS S3
//! - Azure Blob Storage
//! - Local filesystem (development only, cannot sign URLs)
//!
//! Keys follow one layout:
//!
//! ```text
//! <submission_id>/<field_name>_<file_name>
//! ```
//!
//! A repeated key within one submission becomes
//! `<field_name>_<n>_<file_name>`, so `form_files.file_path` stays unique.

mod config;
mod error;
mod service;

pub use config::StorageConfig;
pub use error::StorageError;
pub use ficha_shared::StorageProvider;
pub use service::{BlobStore, PresignedUrl, StorageService, storage_key};
