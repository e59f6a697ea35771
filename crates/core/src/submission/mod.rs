//! Submission orchestration.
//!
//! One request flows through decoding, the record insert, attachment
//! processing and the back-office notification. Collaborators are injected
//! behind traits; the db crate and the shared email client provide the
//! production implementations.

mod error;
mod service;
mod types;

pub use error::SubmissionError;
pub use service::{PipelineConfig, SubmissionIntake, SubmissionPipeline, SubmissionRepository};
pub use types::{StoredSubmission, SubmissionReceipt, SubmissionRequest};
