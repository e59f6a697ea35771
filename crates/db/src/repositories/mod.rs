//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod form_file;
pub mod submission;

pub use form_file::AttachmentRepository;
pub use submission::SubmissionRepository;
