pub use super::form_files::Entity as FormFiles;
pub use super::form_submissions::Entity as FormSubmissions;
