//! Attachment metadata repository.
//!
//! Stores one form_files row per uploaded file.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::form_files;
use ficha_core::attachment::{
    Attachment, AttachmentError, AttachmentRepository as AttachmentRepoTrait, NewAttachment,
};

/// Attachment repository implementation.
#[derive(Debug, Clone)]
pub struct AttachmentRepository {
    db: DatabaseConnection,
}

impl AttachmentRepository {
    /// Create a new attachment repository.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attachments of one submission, oldest first.
    pub async fn list_by_submission(
        &self,
        submission_id: Uuid,
    ) -> Result<Vec<Attachment>, AttachmentError> {
        let models = form_files::Entity::find()
            .filter(form_files::Column::SubmissionId.eq(submission_id))
            .order_by_asc(form_files::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| AttachmentError::metadata(e.to_string()))?;

        Ok(models.into_iter().map(to_domain).collect())
    }
}

impl AttachmentRepoTrait for AttachmentRepository {
    async fn create(&self, input: NewAttachment) -> Result<Attachment, AttachmentError> {
        let active_model = form_files::ActiveModel {
            id: Set(Uuid::new_v4()),
            submission_id: Set(input.submission_id),
            file_name: Set(input.file_name),
            file_path: Set(input.file_path),
            file_size: Set(input.file_size),
            file_type: Set(input.file_type),
            field_name: Set(input.field_name),
            created_at: Set(Utc::now().into()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AttachmentError::metadata(e.to_string()))?;

        Ok(to_domain(model))
    }
}

/// Convert database model to domain type.
fn to_domain(model: form_files::Model) -> Attachment {
    Attachment {
        id: model.id,
        submission_id: model.submission_id,
        file_name: model.file_name,
        file_path: model.file_path,
        file_size: model.file_size,
        file_type: model.file_type,
        field_name: model.field_name,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
