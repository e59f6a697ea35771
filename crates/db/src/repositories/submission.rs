//! Submission repository for database operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set};
use tracing::debug;
use uuid::Uuid;

use crate::entities::form_submissions;
use ficha_core::registration::Submission;
use ficha_core::submission::{
    StoredSubmission, SubmissionError, SubmissionRepository as SubmissionRepoTrait,
};

/// Submission repository implementation.
#[derive(Debug, Clone)]
pub struct SubmissionRepository {
    db: DatabaseConnection,
}

impl SubmissionRepository {
    /// Create a new submission repository.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a submission row by id.
    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<form_submissions::Model>, SubmissionError> {
        form_submissions::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SubmissionError::persistence(e.to_string()))
    }

    /// Most recent submissions first.
    pub async fn list_recent(
        &self,
        limit: u64,
    ) -> Result<Vec<form_submissions::Model>, SubmissionError> {
        form_submissions::Entity::find()
            .order_by_desc(form_submissions::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| SubmissionError::persistence(e.to_string()))
    }
}

impl SubmissionRepoTrait for SubmissionRepository {
    async fn insert(&self, record: &Submission) -> Result<StoredSubmission, SubmissionError> {
        let model = to_active_model(Uuid::new_v4(), record)
            .insert(&self.db)
            .await
            .map_err(|e| SubmissionError::persistence(e.to_string()))?;

        debug!(submission_id = %model.id, "Inserted form_submissions row");

        Ok(StoredSubmission {
            id: model.id,
            created_at: model.created_at.with_timezone(&Utc),
        })
    }
}

fn to_active_model(id: Uuid, r: &Submission) -> form_submissions::ActiveModel {
    let extra = r.additional_address.clone().unwrap_or_default();

    form_submissions::ActiveModel {
        id: Set(id),
        executive_name: Set(r.executive.name.clone()),
        executive_cpf: Set(r.executive.cpf.clone()),
        executive_rg: Set(r.executive.rg.clone()),
        executive_email: Set(r.executive.email.clone()),
        executive_phone: Set(r.executive.phone.clone()),
        company_name: Set(r.company.name.clone()),
        company_cnpj: Set(r.company.cnpj.clone()),
        company_ie: Set(r.company.ie.clone()),
        company_im: Set(r.company.im.clone()),
        company_website: Set(r.company.website.clone()),
        company_type: Set(r.company.company_type.clone()),
        company_activity: Set(r.company.activity.clone()),
        contact_name: Set(r.contact.name.clone()),
        contact_phone: Set(r.contact.phone.clone()),
        contact_email: Set(r.contact.email.clone()),
        address_cep: Set(r.address.cep.clone()),
        address_street: Set(r.address.street.clone()),
        address_number: Set(r.address.number.clone()),
        address_complement: Set(r.address.complement.clone()),
        address_neighborhood: Set(r.address.neighborhood.clone()),
        address_city: Set(r.address.city.clone()),
        address_state: Set(r.address.state.clone()),
        has_additional_address: Set(r.has_additional_address()),
        additional_cep: Set(extra.cep),
        additional_street: Set(extra.street),
        additional_number: Set(extra.number),
        additional_complement: Set(extra.complement),
        additional_neighborhood: Set(extra.neighborhood),
        additional_city: Set(extra.city),
        additional_state: Set(extra.state),
        bank_code: Set(r.banking.code.clone()),
        bank_name: Set(r.banking.name.clone()),
        bank_agency: Set(r.banking.agency.clone()),
        bank_account: Set(r.banking.account.clone()),
        bank_pix: Set(r.banking.pix.clone()),
        commercial_references: Set(r.commercial_references.clone()),
        sales_segment: Set(r.sales_segment.clone()),
        network_type: Set(r.network.network_type.clone()),
        network_size: Set(r.network.size.clone()),
        fiscal_regime: Set(r.fiscal_regime.clone()),
        created_at: Set(Utc::now().into()),
    }
}
