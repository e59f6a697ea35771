//! Registration tables.
//!
//! Creates form_submissions and form_files.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(REGISTRATIONS_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS form_files CASCADE;
             DROP TABLE IF EXISTS form_submissions CASCADE;",
        )
        .await?;
        Ok(())
    }
}

const REGISTRATIONS_SQL: &str = r"
-- One row per submitted registration form
CREATE TABLE form_submissions (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),

    executive_name TEXT NOT NULL,
    executive_cpf TEXT NOT NULL,
    executive_rg TEXT,
    executive_email TEXT NOT NULL,
    executive_phone TEXT,

    company_name TEXT NOT NULL,
    company_cnpj TEXT NOT NULL,
    company_ie TEXT,
    company_im TEXT,
    company_website TEXT,
    company_type TEXT NOT NULL,
    company_activity TEXT NOT NULL,

    contact_name TEXT,
    contact_phone TEXT,
    contact_email TEXT,

    address_cep TEXT NOT NULL,
    address_street TEXT NOT NULL,
    address_number TEXT NOT NULL,
    address_complement TEXT,
    address_neighborhood TEXT NOT NULL,
    address_city TEXT NOT NULL,
    address_state TEXT NOT NULL,

    has_additional_address BOOLEAN NOT NULL DEFAULT false,
    additional_cep TEXT,
    additional_street TEXT,
    additional_number TEXT,
    additional_complement TEXT,
    additional_neighborhood TEXT,
    additional_city TEXT,
    additional_state TEXT,

    bank_code TEXT,
    bank_name TEXT,
    bank_agency TEXT,
    bank_account TEXT,
    bank_pix TEXT,

    commercial_references TEXT,
    sales_segment TEXT[] NOT NULL DEFAULT '{}',
    network_type TEXT,
    network_size TEXT,
    fiscal_regime TEXT,

    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_form_submissions_created ON form_submissions(created_at DESC);
CREATE INDEX idx_form_submissions_cnpj ON form_submissions(company_cnpj);

-- Metadata of every stored attachment
CREATE TABLE form_files (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    submission_id UUID NOT NULL REFERENCES form_submissions(id) ON DELETE CASCADE,
    file_name TEXT NOT NULL,
    file_path TEXT NOT NULL UNIQUE,
    file_size BIGINT NOT NULL CHECK (file_size >= 0),
    file_type TEXT NOT NULL,
    field_name TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_form_files_submission ON form_files(submission_id);
";
