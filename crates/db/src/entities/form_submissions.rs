//! `SeaORM` Entity for form_submissions table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "form_submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub executive_name: String,
    pub executive_cpf: String,
    pub executive_rg: Option<String>,
    pub executive_email: String,
    pub executive_phone: Option<String>,
    pub company_name: String,
    pub company_cnpj: String,
    pub company_ie: Option<String>,
    pub company_im: Option<String>,
    pub company_website: Option<String>,
    pub company_type: String,
    pub company_activity: String,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub address_cep: String,
    pub address_street: String,
    pub address_number: String,
    pub address_complement: Option<String>,
    pub address_neighborhood: String,
    pub address_city: String,
    pub address_state: String,
    pub has_additional_address: bool,
    pub additional_cep: Option<String>,
    pub additional_street: Option<String>,
    pub additional_number: Option<String>,
    pub additional_complement: Option<String>,
    pub additional_neighborhood: Option<String>,
    pub additional_city: Option<String>,
    pub additional_state: Option<String>,
    pub bank_code: Option<String>,
    pub bank_name: Option<String>,
    pub bank_agency: Option<String>,
    pub bank_account: Option<String>,
    pub bank_pix: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub commercial_references: Option<String>,
    pub sales_segment: Vec<String>,
    pub network_type: Option<String>,
    pub network_size: Option<String>,
    pub fiscal_regime: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::form_files::Entity")]
    FormFiles,
}

impl Related<super::form_files::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormFiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
