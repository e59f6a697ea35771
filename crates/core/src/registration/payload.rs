//! Wire shape of the registration form.

use serde::{Deserialize, Serialize};

use super::error::RegistrationError;

/// The JSON object posted in the multipart `data` field.
///
/// Field names follow the form (`executiveCpf`, `addressCep`, ...). Required
/// fields are plain `String`s so that an absent key fails decoding.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    // Executive
    pub executive_name: String,
    pub executive_cpf: String,
    #[serde(default)]
    pub executive_rg: Option<String>,
    pub executive_email: String,
    #[serde(default)]
    pub executive_phone: Option<String>,

    // Company
    pub company_name: String,
    pub company_cnpj: String,
    #[serde(default)]
    pub company_ie: Option<String>,
    #[serde(default)]
    pub company_im: Option<String>,
    #[serde(default)]
    pub company_website: Option<String>,
    pub company_type: String,
    pub company_activity: String,

    // Alternate contact
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,

    // Primary address
    pub address_cep: String,
    pub address_street: String,
    pub address_number: String,
    #[serde(default)]
    pub address_complement: Option<String>,
    pub address_neighborhood: String,
    pub address_city: String,
    pub address_state: String,

    // Secondary address
    #[serde(default)]
    pub has_additional_address: Option<bool>,
    #[serde(default)]
    pub additional_cep: Option<String>,
    #[serde(default)]
    pub additional_street: Option<String>,
    #[serde(default)]
    pub additional_number: Option<String>,
    #[serde(default)]
    pub additional_complement: Option<String>,
    #[serde(default)]
    pub additional_neighborhood: Option<String>,
    #[serde(default)]
    pub additional_city: Option<String>,
    #[serde(default)]
    pub additional_state: Option<String>,

    // Banking
    #[serde(default)]
    pub bank_code: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub bank_agency: Option<String>,
    #[serde(default)]
    pub bank_account: Option<String>,
    #[serde(default)]
    pub bank_pix: Option<String>,

    // Commercial
    #[serde(default)]
    pub commercial_references: Option<String>,
    #[serde(default)]
    pub sales_segment: Option<Vec<String>>,
    #[serde(default)]
    pub network_type: Option<String>,
    #[serde(default)]
    pub network_size: Option<String>,
    #[serde(default)]
    pub fiscal_regime: Option<String>,
}

impl RegistrationPayload {
    /// Decodes the `data` field.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::MalformedPayload`] if the text is not a JSON
    /// object of the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, RegistrationError> {
        serde_json::from_str(raw).map_err(|e| RegistrationError::malformed(e.to_string()))
    }
}
