//! Normalized registration record.

use serde::Serialize;

use super::error::RegistrationError;
use super::payload::RegistrationPayload;

/// Person responsible for the company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Executive {
    /// Full name.
    pub name: String,
    /// CPF (national tax id).
    pub cpf: String,
    /// RG (identity document).
    pub rg: Option<String>,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
}

/// Company identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    /// Legal name (razão social).
    pub name: String,
    /// CNPJ (registration number).
    pub cnpj: String,
    /// State tax id (inscrição estadual).
    pub ie: Option<String>,
    /// Municipal tax id (inscrição municipal).
    pub im: Option<String>,
    /// Website.
    pub website: Option<String>,
    /// Legal type (LTDA, SA, MEI, ...).
    pub company_type: String,
    /// Primary activity.
    pub activity: String,
}

/// Alternate contact person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    /// Contact name.
    pub name: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Contact email.
    pub email: Option<String>,
}

/// Primary address; everything but the complement is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    /// CEP (postal code).
    pub cep: String,
    /// Street.
    pub street: String,
    /// Street number.
    pub number: String,
    /// Complement.
    pub complement: Option<String>,
    /// Neighborhood.
    pub neighborhood: String,
    /// City.
    pub city: String,
    /// State (UF).
    pub state: String,
}

/// Secondary address. Present only when the form flags one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdditionalAddress {
    /// CEP (postal code).
    pub cep: Option<String>,
    /// Street.
    pub street: Option<String>,
    /// Street number.
    pub number: Option<String>,
    /// Complement.
    pub complement: Option<String>,
    /// Neighborhood.
    pub neighborhood: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State (UF).
    pub state: Option<String>,
}

/// Banking details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Banking {
    /// Bank code.
    pub code: Option<String>,
    /// Bank name.
    pub name: Option<String>,
    /// Agency.
    pub agency: Option<String>,
    /// Account.
    pub account: Option<String>,
    /// PIX key.
    pub pix: Option<String>,
}

/// Distribution network descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DistributionNetwork {
    /// Network type.
    pub network_type: Option<String>,
    /// Network size.
    pub size: Option<String>,
}

/// One registration, normalized.
///
/// Optional strings are `None` when absent or blank, never `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// Executive identity.
    pub executive: Executive,
    /// Company identity.
    pub company: Company,
    /// Alternate contact.
    pub contact: Contact,
    /// Primary address.
    pub address: Address,
    /// Secondary address, `Some` iff `hasAdditionalAddress` was true.
    pub additional_address: Option<AdditionalAddress>,
    /// Banking details.
    pub banking: Banking,
    /// Free-text commercial references; line breaks are kept.
    pub commercial_references: Option<String>,
    /// Sales segment tags.
    pub sales_segment: Vec<String>,
    /// Distribution network.
    pub network: DistributionNetwork,
    /// Fiscal regime tag.
    pub fiscal_regime: Option<String>,
}

impl Submission {
    /// Decodes and normalizes the raw `data` field in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is malformed or a required field is blank.
    pub fn parse(raw: &str) -> Result<Self, RegistrationError> {
        Self::from_payload(RegistrationPayload::from_json(raw)?)
    }

    /// Normalizes a decoded payload.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::MissingField`] if a required field is blank.
    pub fn from_payload(p: RegistrationPayload) -> Result<Self, RegistrationError> {
        let executive = Executive {
            name: required(p.executive_name, "executiveName")?,
            cpf: required(p.executive_cpf, "executiveCpf")?,
            rg: optional(p.executive_rg),
            email: required(p.executive_email, "executiveEmail")?,
            phone: optional(p.executive_phone),
        };

        let company = Company {
            name: required(p.company_name, "companyName")?,
            cnpj: required(p.company_cnpj, "companyCnpj")?,
            ie: optional(p.company_ie),
            im: optional(p.company_im),
            website: optional(p.company_website),
            company_type: required(p.company_type, "companyType")?,
            activity: required(p.company_activity, "companyActivity")?,
        };

        let address = Address {
            cep: required(p.address_cep, "addressCep")?,
            street: required(p.address_street, "addressStreet")?,
            number: required(p.address_number, "addressNumber")?,
            complement: optional(p.address_complement),
            neighborhood: required(p.address_neighborhood, "addressNeighborhood")?,
            city: required(p.address_city, "addressCity")?,
            state: required(p.address_state, "addressState")?,
        };

        let additional_address = p
            .has_additional_address
            .unwrap_or(false)
            .then(|| AdditionalAddress {
                cep: optional(p.additional_cep),
                street: optional(p.additional_street),
                number: optional(p.additional_number),
                complement: optional(p.additional_complement),
                neighborhood: optional(p.additional_neighborhood),
                city: optional(p.additional_city),
                state: optional(p.additional_state),
            });

        Ok(Self {
            executive,
            company,
            contact: Contact {
                name: optional(p.contact_name),
                phone: optional(p.contact_phone),
                email: optional(p.contact_email),
            },
            address,
            additional_address,
            banking: Banking {
                code: optional(p.bank_code),
                name: optional(p.bank_name),
                agency: optional(p.bank_agency),
                account: optional(p.bank_account),
                pix: optional(p.bank_pix),
            },
            commercial_references: optional(p.commercial_references),
            sales_segment: p
                .sales_segment
                .unwrap_or_default()
                .into_iter()
                .filter_map(|tag| optional(Some(tag)))
                .collect(),
            network: DistributionNetwork {
                network_type: optional(p.network_type),
                size: optional(p.network_size),
            },
            fiscal_regime: optional(p.fiscal_regime),
        })
    }

    /// Whether the secondary address section applies.
    #[must_use]
    pub fn has_additional_address(&self) -> bool {
        self.additional_address.is_some()
    }
}

fn required(value: String, field: &'static str) -> Result<String, RegistrationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RegistrationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn minimal_payload() -> RegistrationPayload {
        RegistrationPayload {
            executive_name: "Ana Silva".into(),
            executive_cpf: "123.456.789-00".into(),
            executive_email: "ana@x.com".into(),
            company_name: "Acme LLC".into(),
            company_cnpj: "11.222.333/0001-44".into(),
            company_type: "LTDA".into(),
            company_activity: "Retail".into(),
            address_cep: "01000-000".into(),
            address_street: "Rua A".into(),
            address_number: "10".into(),
            address_neighborhood: "Centro".into(),
            address_city: "São Paulo".into(),
            address_state: "SP".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_payload_normalizes() {
        let record = Submission::from_payload(minimal_payload()).expect("valid record");
        assert_eq!(record.company.name, "Acme LLC");
        assert_eq!(record.executive.rg, None);
        assert_eq!(record.executive.phone, None);
        assert!(!record.has_additional_address());
        assert!(record.sales_segment.is_empty());
        assert_eq!(record.banking, Banking::default());
    }

    #[rstest]
    #[case::name(|p: &mut RegistrationPayload| p.executive_name = "  ".into(), "executiveName")]
    #[case::cnpj(|p: &mut RegistrationPayload| p.company_cnpj = String::new(), "companyCnpj")]
    #[case::city(|p: &mut RegistrationPayload| p.address_city = "\t".into(), "addressCity")]
    #[case::state(|p: &mut RegistrationPayload| p.address_state = String::new(), "addressState")]
    fn test_blank_required_field_is_rejected(
        #[case] blank: fn(&mut RegistrationPayload),
        #[case] field: &'static str,
    ) {
        let mut payload = minimal_payload();
        blank(&mut payload);
        assert_eq!(
            Submission::from_payload(payload),
            Err(RegistrationError::MissingField(field))
        );
    }

    #[test]
    fn test_additional_address_dropped_without_flag() {
        let mut payload = minimal_payload();
        payload.additional_city = Some("Campinas".into());
        let record = Submission::from_payload(payload.clone()).unwrap();
        assert_eq!(record.additional_address, None);

        payload.has_additional_address = Some(true);
        let record = Submission::from_payload(payload).unwrap();
        let additional = record.additional_address.expect("flagged address kept");
        assert_eq!(additional.city.as_deref(), Some("Campinas"));
        assert_eq!(additional.street, None);
    }

    #[test]
    fn test_blank_sales_segment_tags_are_dropped() {
        let mut payload = minimal_payload();
        payload.sales_segment = Some(vec!["Varejo".into(), " ".into(), "Atacado ".into()]);
        let record = Submission::from_payload(payload).unwrap();
        assert_eq!(record.sales_segment, vec!["Varejo", "Atacado"]);
    }

    #[test]
    fn test_commercial_references_keep_line_breaks() {
        let mut payload = minimal_payload();
        payload.commercial_references = Some("Fornecedor A\nFornecedor B\n".into());
        let record = Submission::from_payload(payload).unwrap();
        assert_eq!(
            record.commercial_references.as_deref(),
            Some("Fornecedor A\nFornecedor B")
        );
    }

    #[test]
    fn test_parse_combines_decode_and_normalize() {
        let raw = serde_json::to_string(&minimal_payload()).unwrap();
        let record = Submission::parse(&raw).unwrap();
        assert_eq!(record.address.state, "SP");

        assert!(matches!(
            Submission::parse("null"),
            Err(RegistrationError::MalformedPayload(_))
        ));
    }

    proptest! {
        /// Optional fields are `None` exactly when blank, otherwise trimmed.
        #[test]
        fn prop_optional_fields_never_blank(value in "[ \\t]*[a-zA-Z0-9 ]{0,12}[ \\t]*") {
            let mut payload = minimal_payload();
            payload.executive_rg = Some(value.clone());
            let record = Submission::from_payload(payload).unwrap();

            if value.trim().is_empty() {
                prop_assert_eq!(record.executive.rg, None);
            } else {
                prop_assert_eq!(record.executive.rg.as_deref(), Some(value.trim()));
            }
        }
    }
}
