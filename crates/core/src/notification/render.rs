//! Rendering of the back-office notification.

use std::fmt::Write as _;

use chrono::DateTime;
use chrono_tz::Tz;

use super::section::{Field, Section, SectionBody, SectionBuilder};
use crate::registration::Submission;

const STYLE: &str = "\
body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
.container { max-width: 800px; margin: 0 auto; padding: 20px; }
.header { background-color: #f8f9fa; padding: 20px; border-radius: 8px; margin-bottom: 20px; }
.section { margin-bottom: 25px; }
.section h3 { color: #2c3e50; border-bottom: 2px solid #3498db; padding-bottom: 5px; }
.grid { display: grid; grid-template-columns: 1fr 1fr; gap: 15px; }
.field { margin-bottom: 10px; }
.label { font-weight: bold; color: #555; }
.value { margin-left: 10px; }
.files { background-color: #f8f9fa; padding: 15px; border-radius: 5px; }";

/// Rendered notification for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Subject line.
    pub subject: String,
    /// Company name shown in the header.
    pub company_name: String,
    /// Submission timestamp, `dd/mm/yyyy, HH:MM:SS`.
    pub submitted_at: String,
    /// Visible sections, in order.
    pub sections: Vec<Section>,
}

impl Notification {
    /// Builds the notification for `record` and its attachment links.
    ///
    /// Pure: the same inputs always produce the same notification.
    #[must_use]
    pub fn render(record: &Submission, links: &[String], submitted_at: DateTime<Tz>) -> Self {
        Self {
            subject: format!("Nova Ficha Cadastral - {}", record.company.name),
            company_name: record.company.name.clone(),
            submitted_at: submitted_at.format("%d/%m/%Y, %H:%M:%S").to_string(),
            sections: sections(record, links),
        }
    }

    /// Looks up a visible section by title.
    #[must_use]
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// HTML body; every submitted value is escaped.
    #[must_use]
    pub fn html(&self) -> String {
        let mut out = String::with_capacity(4096);
        let _ = write!(
            out,
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><style>{STYLE}</style></head><body>\
             <div class=\"container\"><div class=\"header\"><h2>Nova Ficha Cadastral Recebida</h2>\
             <p><strong>Empresa:</strong> {}</p><p><strong>Data/Hora:</strong> {}</p></div>",
            escape(&self.company_name),
            escape(&self.submitted_at),
        );

        for section in &self.sections {
            let _ = write!(out, "<div class=\"section\"><h3>{}</h3>", escape(section.title));
            match &section.body {
                SectionBody::Fields(fields) => {
                    out.push_str("<div class=\"grid\">");
                    for field in fields {
                        let _ = write!(
                            out,
                            "<div class=\"field\"><span class=\"label\">{}:</span>\
                             <span class=\"value\">{}</span></div>",
                            escape(field.label),
                            escape(&field.value),
                        );
                    }
                    out.push_str("</div>");
                }
                SectionBody::Paragraph { text, preformatted } => {
                    let style = if *preformatted {
                        " style=\"white-space: pre-wrap;\""
                    } else {
                        ""
                    };
                    let _ = write!(out, "<p{style}>{}</p>", escape(text));
                }
                SectionBody::Lines(lines) => {
                    out.push_str("<div class=\"files\">");
                    for line in lines {
                        let _ = write!(out, "<p>{}</p>", escape(line));
                    }
                    out.push_str("</div>");
                }
            }
            out.push_str("</div>");
        }

        out.push_str("</div></body></html>");
        out
    }

    /// Plain-text alternative of [`Self::html`].
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = format!(
            "Nova Ficha Cadastral Recebida\n\nEmpresa: {}\nData/Hora: {}\n",
            self.company_name, self.submitted_at
        );

        for section in &self.sections {
            let rule = "-".repeat(section.title.chars().count());
            let _ = write!(out, "\n{}\n{rule}\n", section.title);
            match &section.body {
                SectionBody::Fields(fields) => {
                    for field in fields {
                        let _ = writeln!(out, "{}: {}", field.label, field.value);
                    }
                }
                SectionBody::Paragraph { text, .. } => {
                    let _ = writeln!(out, "{text}");
                }
                SectionBody::Lines(lines) => {
                    for line in lines {
                        let _ = writeln!(out, "{line}");
                    }
                }
            }
        }

        out
    }
}

fn sections(r: &Submission, links: &[String]) -> Vec<Section> {
    let ex = &r.executive;
    let co = &r.company;
    let ad = &r.address;

    SectionBuilder::new()
        .fields("Dados do Responsável", true, || {
            vec![
                Field::required("Nome", &ex.name),
                Field::required("CPF", &ex.cpf),
                Field::optional("RG", ex.rg.as_deref()),
                Field::required("Email", &ex.email),
                Field::optional("Telefone", ex.phone.as_deref()),
            ]
        })
        .fields("Dados da Empresa", true, || {
            vec![
                Field::required("Razão Social", &co.name),
                Field::required("CNPJ", &co.cnpj),
                Field::optional("IE", co.ie.as_deref()),
                Field::optional("IM", co.im.as_deref()),
                Field::optional("Website", co.website.as_deref()),
                Field::required("Tipo", &co.company_type),
                Field::required("Atividade", &co.activity),
            ]
        })
        .fields("Endereço Principal", true, || {
            vec![
                Field::required("CEP", &ad.cep),
                Field::required("Logradouro", &ad.street),
                Field::required("Número", &ad.number),
                Field::optional("Complemento", ad.complement.as_deref()),
                Field::required("Bairro", &ad.neighborhood),
                Field::required("Cidade", &ad.city),
                Field::required("Estado", &ad.state),
            ]
        })
        .fields("Endereço Adicional", r.has_additional_address(), || {
            let extra = r.additional_address.clone().unwrap_or_default();
            vec![
                Field::optional("CEP", extra.cep.as_deref()),
                Field::optional("Logradouro", extra.street.as_deref()),
                Field::optional("Número", extra.number.as_deref()),
                Field::optional("Complemento", extra.complement.as_deref()),
                Field::optional("Bairro", extra.neighborhood.as_deref()),
                Field::optional("Cidade", extra.city.as_deref()),
                Field::optional("Estado", extra.state.as_deref()),
            ]
        })
        .fields("Contato Alternativo", r.contact.name.is_some(), || {
            vec![
                Field::optional("Nome", r.contact.name.as_deref()),
                Field::optional("Telefone", r.contact.phone.as_deref()),
                Field::optional("Email", r.contact.email.as_deref()),
            ]
        })
        .fields("Dados Bancários", r.banking.name.is_some(), || {
            vec![
                Field::optional("Código", r.banking.code.as_deref()),
                Field::optional("Banco", r.banking.name.as_deref()),
                Field::optional("Agência", r.banking.agency.as_deref()),
                Field::optional("Conta", r.banking.account.as_deref()),
                Field::optional("PIX", r.banking.pix.as_deref()),
            ]
        })
        .paragraph(
            "Segmento de Vendas",
            (!r.sales_segment.is_empty()).then(|| r.sales_segment.join(", ")),
            false,
        )
        .fields("Rede de Distribuição", r.network.network_type.is_some(), || {
            vec![
                Field::optional("Tipo", r.network.network_type.as_deref()),
                Field::optional("Tamanho", r.network.size.as_deref()),
            ]
        })
        .paragraph("Regime Fiscal", r.fiscal_regime.clone(), false)
        .paragraph(
            "Referências Comerciais",
            r.commercial_references.clone(),
            true,
        )
        .lines("Arquivos Anexados", links)
        .build()
}

/// Escapes text for HTML element content and attribute values.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
