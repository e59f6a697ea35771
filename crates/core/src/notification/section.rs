//! Section builder for the notification body.
//!
//! A notification is an ordered list of sections. Each section is declared once
//! with its title, a visibility flag and its content, so the "value or not
//! provided" fallback lives in a single place.

/// Placeholder for optional values the submitter left empty.
pub const NOT_PROVIDED: &str = "Não informado";

/// A labelled value inside a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Label shown before the value.
    pub label: &'static str,
    /// Value, already resolved to [`NOT_PROVIDED`] when absent.
    pub value: String,
}

impl Field {
    /// A field that is always filled.
    #[must_use]
    pub fn required(label: &'static str, value: &str) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }

    /// A field that falls back to [`NOT_PROVIDED`].
    #[must_use]
    pub fn optional(label: &'static str, value: Option<&str>) -> Self {
        Self {
            label,
            value: value.unwrap_or(NOT_PROVIDED).to_string(),
        }
    }
}

/// Content of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    /// Label/value grid.
    Fields(Vec<Field>),
    /// Single paragraph; `preformatted` keeps line breaks.
    Paragraph {
        /// Paragraph text.
        text: String,
        /// Whether line breaks are significant.
        preformatted: bool,
    },
    /// One line per entry, in order.
    Lines(Vec<String>),
}

/// A titled section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section heading.
    pub title: &'static str,
    /// Section content.
    pub body: SectionBody,
}

/// Collects visible sections in declaration order.
#[derive(Debug, Default)]
pub struct SectionBuilder {
    sections: Vec<Section>,
}

impl SectionBuilder {
    /// Empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a label/value section when `visible`.
    #[must_use]
    pub fn fields(
        self,
        title: &'static str,
        visible: bool,
        fields: impl FnOnce() -> Vec<Field>,
    ) -> Self {
        self.push(title, visible, || SectionBody::Fields(fields()))
    }

    /// Adds a paragraph section when `text` is present.
    #[must_use]
    pub fn paragraph(self, title: &'static str, text: Option<String>, preformatted: bool) -> Self {
        match text {
            Some(text) => self.push(title, true, || SectionBody::Paragraph {
                text,
                preformatted,
            }),
            None => self,
        }
    }

    /// Adds a one-line-per-entry section when `lines` is non-empty.
    #[must_use]
    pub fn lines(self, title: &'static str, lines: &[String]) -> Self {
        self.push(title, !lines.is_empty(), || SectionBody::Lines(lines.to_vec()))
    }

    /// Finished sections.
    #[must_use]
    pub fn build(self) -> Vec<Section> {
        self.sections
    }

    fn push(
        mut self,
        title: &'static str,
        visible: bool,
        body: impl FnOnce() -> SectionBody,
    ) -> Self {
        if visible {
            self.sections.push(Section {
                title,
                body: body(),
            });
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_field_falls_back() {
        assert_eq!(Field::optional("RG", None).value, NOT_PROVIDED);
        assert_eq!(Field::optional("RG", Some("12.345")).value, "12.345");
    }

    #[test]
    fn test_hidden_sections_are_skipped_in_order() {
        let sections = SectionBuilder::new()
            .fields("A", true, || vec![Field::required("x", "1")])
            .fields("B", false, || unreachable!("hidden sections are not evaluated"))
            .paragraph("C", None, false)
            .paragraph("D", Some("texto".into()), true)
            .lines("E", &[])
            .lines("F", &["l1".to_string(), "l2".to_string()])
            .build();

        let titles: Vec<&str> = sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["A", "D", "F"]);
        assert_eq!(
            sections[2].body,
            SectionBody::Lines(vec!["l1".into(), "l2".into()])
        );
    }
}
