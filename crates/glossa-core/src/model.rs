use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Sentinel authors use for "this field is intentionally blank".
///
/// A field holding this value (or missing entirely, or empty) counts as
/// not provided: it is skipped by reference scanning, quiz generation,
/// and display.
pub const NOT_PROVIDED: &str = "-";

/// The four recognized free-text definition fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DefinitionField {
    Istilah,
    Bahasa,
    KenapaAda,
    Contoh,
}

impl DefinitionField {
    /// Stable field order, used wherever fields are iterated.
    pub const ALL: [Self; 4] = [Self::Istilah, Self::Bahasa, Self::KenapaAda, Self::Contoh];

    /// The JSON document key for this field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Istilah => "istilah",
            Self::Bahasa => "bahasa",
            Self::KenapaAda => "kenapaAda",
            Self::Contoh => "contoh",
        }
    }

    /// Short human-readable label for rendering.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Istilah => "definition",
            Self::Bahasa => "language meaning",
            Self::KenapaAda => "why it exists",
            Self::Contoh => "example",
        }
    }
}

impl fmt::Display for DefinitionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing an enum value from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFieldError {
    pub got: String,
}

impl fmt::Display for ParseFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid definition field: '{}' (expected istilah, bahasa, kenapa-ada, or contoh)",
            self.got
        )
    }
}

impl std::error::Error for ParseFieldError {}

impl FromStr for DefinitionField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "istilah" => Ok(Self::Istilah),
            "bahasa" => Ok(Self::Bahasa),
            "kenapaada" | "kenapa-ada" | "kenapa_ada" => Ok(Self::KenapaAda),
            "contoh" => Ok(Self::Contoh),
            _ => Err(ParseFieldError { got: s.to_string() }),
        }
    }
}

/// The structured content attached to a term.
///
/// The four prose fields hold free text (possibly with inline HTML);
/// `referensi` holds reference URLs and is never scanned or quizzed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Definitions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub istilah: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bahasa: Option<String>,
    #[serde(rename = "kenapaAda", skip_serializing_if = "Option::is_none")]
    pub kenapa_ada: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contoh: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referensi: Option<Vec<String>>,
}

impl Definitions {
    /// Raw field value, provided or not.
    #[must_use]
    pub fn get(&self, field: DefinitionField) -> Option<&str> {
        match field {
            DefinitionField::Istilah => self.istilah.as_deref(),
            DefinitionField::Bahasa => self.bahasa.as_deref(),
            DefinitionField::KenapaAda => self.kenapa_ada.as_deref(),
            DefinitionField::Contoh => self.contoh.as_deref(),
        }
    }

    /// Field value if actually provided (present, non-empty, not the
    /// `"-"` sentinel).
    #[must_use]
    pub fn provided(&self, field: DefinitionField) -> Option<&str> {
        self.get(field)
            .filter(|value| !value.is_empty() && *value != NOT_PROVIDED)
    }

    /// All provided fields in stable field order.
    pub fn provided_fields(&self) -> impl Iterator<Item = (DefinitionField, &str)> {
        DefinitionField::ALL
            .into_iter()
            .filter_map(|field| self.provided(field).map(|value| (field, value)))
    }

    /// Provided prose joined with single spaces, in stable field order.
    /// This is the text reference scanning reads.
    #[must_use]
    pub fn joined_text(&self) -> String {
        let mut out = String::new();
        for (_, value) in self.provided_fields() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(value);
        }
        out
    }

    /// Reference URLs, empty when none were recorded.
    #[must_use]
    pub fn references(&self) -> &[String] {
        self.referensi.as_deref().unwrap_or_default()
    }
}

/// One glossary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub definitions: Definitions,
    #[serde(rename = "isUnderstood", default, skip_serializing_if = "Option::is_none")]
    pub is_understood: Option<bool>,
}

impl Term {
    /// Terms without a title cannot participate in matching or display.
    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}

/// Keep only terms usable for indexing and display. Upstream documents
/// may carry entries with an empty title; those are dropped, not errors.
pub fn valid_terms(terms: &[Term]) -> impl Iterator<Item = &Term> {
    terms.iter().filter(|term| term.has_title())
}

/// A named, ordered grouping of terms. All graph, ordering, and quiz
/// computation is scoped to one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub terms: Vec<Term>,
}

impl Category {
    #[must_use]
    pub fn term(&self, term_id: &str) -> Option<&Term> {
        self.terms.iter().find(|t| t.id == term_id)
    }

    #[must_use]
    pub fn term_mut(&mut self, term_id: &str) -> Option<&mut Term> {
        self.terms.iter_mut().find(|t| t.id == term_id)
    }
}

/// The whole glossary document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryData {
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl GlossaryData {
    #[must_use]
    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    #[must_use]
    pub fn category_mut(&mut self, category_id: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == category_id)
    }

    /// Total term count across all categories.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.categories.iter().map(|c| c.terms.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn term(id: &str, title: &str, istilah: Option<&str>) -> Term {
        Term {
            id: id.to_string(),
            title: title.to_string(),
            definitions: Definitions {
                istilah: istilah.map(String::from),
                ..Definitions::default()
            },
            is_understood: None,
        }
    }

    // -----------------------------------------------------------------------
    // DefinitionField
    // -----------------------------------------------------------------------

    #[test]
    fn field_keys_match_document_keys() {
        assert_eq!(DefinitionField::Istilah.key(), "istilah");
        assert_eq!(DefinitionField::Bahasa.key(), "bahasa");
        assert_eq!(DefinitionField::KenapaAda.key(), "kenapaAda");
        assert_eq!(DefinitionField::Contoh.key(), "contoh");
    }

    #[test]
    fn field_serde_uses_document_keys() {
        let json = serde_json::to_string(&DefinitionField::KenapaAda).unwrap();
        assert_eq!(json, "\"kenapaAda\"");
        let parsed: DefinitionField = serde_json::from_str("\"kenapaAda\"").unwrap();
        assert_eq!(parsed, DefinitionField::KenapaAda);
    }

    #[test]
    fn field_from_str_accepts_flag_spellings() {
        assert_eq!("istilah".parse::<DefinitionField>().unwrap(), DefinitionField::Istilah);
        assert_eq!(
            "kenapa-ada".parse::<DefinitionField>().unwrap(),
            DefinitionField::KenapaAda
        );
        assert_eq!(
            "KENAPA_ADA".parse::<DefinitionField>().unwrap(),
            DefinitionField::KenapaAda
        );
        assert!("referensi".parse::<DefinitionField>().is_err());
    }

    // -----------------------------------------------------------------------
    // Definitions
    // -----------------------------------------------------------------------

    #[test]
    fn sentinel_and_empty_values_are_not_provided() {
        let defs = Definitions {
            istilah: Some("A real definition".into()),
            bahasa: Some(NOT_PROVIDED.into()),
            kenapa_ada: Some(String::new()),
            contoh: None,
            referensi: None,
        };

        assert_eq!(defs.provided(DefinitionField::Istilah), Some("A real definition"));
        assert_eq!(defs.provided(DefinitionField::Bahasa), None, "sentinel must be skipped");
        assert_eq!(defs.provided(DefinitionField::KenapaAda), None, "empty must be skipped");
        assert_eq!(defs.provided(DefinitionField::Contoh), None);

        let provided: Vec<_> = defs.provided_fields().map(|(f, _)| f).collect();
        assert_eq!(provided, vec![DefinitionField::Istilah]);
    }

    #[test]
    fn joined_text_uses_stable_order_and_single_spaces() {
        let defs = Definitions {
            istilah: Some("first".into()),
            bahasa: None,
            kenapa_ada: Some("second".into()),
            contoh: Some("third".into()),
            referensi: Some(vec!["https://example.com".into()]),
        };
        assert_eq!(defs.joined_text(), "first second third");
    }

    #[test]
    fn joined_text_excludes_reference_urls() {
        let defs = Definitions {
            referensi: Some(vec!["https://example.com/AI".into()]),
            ..Definitions::default()
        };
        assert_eq!(defs.joined_text(), "", "referensi is not prose");
    }

    // -----------------------------------------------------------------------
    // Term / Category / GlossaryData
    // -----------------------------------------------------------------------

    #[test]
    fn valid_terms_drops_titleless_entries() {
        let terms = vec![term("t1", "API", None), term("t2", "", None), term("t3", "CLI", None)];
        let kept: Vec<_> = valid_terms(&terms).map(|t| t.id.as_str()).collect();
        assert_eq!(kept, vec!["t1", "t3"]);
    }

    #[test]
    fn document_roundtrip_preserves_wire_keys() {
        let data = GlossaryData {
            categories: vec![Category {
                id: "cat-1".into(),
                name: "Tech".into(),
                terms: vec![Term {
                    id: "term-1".into(),
                    title: "API".into(),
                    definitions: Definitions {
                        istilah: Some("An interface".into()),
                        kenapa_ada: Some("So programs can talk".into()),
                        ..Definitions::default()
                    },
                    is_understood: Some(true),
                }],
            }],
        };

        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"kenapaAda\""), "wire key must be camelCase: {json}");
        assert!(json.contains("\"isUnderstood\""), "wire key must be camelCase: {json}");
        assert!(!json.contains("\"bahasa\""), "absent fields must be omitted: {json}");

        let back: GlossaryData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn missing_optional_document_fields_default() {
        let json = r#"{"categories":[{"id":"c","name":"N","terms":[{"id":"t","title":"T"}]}]}"#;
        let data: GlossaryData = serde_json::from_str(json).unwrap();
        let t = &data.categories[0].terms[0];
        assert_eq!(t.definitions, Definitions::default());
        assert_eq!(t.is_understood, None);
    }

    #[test]
    fn category_and_term_lookup_by_id() {
        let mut data = GlossaryData {
            categories: vec![Category {
                id: "cat-1".into(),
                name: "Tech".into(),
                terms: vec![term("term-1", "API", None)],
            }],
        };

        assert!(data.category("cat-1").is_some());
        assert!(data.category("cat-9").is_none());
        assert!(data.category("cat-1").unwrap().term("term-1").is_some());
        assert!(data.category_mut("cat-1").unwrap().term_mut("term-9").is_none());
        assert_eq!(data.term_count(), 1);
    }
}
