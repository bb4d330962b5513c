//! Loading and saving the glossary document.
//!
//! The document is one pretty-printed JSON file. Consumers depend on the
//! [`GlossaryStore`] trait so the document source can be swapped or faked;
//! [`JsonFileStore`] is the shipping implementation.

use crate::error::StoreError;
use crate::model::GlossaryData;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Persistence seam for the glossary document.
pub trait GlossaryStore {
    /// Load the current document.
    ///
    /// # Errors
    ///
    /// `NotFound` when no document exists yet; `Parse`/`Io` otherwise.
    fn load(&self) -> Result<GlossaryData, StoreError>;

    /// Persist the document, replacing the previous contents.
    ///
    /// # Errors
    ///
    /// `Io` on filesystem failure.
    fn save(&self, data: &GlossaryData) -> Result<(), StoreError>;
}

/// Parse a glossary document from JSON text.
///
/// This is also the import validation step: a document must deserialize
/// cleanly (categories array, terms shaped per the data model) before it
/// can replace the stored one.
///
/// # Errors
///
/// Returns `Parse` with the underlying serde error.
pub fn parse_document(json: &str) -> Result<GlossaryData, StoreError> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a document the way it is stored and exported: pretty-printed,
/// trailing newline.
///
/// # Errors
///
/// Returns `Parse` if serialization fails (not expected for this model).
pub fn to_document_json(data: &GlossaryData) -> Result<String, StoreError> {
    let mut json = serde_json::to_string_pretty(data)?;
    json.push('\n');
    Ok(json)
}

/// Stores the document at a fixed filesystem path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl GlossaryStore for JsonFileStore {
    fn load(&self) -> Result<GlossaryData, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::NotFound {
                path: self.path.clone(),
            });
        }

        let raw = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let data = parse_document(&raw)?;
        debug!(
            path = %self.path.display(),
            categories = data.categories.len(),
            terms = data.term_count(),
            "loaded glossary document"
        );
        Ok(data)
    }

    fn save(&self, data: &GlossaryData) -> Result<(), StoreError> {
        let json = to_document_json(data)?;

        // Write-then-rename so an interrupted save never truncates the
        // existing document.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        info!(path = %self.path.display(), categories = data.categories.len(), "saved glossary document");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Definitions, Term};

    fn sample_data() -> GlossaryData {
        GlossaryData {
            categories: vec![Category {
                id: "cat-1".into(),
                name: "Tech".into(),
                terms: vec![Term {
                    id: "term-1".into(),
                    title: "API".into(),
                    definitions: Definitions {
                        istilah: Some("An interface".into()),
                        ..Definitions::default()
                    },
                    is_understood: None,
                }],
            }],
        }
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("glossary.json"));
        let data = sample_data();

        store.save(&data).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("glossary.json"));
        store.save(&sample_data()).unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["glossary.json"], "tmp file must be renamed away");
    }

    #[test]
    fn load_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("glossary.json"));
        let err = store.load().unwrap_err();
        assert_eq!(err.error_code(), "document_missing");
        assert!(err.suggestion().unwrap().contains("glossa init"));
    }

    #[test]
    fn load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glossary.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).load().unwrap_err();
        assert_eq!(err.error_code(), "document_invalid");
    }

    #[test]
    fn parse_document_rejects_wrong_shape() {
        assert!(parse_document(r#"{"categories": 42}"#).is_err());
        assert!(parse_document(r#"{"categories": [{"id":"c"}]}"#).is_err(), "name is required");
    }

    #[test]
    fn parse_document_tolerates_missing_optionals() {
        let data = parse_document(r#"{"categories": [{"id":"c","name":"N"}]}"#).unwrap();
        assert!(data.categories[0].terms.is_empty());

        let empty = parse_document("{}").unwrap();
        assert!(empty.categories.is_empty());
    }

    #[test]
    fn document_json_is_pretty_with_trailing_newline() {
        let json = to_document_json(&sample_data()).unwrap();
        assert!(json.ends_with('\n'));
        assert!(json.contains("\n  "), "expected pretty indentation");
        assert_eq!(parse_document(&json).unwrap(), sample_data());
    }
}
