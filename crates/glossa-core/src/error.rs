//! Typed errors for the persistence and editing layers.
//!
//! Each error exposes a stable `error_code()` string for machine-readable
//! output and an optional `suggestion()` hint for human-facing rendering.
//! The analysis crates (graph, quiz) have no error surface: malformed
//! input is filtered and empty results are valid outputs.

use std::path::PathBuf;

/// Failures loading or saving the glossary document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No document exists at the configured path.
    #[error("glossary document not found at {path}")]
    NotFound { path: PathBuf },

    /// The file exists but does not parse as a glossary document.
    #[error("invalid glossary document: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// Underlying filesystem failure.
    #[error("glossary I/O failed on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StoreError {
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "document_missing",
            Self::Parse { .. } => "document_invalid",
            Self::Io { .. } => "document_io",
        }
    }

    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => Some("run `glossa init` to create a glossary document"),
            Self::Parse { .. } => {
                Some("the file is not a valid glossary export; re-export or fix the JSON")
            }
            Self::Io { .. } => None,
        }
    }
}

/// Failures from editing operations on an in-memory document.
#[derive(Debug, thiserror::Error)]
pub enum OpsError {
    #[error("category '{id}' not found")]
    CategoryNotFound { id: String },

    #[error("term '{id}' not found in category '{category_id}'")]
    TermNotFound { category_id: String, id: String },
}

impl OpsError {
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CategoryNotFound { .. } => "category_not_found",
            Self::TermNotFound { .. } => "term_not_found",
        }
    }

    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::CategoryNotFound { .. } => {
                Some("use `glossa category list` to see available categories")
            }
            Self::TermNotFound { .. } => {
                Some("use `glossa list <category>` to see available terms")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
