//! Editing operations over an in-memory glossary document.
//!
//! All functions mutate a `GlossaryData` the caller owns; persistence is
//! the caller's concern (load, mutate, save). Lookup failures are typed
//! errors, never panics.

use crate::error::OpsError;
use crate::ident;
use crate::model::{Category, Definitions, GlossaryData, Term};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A term without an id, as supplied by editing surfaces and bulk import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermDraft {
    pub title: String,
    #[serde(default)]
    pub definitions: Definitions,
    #[serde(rename = "isUnderstood", default, skip_serializing_if = "Option::is_none")]
    pub is_understood: Option<bool>,
}

impl TermDraft {
    fn into_term(self, id: String) -> Term {
        Term {
            id,
            title: self.title,
            definitions: self.definitions,
            is_understood: self.is_understood,
        }
    }
}

/// A partial term update. Provided fields replace the term's fields
/// wholesale (spread-merge); absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermPatch {
    pub title: Option<String>,
    pub definitions: Option<Definitions>,
    pub is_understood: Option<bool>,
}

impl TermPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.definitions.is_none() && self.is_understood.is_none()
    }
}

/// Append a new category and return its id.
pub fn add_category(data: &mut GlossaryData, name: impl Into<String>) -> String {
    let id = ident::new_category_id();
    data.categories.push(Category {
        id: id.clone(),
        name: name.into(),
        terms: Vec::new(),
    });
    debug!(category_id = %id, "category added");
    id
}

/// Rename an existing category.
///
/// # Errors
///
/// Returns `CategoryNotFound` if no category has `category_id`.
pub fn rename_category(
    data: &mut GlossaryData,
    category_id: &str,
    name: impl Into<String>,
) -> Result<(), OpsError> {
    let category = require_category(data, category_id)?;
    category.name = name.into();
    Ok(())
}

/// Remove a category and all terms it contains, returning it.
///
/// # Errors
///
/// Returns `CategoryNotFound` if no category has `category_id`.
pub fn delete_category(data: &mut GlossaryData, category_id: &str) -> Result<Category, OpsError> {
    let idx = data
        .categories
        .iter()
        .position(|c| c.id == category_id)
        .ok_or_else(|| OpsError::CategoryNotFound {
            id: category_id.to_string(),
        })?;
    Ok(data.categories.remove(idx))
}

/// Append a new term to a category and return the minted term id.
///
/// # Errors
///
/// Returns `CategoryNotFound` if no category has `category_id`.
pub fn add_term(
    data: &mut GlossaryData,
    category_id: &str,
    draft: TermDraft,
) -> Result<String, OpsError> {
    let category = require_category(data, category_id)?;
    let id = ident::new_term_id();
    category.terms.push(draft.into_term(id.clone()));
    debug!(category_id, term_id = %id, "term added");
    Ok(id)
}

/// Append many terms at once, returning the minted ids in draft order.
///
/// # Errors
///
/// Returns `CategoryNotFound` if no category has `category_id`; in that
/// case no draft is added.
pub fn bulk_add_terms(
    data: &mut GlossaryData,
    category_id: &str,
    drafts: Vec<TermDraft>,
) -> Result<Vec<String>, OpsError> {
    let category = require_category(data, category_id)?;
    let mut ids = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let id = ident::new_term_id();
        category.terms.push(draft.into_term(id.clone()));
        ids.push(id);
    }
    debug!(category_id, added = ids.len(), "bulk terms added");
    Ok(ids)
}

/// Apply a partial update to a term. The id is immutable.
///
/// # Errors
///
/// Returns `CategoryNotFound` / `TermNotFound` on a bad id pair.
pub fn update_term(
    data: &mut GlossaryData,
    category_id: &str,
    term_id: &str,
    patch: TermPatch,
) -> Result<(), OpsError> {
    let term = require_term(data, category_id, term_id)?;
    if let Some(title) = patch.title {
        term.title = title;
    }
    if let Some(definitions) = patch.definitions {
        term.definitions = definitions;
    }
    if let Some(understood) = patch.is_understood {
        term.is_understood = Some(understood);
    }
    Ok(())
}

/// Remove a term from a category, returning it.
///
/// # Errors
///
/// Returns `CategoryNotFound` / `TermNotFound` on a bad id pair.
pub fn delete_term(
    data: &mut GlossaryData,
    category_id: &str,
    term_id: &str,
) -> Result<Term, OpsError> {
    let category = require_category(data, category_id)?;
    let idx = category
        .terms
        .iter()
        .position(|t| t.id == term_id)
        .ok_or_else(|| OpsError::TermNotFound {
            category_id: category_id.to_string(),
            id: term_id.to_string(),
        })?;
    Ok(category.terms.remove(idx))
}

fn require_category<'a>(
    data: &'a mut GlossaryData,
    category_id: &str,
) -> Result<&'a mut Category, OpsError> {
    data.category_mut(category_id)
        .ok_or_else(|| OpsError::CategoryNotFound {
            id: category_id.to_string(),
        })
}

fn require_term<'a>(
    data: &'a mut GlossaryData,
    category_id: &str,
    term_id: &str,
) -> Result<&'a mut Term, OpsError> {
    require_category(data, category_id)?
        .term_mut(term_id)
        .ok_or_else(|| OpsError::TermNotFound {
            category_id: category_id.to_string(),
            id: term_id.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
