//! Case-insensitive title lookup over one category's terms.

use glossa_core::model::{Term, valid_terms};
use std::collections::HashMap;

/// Normalized view of a term list: lowered titles in input order plus a
/// title → term lookup.
///
/// Terms without a title are dropped here, whatever the caller did
/// upstream. Duplicate titles collide in the lookup; the later term wins,
/// which mirrors how the underlying documents behave.
#[derive(Debug)]
pub struct TermIndex<'a> {
    terms: Vec<&'a Term>,
    titles: Vec<String>,
    by_title: HashMap<String, usize>,
}

impl<'a> TermIndex<'a> {
    #[must_use]
    pub fn from_terms(terms: &'a [Term]) -> Self {
        let terms: Vec<&Term> = valid_terms(terms).collect();
        let titles: Vec<String> = terms.iter().map(|t| t.title.to_lowercase()).collect();

        let mut by_title = HashMap::with_capacity(titles.len());
        for (pos, title) in titles.iter().enumerate() {
            by_title.insert(title.clone(), pos);
        }

        Self {
            terms,
            titles,
            by_title,
        }
    }

    /// Indexed terms in input order.
    #[must_use]
    pub fn terms(&self) -> &[&'a Term] {
        &self.terms
    }

    /// Lowered titles aligned with [`Self::terms`].
    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Resolve a lowered title to its term.
    #[must_use]
    pub fn resolve(&self, lowered_title: &str) -> Option<&'a Term> {
        self.position(lowered_title).map(|pos| self.terms[pos])
    }

    /// Position of a lowered title in [`Self::terms`].
    #[must_use]
    pub fn position(&self, lowered_title: &str) -> Option<usize> {
        self.by_title.get(lowered_title).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
