//! Category and term argument resolution.
//!
//! User-facing commands accept loose references: an exact id, an exact
//! case-insensitive name or title, or a unique id prefix, tried in that
//! order. Ambiguity is an error listing the candidates rather than a
//! silent pick.

use crate::output::{CliError, OutputMode, render_error};
use glossa_core::{Category, GlossaryData, Term};

/// Find a category by id, case-insensitive name, or unique id prefix.
///
/// # Errors
///
/// `CliError` with code `category_not_found` or `category_ambiguous`.
pub fn find_category<'a>(data: &'a GlossaryData, input: &str) -> Result<&'a Category, CliError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(not_found_category(input));
    }

    // 1. Exact id match
    if let Some(category) = data.categories.iter().find(|c| c.id == input) {
        return Ok(category);
    }

    // 2. Exact name match, case-insensitive
    let lowered = input.to_lowercase();
    let by_name: Vec<&Category> = data
        .categories
        .iter()
        .filter(|c| c.name.to_lowercase() == lowered)
        .collect();
    match by_name.as_slice() {
        [] => {}
        [category] => return Ok(category),
        candidates => {
            return Err(ambiguous(
                "category",
                input,
                candidates.iter().map(|c| category_label(c)),
            ));
        }
    }

    // 3. Unique id prefix
    let by_prefix: Vec<&Category> = data
        .categories
        .iter()
        .filter(|c| c.id.starts_with(input))
        .collect();
    match by_prefix.as_slice() {
        [category] => Ok(category),
        [] => Err(not_found_category(input)),
        candidates => Err(ambiguous(
            "category",
            input,
            candidates.iter().map(|c| category_label(c)),
        )),
    }
}

/// Find a term inside a category by id, case-insensitive title, or unique
/// id prefix.
///
/// # Errors
///
/// `CliError` with code `term_not_found` or `term_ambiguous`.
pub fn find_term<'a>(category: &'a Category, input: &str) -> Result<&'a Term, CliError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(not_found_term(category, input));
    }

    if let Some(term) = category.terms.iter().find(|t| t.id == input) {
        return Ok(term);
    }

    let lowered = input.to_lowercase();
    let by_title: Vec<&Term> = category
        .terms
        .iter()
        .filter(|t| t.has_title() && t.title.to_lowercase() == lowered)
        .collect();
    match by_title.as_slice() {
        [] => {}
        [term] => return Ok(term),
        candidates => {
            return Err(ambiguous("term", input, candidates.iter().map(|t| term_label(t))));
        }
    }

    let by_prefix: Vec<&Term> = category
        .terms
        .iter()
        .filter(|t| t.id.starts_with(input))
        .collect();
    match by_prefix.as_slice() {
        [term] => Ok(term),
        [] => Err(not_found_term(category, input)),
        candidates => Err(ambiguous("term", input, candidates.iter().map(|t| term_label(t)))),
    }
}

/// Resolve a category or render the failure and bail.
///
/// # Errors
///
/// Returns a terse `anyhow` error after the detailed `CliError` has been
/// written to stderr.
pub fn require_category<'a>(
    data: &'a GlossaryData,
    input: &str,
    output: OutputMode,
) -> anyhow::Result<&'a Category> {
    match find_category(data, input) {
        Ok(category) => Ok(category),
        Err(err) => {
            render_error(output, &err)?;
            anyhow::bail!("category not found")
        }
    }
}

/// Resolve a term or render the failure and bail.
///
/// # Errors
///
/// Returns a terse `anyhow` error after the detailed `CliError` has been
/// written to stderr.
pub fn require_term<'a>(
    category: &'a Category,
    input: &str,
    output: OutputMode,
) -> anyhow::Result<&'a Term> {
    match find_term(category, input) {
        Ok(term) => Ok(term),
        Err(err) => {
            render_error(output, &err)?;
            anyhow::bail!("term not found")
        }
    }
}

fn category_label(category: &Category) -> String {
    format!("{} ({})", category.id, category.name)
}

fn term_label(term: &Term) -> String {
    if term.has_title() {
        format!("{} ({})", term.id, term.title)
    } else {
        term.id.clone()
    }
}

fn not_found_category(input: &str) -> CliError {
    CliError::with_details(
        format!("category '{input}' not found"),
        "use `glossa category list` to see available categories",
        "category_not_found",
    )
}

fn not_found_term(category: &Category, input: &str) -> CliError {
    CliError::with_details(
        format!("term '{}' not found in category '{}'", input, category.name),
        format!("use `glossa list {}` to see available terms", category.id),
        "term_not_found",
    )
}

fn ambiguous(kind: &str, input: &str, candidates: impl Iterator<Item = String>) -> CliError {
    let listed: Vec<String> = candidates.collect();
    CliError::with_details(
        format!("{kind} '{input}' is ambiguous"),
        format!("candidates: {}", listed.join(", ")),
        format!("{kind}_ambiguous"),
    )
}
