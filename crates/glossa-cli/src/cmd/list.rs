//! `glossa list` — terms of a category in dependency-first reading order.

use std::io::Write;

use clap::Args;
use glossa_core::GlossaryStore;
use glossa_graph::sort_terms_by_dependency;
use serde::Serialize;

use crate::cmd::load_document;
use crate::output::{OutputMode, render};
use crate::resolve;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Category id, name, or unique id prefix.
    pub category: String,
}

#[derive(Debug, Serialize)]
struct ListReport {
    category_id: String,
    category_name: String,
    terms: Vec<ListEntry>,
}

#[derive(Debug, Serialize)]
struct ListEntry {
    id: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_understood: Option<bool>,
}

/// List a category's terms so that prerequisites come before the terms
/// that mention them.
pub fn run_list(
    args: &ListArgs,
    output: OutputMode,
    store: &impl GlossaryStore,
) -> anyhow::Result<()> {
    let data = load_document(store, output)?;
    let category = resolve::require_category(&data, &args.category, output)?;

    let ordered = sort_terms_by_dependency(&category.terms);
    let report = ListReport {
        category_id: category.id.clone(),
        category_name: category.name.clone(),
        terms: ordered
            .into_iter()
            .map(|term| ListEntry {
                id: term.id,
                title: term.title,
                is_understood: term.is_understood,
            })
            .collect(),
    };

    render(output, &report, render_list_human)
}

fn render_list_human(report: &ListReport, w: &mut dyn Write) -> std::io::Result<()> {
    if report.terms.is_empty() {
        writeln!(
            w,
            "No terms in '{}' yet. Add one with `glossa term add {} --title <TITLE>`.",
            report.category_name, report.category_id
        )?;
        return Ok(());
    }

    writeln!(
        w,
        "Reading order for '{}' ({} terms)",
        report.category_name,
        report.terms.len()
    )?;
    for (position, entry) in report.terms.iter().enumerate() {
        let marker = if entry.is_understood == Some(true) { 'x' } else { ' ' };
        writeln!(
            w,
            "{:>3}. [{marker}] {}  ({})",
            position + 1,
            entry.title,
            entry.id
        )?;
    }
    Ok(())
}
