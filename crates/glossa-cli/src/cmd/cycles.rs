//! `glossa cycles` — circular reference groups within a category.

use std::collections::HashMap;
use std::io::Write;

use clap::Args;
use glossa_core::GlossaryStore;
use glossa_graph::{TermGraph, find_reference_cycles};
use serde::Serialize;

use crate::cmd::load_document;
use crate::output::{OutputMode, render};
use crate::resolve;

#[derive(Args, Debug)]
pub struct CyclesArgs {
    /// Category id, name, or unique id prefix.
    pub category: String,
}

#[derive(Debug, Serialize)]
struct CyclesReport {
    category_id: String,
    cycles: Vec<Vec<String>>,
}

/// Report groups of terms whose definitions mention each other in a loop.
/// Cycles are legitimate in a glossary; this is a lens, not a linter.
pub fn run_cycles(
    args: &CyclesArgs,
    output: OutputMode,
    store: &impl GlossaryStore,
) -> anyhow::Result<()> {
    let data = load_document(store, output)?;
    let category = resolve::require_category(&data, &args.category, output)?;

    let graph = TermGraph::from_terms(&category.terms);
    let report = CyclesReport {
        category_id: category.id.clone(),
        cycles: find_reference_cycles(&graph),
    };

    let titles: HashMap<String, String> = category
        .terms
        .iter()
        .map(|term| (term.id.clone(), term.title.clone()))
        .collect();
    render(output, &report, move |found, w| {
        render_cycles_human(found, &titles, w)
    })
}

fn render_cycles_human(
    report: &CyclesReport,
    titles: &HashMap<String, String>,
    w: &mut dyn Write,
) -> std::io::Result<()> {
    if report.cycles.is_empty() {
        writeln!(w, "No circular references found.")?;
        return Ok(());
    }

    writeln!(w, "Circular reference groups ({})", report.cycles.len())?;
    for (position, cycle) in report.cycles.iter().enumerate() {
        writeln!(w, "Cycle {}:", position + 1)?;
        for id in cycle {
            let title = titles.get(id).map_or(id.as_str(), String::as_str);
            writeln!(w, "  - {title} ({id})")?;
        }
    }
    Ok(())
}
