//! `glossa stats` — structural metrics for a category's reference graph.

use std::collections::HashMap;
use std::io::Write;

use clap::Args;
use glossa_core::GlossaryStore;
use glossa_graph::{GraphStats, TermGraph};
use serde::Serialize;

use crate::cmd::load_document;
use crate::output::{OutputMode, render};
use crate::resolve;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Category id, name, or unique id prefix.
    pub category: String,
}

#[derive(Debug, Serialize)]
struct StatsReport {
    category_id: String,
    stats: GraphStats,
}

/// Summarize a category's reference structure: counts, density, cycles,
/// islands, and the most-referenced term.
pub fn run_stats(
    args: &StatsArgs,
    output: OutputMode,
    store: &impl GlossaryStore,
) -> anyhow::Result<()> {
    let data = load_document(store, output)?;
    let category = resolve::require_category(&data, &args.category, output)?;

    let graph = TermGraph::from_terms(&category.terms);
    let report = StatsReport {
        category_id: category.id.clone(),
        stats: GraphStats::from_graph(&graph),
    };

    let titles: HashMap<String, String> = category
        .terms
        .iter()
        .map(|term| (term.id.clone(), term.title.clone()))
        .collect();
    let category_name = category.name.clone();
    render(output, &report, move |computed, w| {
        render_stats_human(computed, &category_name, &titles, w)
    })
}

fn render_stats_human(
    report: &StatsReport,
    category_name: &str,
    titles: &HashMap<String, String>,
    w: &mut dyn Write,
) -> std::io::Result<()> {
    let stats = &report.stats;
    writeln!(w, "Graph stats for '{category_name}'")?;
    writeln!(w, "  nodes:           {}", stats.node_count)?;
    writeln!(w, "  edges:           {}", stats.edge_count)?;
    writeln!(w, "  density:         {:.3}", stats.density)?;
    writeln!(w, "  cycles:          {}", stats.cycle_count)?;
    writeln!(w, "  islands:         {}", stats.island_count)?;
    writeln!(w, "  isolated nodes:  {}", stats.isolated_node_count)?;
    writeln!(w, "  max in-degree:   {}", stats.max_in_degree)?;
    writeln!(w, "  max out-degree:  {}", stats.max_out_degree)?;
    match &stats.most_referenced {
        Some(id) => {
            let title = titles.get(id).map_or(id.as_str(), String::as_str);
            writeln!(w, "  most referenced: {title} ({id})")?;
        }
        None => writeln!(w, "  most referenced: (none)")?,
    }
    Ok(())
}
