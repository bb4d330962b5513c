//! `glossa graph` — reference-graph payload for a category.

use std::io::Write;
use std::path::Path;

use clap::Args;
use glossa_core::GlossaryStore;
use glossa_core::config::load_config;
use glossa_graph::{GraphData, build_graph_data_with};

use crate::cmd::load_document;
use crate::output::{OutputMode, render};
use crate::resolve;

#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Category id, name, or unique id prefix.
    pub category: String,
}

/// Emit the `{nodes, links}` payload for a category. Node radii follow
/// the `[graph]` section of `glossa.toml`.
pub fn run_graph(
    args: &GraphArgs,
    output: OutputMode,
    store: &impl GlossaryStore,
    config_dir: &Path,
) -> anyhow::Result<()> {
    let config = load_config(config_dir)?;
    let data = load_document(store, output)?;
    let category = resolve::require_category(&data, &args.category, output)?;

    let payload = build_graph_data_with(
        &category.terms,
        config.graph.base_radius,
        config.graph.radius_per_link,
    );
    let category_name = category.name.clone();
    render(output, &payload, move |graph, w| {
        render_graph_human(graph, &category_name, w)
    })
}

fn render_graph_human(
    graph: &GraphData,
    category_name: &str,
    w: &mut dyn Write,
) -> std::io::Result<()> {
    writeln!(
        w,
        "Reference graph for '{category_name}': {} nodes, {} links",
        graph.nodes.len(),
        graph.links.len()
    )?;
    if graph.nodes.is_empty() {
        writeln!(w, "No terms to graph.")?;
        return Ok(());
    }

    if graph.links.is_empty() {
        writeln!(w, "No cross-references between terms.")?;
    } else {
        for link in &graph.links {
            writeln!(
                w,
                "  {} -> {}",
                node_title(graph, &link.source),
                node_title(graph, &link.target)
            )?;
        }
    }
    writeln!(w, "content hash: {}", graph.content_hash)?;
    Ok(())
}

fn node_title<'a>(graph: &'a GraphData, id: &'a str) -> &'a str {
    graph
        .nodes
        .iter()
        .find(|node| node.id == id)
        .map_or(id, |node| node.title.as_str())
}
