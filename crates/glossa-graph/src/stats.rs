//! Summary statistics for a category's reference graph.
//!
//! # Statistics Provided
//!
//! - **node_count**: terms participating in the graph.
//! - **edge_count**: detected reference edges.
//! - **density**: ratio of actual edges to maximum possible edges for a
//!   directed graph: `density = edge_count / (node_count * (node_count - 1))`.
//!   An empty or single-term graph has density 0.0.
//! - **cycle_count**: circular reference groups (SCCs with more than one
//!   member).
//! - **island_count**: weakly connected components. A value greater than 1
//!   means the category splits into clusters with no references between them.
//! - **isolated_node_count**: terms with no references in either direction.
//! - **max_in_degree** / **max_out_degree**: the heaviest referenced and the
//!   heaviest referencing term's degree.
//! - **most_referenced**: id of the term with the highest in-degree, when
//!   any term is referenced at all.

use petgraph::{Direction, algo::connected_components, visit::IntoNodeIdentifiers};
use serde::Serialize;

use crate::build::TermGraph;
use crate::cycles::find_reference_cycles;

// ---------------------------------------------------------------------------
// GraphStats
// ---------------------------------------------------------------------------

/// Summary statistics for one category's reference graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    /// Number of terms (nodes) in the graph.
    pub node_count: usize,
    /// Number of detected reference edges.
    pub edge_count: usize,
    /// Graph density: `edge_count / (node_count * (node_count - 1))`.
    /// Ranges from 0.0 (no edges) to 1.0 (every term mentions every other).
    /// Zero for graphs with fewer than two terms.
    pub density: f64,
    /// Number of circular reference groups.
    pub cycle_count: usize,
    /// Number of weakly connected components (reference clusters).
    pub island_count: usize,
    /// Number of terms with no references in either direction.
    pub isolated_node_count: usize,
    /// Maximum in-degree (the most-mentioned term's incoming edges).
    pub max_in_degree: usize,
    /// Maximum out-degree (the busiest definition's outgoing edges).
    pub max_out_degree: usize,
    /// Term id with the highest in-degree, ties broken by smallest id.
    /// `None` when no term is referenced by any other.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_referenced: Option<String>,
}

impl GraphStats {
    /// Compute statistics from a [`TermGraph`].
    #[must_use]
    pub fn from_graph(tg: &TermGraph) -> Self {
        let node_count = tg.node_count();
        let edge_count = tg.edge_count();
        let density = compute_density(node_count, edge_count);
        let cycle_count = find_reference_cycles(tg).len();
        let island_count = connected_components(&tg.graph);

        let isolated_node_count = tg
            .graph
            .node_identifiers()
            .filter(|&idx| {
                tg.graph.neighbors_directed(idx, Direction::Incoming).next().is_none()
                    && tg.graph.neighbors_directed(idx, Direction::Outgoing).next().is_none()
            })
            .count();

        let max_in_degree = tg
            .graph
            .node_identifiers()
            .map(|idx| tg.graph.neighbors_directed(idx, Direction::Incoming).count())
            .max()
            .unwrap_or(0);

        let max_out_degree = tg
            .graph
            .node_identifiers()
            .map(|idx| tg.graph.neighbors_directed(idx, Direction::Outgoing).count())
            .max()
            .unwrap_or(0);

        let most_referenced = tg
            .graph
            .node_identifiers()
            .filter_map(|idx| {
                let indegree = tg.graph.neighbors_directed(idx, Direction::Incoming).count();
                if indegree == 0 {
                    return None;
                }
                Some((indegree, tg.term_id(idx)?.to_string()))
            })
            .max_by(|(da, ida), (db, idb)| da.cmp(db).then_with(|| idb.cmp(ida)))
            .map(|(_, id)| id);

        Self {
            node_count,
            edge_count,
            density,
            cycle_count,
            island_count,
            isolated_node_count,
            max_in_degree,
            max_out_degree,
            most_referenced,
        }
    }

    /// Return `true` if the graph has no reference edges at all.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.edge_count == 0
    }

    /// Return `true` if the graph contains at least one circular group.
    #[must_use]
    pub fn has_cycles(&self) -> bool {
        self.cycle_count > 0
    }
}

#[allow(clippy::cast_precision_loss)]
fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0_f64;
    }
    let max_edges = (node_count * (node_count - 1)) as f64;
    edge_count as f64 / max_edges
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
