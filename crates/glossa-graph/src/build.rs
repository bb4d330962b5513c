//! Dependency graph construction from one category's terms.
//!
//! # Overview
//!
//! For every term T and every other term O, if T's definition prose
//! mentions O's title, the graph gets edge `T → O` (T depends on O).
//! Nodes carry term ids. The visualization payload sizes each node by the
//! number of edges touching it in either direction; that tally is for
//! rendering only and never influences ordering.
//!
//! ## Cache Invalidation
//!
//! [`TermGraph::content_hash`] is a BLAKE3 hash over the node set and the
//! sorted edge set. Callers can compare it against a stored value to skip
//! re-deriving layouts or orderings when nothing relevant changed.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use tracing::instrument;

use crate::index::TermIndex;
use crate::scan::scan_references;
use glossa_core::model::Term;

/// Default base node radius in the visualization payload.
pub const BASE_RADIUS: f64 = 8.0;
/// Default radius added per edge touching a node.
pub const RADIUS_PER_LINK: f64 = 1.5;

// ---------------------------------------------------------------------------
// TermGraph
// ---------------------------------------------------------------------------

/// A directed reference graph over one category.
///
/// Nodes are term ids (strings). An edge `A → B` means "A's definitions
/// mention B's title". Cycles are expected and preserved; downstream
/// consumers (ordering, cycle listing) handle them.
#[derive(Debug)]
pub struct TermGraph {
    /// Directed graph: nodes = term ids, edges = detected references.
    pub graph: DiGraph<String, ()>,
    /// Mapping from term id to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
    /// BLAKE3 content hash of the node and edge sets.
    pub content_hash: String,
}

impl TermGraph {
    /// Build the reference graph for `terms`.
    ///
    /// Titleless terms are dropped before scanning. Duplicate edges are
    /// never added (a mention is a mention, however often it repeats);
    /// self-edges cannot occur because a term's own title is excluded
    /// from its candidate set.
    #[must_use]
    #[instrument(skip(terms))]
    pub fn from_terms(terms: &[Term]) -> Self {
        Self::from_index(&TermIndex::from_terms(terms))
    }

    /// Build from an existing index (shared with other derivations).
    #[must_use]
    pub fn from_index(index: &TermIndex<'_>) -> Self {
        let mut graph = DiGraph::<String, ()>::new();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::with_capacity(index.len());

        for term in index.terms() {
            let idx = graph.add_node(term.id.clone());
            node_map.insert(term.id.clone(), idx);
        }

        let mut edges: Vec<(String, String)> = Vec::new();
        for term in index.terms() {
            let Some(&source_idx) = node_map.get(&term.id) else {
                continue;
            };
            for referenced in scan_references(term, index) {
                let Some(target) = index.resolve(&referenced) else {
                    continue;
                };
                let Some(&target_idx) = node_map.get(&target.id) else {
                    continue;
                };
                if !graph.contains_edge(source_idx, target_idx) {
                    graph.add_edge(source_idx, target_idx, ());
                    edges.push((term.id.clone(), target.id.clone()));
                }
            }
        }

        let node_ids: Vec<&str> = index.terms().iter().map(|t| t.id.as_str()).collect();
        let content_hash = compute_content_hash(&node_ids, &mut edges);

        Self {
            graph,
            node_map,
            content_hash,
        }
    }

    /// Number of nodes (terms) in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of detected reference edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up the `NodeIndex` for a term id.
    #[must_use]
    pub fn node_index(&self, term_id: &str) -> Option<NodeIndex> {
        self.node_map.get(term_id).copied()
    }

    /// The term id label for a node.
    #[must_use]
    pub fn term_id(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Edges touching a node in either direction (the visualization
    /// sizing tally).
    #[must_use]
    pub fn connection_count(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Incoming).count()
            + self.graph.edges_directed(idx, Direction::Outgoing).count()
    }
}

// ---------------------------------------------------------------------------
// Visualization payload
// ---------------------------------------------------------------------------

/// One renderable node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub title: String,
    pub radius: f64,
}

/// One renderable directed link: `source` mentions `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
}

/// The `{nodes, links}` payload consumed by rendering layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
    /// Content hash of the graph this payload was derived from.
    pub content_hash: String,
}

/// Build the visualization payload for `terms` with the default radii.
#[must_use]
pub fn build_graph_data(terms: &[Term]) -> GraphData {
    build_graph_data_with(terms, BASE_RADIUS, RADIUS_PER_LINK)
}

/// Build the visualization payload with configured radii.
///
/// Nodes come out in term input order; links in discovery order. An empty
/// category yields empty `nodes` and `links`, which is a valid result.
#[must_use]
#[instrument(skip(terms))]
pub fn build_graph_data_with(terms: &[Term], base_radius: f64, radius_per_link: f64) -> GraphData {
    let index = TermIndex::from_terms(terms);
    let term_graph = TermGraph::from_index(&index);

    let nodes = index
        .terms()
        .iter()
        .map(|term| {
            let connections = term_graph
                .node_index(&term.id)
                .map_or(0, |idx| term_graph.connection_count(idx));
            #[allow(clippy::cast_precision_loss)]
            let radius = (connections as f64).mul_add(radius_per_link, base_radius);
            GraphNode {
                id: term.id.clone(),
                title: term.title.clone(),
                radius,
            }
        })
        .collect();

    let links = term_graph
        .graph
        .edge_indices()
        .filter_map(|edge| {
            let (source, target) = term_graph.graph.edge_endpoints(edge)?;
            Some(GraphLink {
                source: term_graph.term_id(source)?.to_string(),
                target: term_graph.term_id(target)?.to_string(),
            })
        })
        .collect();

    GraphData {
        nodes,
        links,
        content_hash: term_graph.content_hash,
    }
}

/// BLAKE3 over node ids and the sorted edge list. Sorting makes the hash
/// a function of the edge set, not of discovery order.
fn compute_content_hash(node_ids: &[&str], edges: &mut Vec<(String, String)>) -> String {
    edges.sort();

    let mut hasher = blake3::Hasher::new();
    for id in node_ids {
        hasher.update(id.as_bytes());
        hasher.update(b"\x00");
    }
    hasher.update(b"\x01");
    for (source, target) in edges.iter() {
        hasher.update(source.as_bytes());
        hasher.update(b"\x00");
        hasher.update(target.as_bytes());
        hasher.update(b"\x00");
    }
    format!("blake3:{}", hasher.finalize())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
