//! Circular-reference detection over the term graph.
//!
//! # Edge Direction
//!
//! The reference graph uses edge direction `mentioner → mentioned`. A cycle
//! means a group of terms whose definitions all lean on each other, so no
//! strict reading order exists for them; the ordering layer falls back to
//! alphabetical placement for exactly these members.

#![allow(clippy::module_name_repetitions)]

use petgraph::algo::tarjan_scc;

use crate::build::TermGraph;

/// Find all circular reference groups in `graph`.
///
/// Each entry is the sorted list of term ids in one strongly connected
/// component of size two or more. A term never references itself (its own
/// title is excluded from scanning), so single-node components are never
/// cycles here.
#[must_use]
pub fn find_reference_cycles(graph: &TermGraph) -> Vec<Vec<String>> {
    let mut cycles: Vec<Vec<String>> = tarjan_scc(&graph.graph)
        .into_iter()
        .filter(|component| component.len() > 1)
        .map(|component| {
            let mut ids: Vec<String> = component
                .into_iter()
                .filter_map(|idx| graph.term_id(idx).map(str::to_string))
                .collect();
            ids.sort_unstable();
            ids
        })
        .collect();

    cycles.sort_unstable();
    cycles
}
