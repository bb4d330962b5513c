#![forbid(unsafe_code)]
//! glossa-graph: reference detection, dependency graphs, and reading order.
//!
//! # Overview
//!
//! Given one category's term list, this crate finds which terms mention
//! which other terms in their definition prose and derives everything the
//! rest of the system needs from those mentions.
//!
//! ## Pipeline
//!
//! ```text
//! Vec<Term> (one category)
//!        ↓  index::TermIndex::from_terms()
//! TermIndex (case-insensitive title lookup, titleless terms dropped)
//!        ↓  scan::scan_references() per term
//! mention sets (lowered titles, self excluded)
//!        ├─ build::TermGraph / build::build_graph_data()
//!        │    petgraph DiGraph + {nodes, links} payload + content hash
//!        ├─ order::sort_terms_by_dependency()
//!        │    Kahn's algorithm, alphabetical fallback for cycles
//!        ├─ cycles::find_reference_cycles()
//!        │    SCCs with more than one member ("circular definitions")
//!        └─ stats::GraphStats::from_graph()
//! ```
//!
//! An edge `A → B` means "A's definition text mentions B's title", i.e.
//! the reader should meet B before A. Matching is exact, case-insensitive,
//! whole-word substring; no stemming, no fuzzy matching. The matcher is
//! a literal scanner, not a regex, so titles like `C++` or `A(B)` are
//! handled without any escaping concerns.
//!
//! ## Cache Invalidation
//!
//! [`build::TermGraph::content_hash`] is a BLAKE3 hash of the node and
//! edge sets. Compare it against a stored value to decide whether derived
//! artifacts (layouts, orderings) need recomputing.
//!
//! Everything here is pure and synchronous: no I/O, no shared state, no
//! failure surface. Malformed terms are filtered, empty results are valid.

pub mod build;
pub mod cycles;
pub mod index;
pub mod linkify;
pub mod order;
pub mod scan;
pub mod stats;

pub use build::{GraphData, GraphLink, GraphNode, TermGraph, build_graph_data, build_graph_data_with};
pub use cycles::find_reference_cycles;
pub use index::TermIndex;
pub use linkify::linkify_definition;
pub use order::sort_terms_by_dependency;
pub use scan::{mentions, scan_references};
pub use stats::GraphStats;
