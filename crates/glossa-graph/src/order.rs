//! Dependency-aware reading order via Kahn's algorithm.
//!
//! # Overview
//!
//! Produces a linear arrangement of a category's terms where, wherever the
//! reference graph allows it, a term appears only after every term its
//! definitions mention. Cycles never fail the sort: once the queue drains,
//! terms still locked in a cycle (or locked behind one) are appended in
//! alphabetical order by title.
//!
//! Ordering is fully deterministic for a given input: indegree-zero terms
//! are seeded alphabetically, terms freed mid-pass follow queue discovery
//! order, and the fallback tail is alphabetical.

use std::cmp::Ordering;
use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::index::TermIndex;
use crate::scan::scan_references;
use glossa_core::model::Term;

/// Sort `terms` so prerequisites come before the terms that mention them.
///
/// Titleless terms cannot participate in reference detection and are
/// dropped; the result is a permutation of the titled input terms.
#[must_use]
#[instrument(skip(terms))]
pub fn sort_terms_by_dependency(terms: &[Term]) -> Vec<Term> {
    let index = TermIndex::from_terms(terms);
    let n = index.len();
    if n == 0 {
        return Vec::new();
    }

    // indegree[i] = number of distinct terms that term i depends on.
    // dependents[j] = positions of terms whose definitions mention term j.
    let mut indegree = vec![0_usize; n];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); n];

    for (pos, term) in index.terms().iter().enumerate() {
        for referenced in scan_references(term, &index) {
            let Some(target) = index.position(&referenced) else {
                continue;
            };
            indegree[pos] += 1;
            dependents[target].push(pos);
        }
    }

    let by_title = |a: usize, b: usize| -> Ordering {
        let (ta, tb) = (index.terms()[a], index.terms()[b]);
        index.titles()[a]
            .cmp(&index.titles()[b])
            .then_with(|| ta.title.cmp(&tb.title))
            .then_with(|| ta.id.cmp(&tb.id))
    };

    let mut seeds: Vec<usize> = (0..n).filter(|&i| indegree[i] == 0).collect();
    seeds.sort_unstable_by(|&a, &b| by_title(a, b));

    let mut queue: VecDeque<usize> = seeds.into();
    let mut order: Vec<usize> = Vec::with_capacity(n);

    while let Some(pos) = queue.pop_front() {
        order.push(pos);
        for &dependent in &dependents[pos] {
            indegree[dependent] -= 1;
            if indegree[dependent] == 0 {
                queue.push_back(dependent);
            }
        }
    }

    // Anything still carrying indegree sits in a cycle or behind one.
    if order.len() < n {
        let mut leftover: Vec<usize> = (0..n).filter(|&i| indegree[i] > 0).collect();
        leftover.sort_unstable_by(|&a, &b| by_title(a, b));
        debug!(cyclic = leftover.len(), "appending cycle members alphabetically");
        order.extend(leftover);
    }

    order.into_iter().map(|pos| index.terms()[pos].clone()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
