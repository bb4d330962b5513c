//! Whole-word reference scanning over definition prose.
//!
//! # Overview
//!
//! The matcher is a literal character scanner, not a regex engine. A
//! candidate title matches when it occurs case-insensitively in the text
//! with no word character (alphanumeric or `_`, Unicode-aware) directly
//! on either side. Titles containing symbols — `C++`, `A(B)`, `R&D` —
//! are matched verbatim; there is no pattern syntax to escape and no way
//! for a title to inject one.
//!
//! `"AI"` matches in `"uses AI daily"` but not inside `"Blockchain"`;
//! `"C++"` matches in `"written in C++ since"` but not in `"C++17"`.

use crate::index::TermIndex;
use glossa_core::model::Term;
use std::collections::HashSet;
use std::ops::Range;
use tracing::trace;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// All whole-word occurrences of `needle` in `haystack`, case-insensitive,
/// as byte ranges into `haystack`. Matches never overlap; scanning resumes
/// after each match. An empty needle yields no matches.
#[must_use]
pub fn find_word_matches(haystack: &str, needle: &str) -> Vec<Range<usize>> {
    let needle_lower: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    if needle_lower.is_empty() {
        return Vec::new();
    }

    let chars: Vec<(usize, char)> = haystack.char_indices().collect();
    let mut matches = Vec::new();
    let mut at = 0;

    while at < chars.len() {
        if let Some(end) = match_at(&chars, at, &needle_lower) {
            let bounded_left = at == 0 || !is_word_char(chars[at - 1].1);
            let bounded_right = end == chars.len() || !is_word_char(chars[end].1);
            if bounded_left && bounded_right {
                let start_byte = chars[at].0;
                let end_byte = chars.get(end).map_or(haystack.len(), |&(b, _)| b);
                matches.push(start_byte..end_byte);
                at = end;
                continue;
            }
        }
        at += 1;
    }

    matches
}

/// Match `needle_lower` against `chars` starting at `start`, comparing
/// each text character by its full lowercase expansion. Returns the
/// exclusive char position after the match. A needle that ends partway
/// through one character's expansion does not match.
fn match_at(chars: &[(usize, char)], start: usize, needle_lower: &[char]) -> Option<usize> {
    let mut ni = 0;
    let mut ci = start;

    while ni < needle_lower.len() {
        let (_, c) = *chars.get(ci)?;
        for lowered in c.to_lowercase() {
            if needle_lower.get(ni) != Some(&lowered) {
                return None;
            }
            ni += 1;
        }
        ci += 1;
    }

    Some(ci)
}

/// Does `haystack` contain `needle` as a standalone word?
#[must_use]
pub fn mentions(haystack: &str, needle: &str) -> bool {
    !find_word_matches(haystack, needle).is_empty()
}

/// Which other indexed terms does `term`'s definition prose mention?
///
/// Returns lowered titles, deduplicated, in index order. The term's own
/// title is never a candidate, so a term cannot reference itself however
/// often its definitions repeat its name.
#[must_use]
pub fn scan_references(term: &Term, index: &TermIndex<'_>) -> Vec<String> {
    let text = term.definitions.joined_text();
    if text.is_empty() {
        return Vec::new();
    }

    let own_title = term.title.to_lowercase();
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for candidate in index.titles() {
        if *candidate == own_title || !seen.insert(candidate.as_str()) {
            continue;
        }
        if mentions(&text, candidate) {
            found.push(candidate.clone());
        }
    }

    trace!(term_id = %term.id, references = found.len(), "scanned term");
    found
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
