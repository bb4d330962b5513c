//! Inline cross-linking of term mentions in definition HTML.
//!
//! Rewrites a definition's HTML so every whole-word mention of another
//! term's title becomes an anchor (`<a href="#term-{id}" class="term-link">`)
//! pointing at that term. The matched text keeps its original casing. Text
//! inside tag markup (between `<` and `>`) is never rewritten, so attribute
//! values and tag names cannot be corrupted.

use std::ops::Range;

use glossa_core::model::{NOT_PROVIDED, Term, valid_terms};

use crate::scan::find_word_matches;

/// Linkify one definition value against the other terms of its category.
///
/// A missing value (empty or the `"-"` sentinel) renders as the sentinel.
/// The current term's own title is never linked.
#[must_use]
pub fn linkify_definition(html: &str, terms: &[Term], current_term_id: &str) -> String {
    if html.is_empty() || html == NOT_PROVIDED {
        return NOT_PROVIDED.to_string();
    }

    let protected = tag_spans(html);

    // Collect every candidate match, then resolve overlaps: leftmost match
    // wins, and on a shared start the longer title wins.
    let mut matches: Vec<(Range<usize>, &str)> = Vec::new();
    for term in valid_terms(terms) {
        if term.id == current_term_id {
            continue;
        }
        for range in find_word_matches(html, &term.title) {
            if protected.iter().any(|span| overlaps(span, &range)) {
                continue;
            }
            matches.push((range, term.id.as_str()));
        }
    }
    matches.sort_by(|(a, _), (b, _)| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut out = String::with_capacity(html.len());
    let mut cursor = 0;
    for (range, term_id) in matches {
        if range.start < cursor {
            continue;
        }
        out.push_str(&html[cursor..range.start]);
        out.push_str("<a href=\"#term-");
        out.push_str(&escape_attr(term_id));
        out.push_str("\" class=\"term-link\">");
        out.push_str(&html[range.clone()]);
        out.push_str("</a>");
        cursor = range.end;
    }
    out.push_str(&html[cursor..]);
    out
}

/// Byte ranges covering tag markup, `<` through `>` inclusive. Quoted
/// attribute values may contain `>` without closing the tag; an
/// unterminated `<` protects the rest of the string.
fn tag_spans(html: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut at = 0;
    while let Some(open) = html[at..].find('<') {
        let start = at + open;
        match tag_end(&html[start + 1..]) {
            Some(close) => {
                let end = start + 1 + close + 1;
                spans.push(start..end);
                at = end;
            }
            None => {
                spans.push(start..html.len());
                break;
            }
        }
    }
    spans
}

/// Byte offset of the `>` closing a tag, given the text after `<`.
fn tag_end(inside: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, c) in inside.char_indices() {
        match quote {
            None => match c {
                '>' => return Some(i),
                '"' | '\'' => quote = Some(c),
                _ => {}
            },
            Some(q) if c == q => quote = None,
            Some(_) => {}
        }
    }
    None
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_core::model::Definitions;

    fn term(id: &str, title: &str) -> Term {
        Term {
            id: id.to_string(),
            title: title.to_string(),
            definitions: Definitions::default(),
            is_understood: None,
        }
    }

    #[test]
    fn mention_becomes_anchor() {
        let terms = vec![term("t1", "API"), term("t2", "Client")];
        let out = linkify_definition("calls the API twice", &terms, "t2");
        assert_eq!(
            out,
            "calls the <a href=\"#term-t1\" class=\"term-link\">API</a> twice"
        );
    }

    #[test]
    fn matched_casing_is_preserved() {
        let terms = vec![term("t1", "API"), term("t2", "Client")];
        let out = linkify_definition("an api call", &terms, "t2");
        assert!(out.contains(">api</a>"), "got: {out}");
    }

    #[test]
    fn own_title_is_never_linked() {
        let terms = vec![term("t1", "API")];
        let out = linkify_definition("an API of APIs", &terms, "t1");
        assert_eq!(out, "an API of APIs");
    }

    #[test]
    fn sentinel_and_empty_render_as_sentinel() {
        let terms = vec![term("t1", "API")];
        assert_eq!(linkify_definition("-", &terms, "t2"), "-");
        assert_eq!(linkify_definition("", &terms, "t2"), "-");
    }

    #[test]
    fn every_occurrence_is_linked() {
        let terms = vec![term("t1", "API"), term("t2", "Client")];
        let out = linkify_definition("API here, API there", &terms, "t2");
        assert_eq!(out.matches("</a>").count(), 2);
    }

    #[test]
    fn markup_interior_is_protected() {
        let terms = vec![term("t1", "em"), term("t2", "Client")];
        let out = linkify_definition("no <em>emphasis</em> here", &terms, "t2");
        assert_eq!(out, "no <em>emphasis</em> here");
    }

    #[test]
    fn attribute_values_are_protected() {
        let terms = vec![term("t1", "Client"), term("t2", "Server")];
        let out = linkify_definition("<span title=\"Client\">x</span> Client", &terms, "t2");
        assert_eq!(out.matches("</a>").count(), 1, "only the text mention, got: {out}");
        assert!(out.ends_with("<a href=\"#term-t1\" class=\"term-link\">Client</a>"));
    }

    #[test]
    fn unterminated_tag_protects_the_rest() {
        let terms = vec![term("t1", "Client")];
        let out = linkify_definition("before <em Client after", &terms, "t2");
        assert_eq!(out, "before <em Client after");
    }

    #[test]
    fn longer_title_wins_shared_start() {
        let terms = vec![term("t1", "Smart Contract"), term("t2", "Smart")];
        let out = linkify_definition("a Smart Contract example", &terms, "t3");
        assert_eq!(
            out,
            "a <a href=\"#term-t1\" class=\"term-link\">Smart Contract</a> example"
        );
    }

    #[test]
    fn contained_match_is_dropped() {
        let terms = vec![term("t1", "Smart Contract"), term("t2", "Contract")];
        let out = linkify_definition("one Smart Contract, one Contract", &terms, "t3");
        assert!(out.contains(">Smart Contract</a>"), "got: {out}");
        assert!(out.ends_with("<a href=\"#term-t2\" class=\"term-link\">Contract</a>"));
    }

    #[test]
    fn term_ids_are_attribute_escaped() {
        let terms = vec![term("a\"b", "API")];
        let out = linkify_definition("the API", &terms, "t2");
        assert!(out.contains("#term-a&quot;b"), "got: {out}");
    }

    #[test]
    fn titleless_terms_are_ignored() {
        let terms = vec![term("t1", "")];
        let out = linkify_definition("plain text", &terms, "t2");
        assert_eq!(out, "plain text");
    }
}
