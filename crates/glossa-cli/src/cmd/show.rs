//! `glossa show` — full detail for a single term.

use std::io::Write;

use clap::Args;
use glossa_core::{DefinitionField, GlossaryStore, Term};
use glossa_graph::linkify_definition;
use glossa_quiz::strip_html;
use serde::Serialize;
use url::Url;

use crate::cmd::load_document;
use crate::output::{OutputMode, render};
use crate::resolve;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Category id, name, or unique id prefix.
    pub category: String,

    /// Term id, title, or unique id prefix.
    pub term: String,

    /// Keep HTML markup and decorate cross-references with anchors
    /// instead of stripping tags.
    #[arg(long)]
    pub html: bool,
}

#[derive(Debug, Serialize)]
struct ShowReport {
    category_id: String,
    term: Term,
}

/// Show one term with every provided definition field and its references.
pub fn run_show(
    args: &ShowArgs,
    output: OutputMode,
    store: &impl GlossaryStore,
) -> anyhow::Result<()> {
    let data = load_document(store, output)?;
    let category = resolve::require_category(&data, &args.category, output)?;
    let term = resolve::require_term(category, &args.term, output)?;

    let report = ShowReport {
        category_id: category.id.clone(),
        term: term.clone(),
    };
    let html = args.html;
    let siblings = category.terms.clone();
    render(output, &report, move |shown, w| {
        render_show_human(shown, &siblings, html, w)
    })
}

fn render_show_human(
    report: &ShowReport,
    siblings: &[Term],
    html: bool,
    w: &mut dyn Write,
) -> std::io::Result<()> {
    let term = &report.term;
    writeln!(w, "{}  ({})", term.title, term.id)?;
    if let Some(understood) = term.is_understood {
        writeln!(w, "understood: {understood}")?;
    }

    for field in DefinitionField::ALL {
        let Some(value) = term.definitions.provided(field) else {
            continue;
        };
        let rendered = if html {
            linkify_definition(value, siblings, &term.id)
        } else {
            strip_html(value)
        };
        writeln!(w)?;
        writeln!(w, "{}:", field.label())?;
        for line in rendered.lines() {
            writeln!(w, "  {line}")?;
        }
    }

    let references = term.definitions.references();
    if !references.is_empty() {
        writeln!(w)?;
        writeln!(w, "references:")?;
        for reference in references {
            writeln!(w, "  - {} ({reference})", extract_domain(reference))?;
        }
    }
    Ok(())
}

/// Pull a display label out of a reference URL: the host without a
/// `www.` prefix, or the raw string when it does not parse as a URL.
fn extract_domain(raw: &str) -> String {
    Url::parse(raw)
        .ok()
        .and_then(|url| {
            url.host_str()
                .map(|host| host.trim_start_matches("www.").to_string())
        })
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use glossa_core::Definitions;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: ShowArgs,
    }

    fn sample_term() -> Term {
        Term {
            id: "term-100-aaaa".into(),
            title: "API".into(),
            definitions: Definitions {
                istilah: Some("Interface exposed by a <b>server</b>".into()),
                bahasa: Some("-".into()),
                kenapa_ada: Some("So a Client can call it".into()),
                contoh: None,
                referensi: Some(vec!["https://www.example.com/api-guide".into()]),
            },
            is_understood: Some(true),
        }
    }

    #[test]
    fn parses_html_flag() {
        let parsed = Wrapper::parse_from(["test", "tech", "api", "--html"]);
        assert!(parsed.args.html);
        assert_eq!(parsed.args.term, "api");
    }

    #[test]
    fn render_strips_markup_and_skips_blank_fields() {
        let report = ShowReport {
            category_id: "cat-100-aaaa".into(),
            term: sample_term(),
        };
        let mut buffer = Vec::new();
        render_show_human(&report, &[], false, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("API  (term-100-aaaa)"));
        assert!(text.contains("understood: true"));
        assert!(text.contains("definition:"));
        assert!(text.contains("  Interface exposed by a server"));
        assert!(text.contains("why it exists:"));
        assert!(!text.contains("language meaning:"), "sentinel field hidden");
        assert!(!text.contains("example:"), "absent field hidden");
    }

    #[test]
    fn render_lists_references_with_domain_labels() {
        let report = ShowReport {
            category_id: "cat-100-aaaa".into(),
            term: sample_term(),
        };
        let mut buffer = Vec::new();
        render_show_human(&report, &[], false, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("references:"));
        assert!(text.contains("  - example.com (https://www.example.com/api-guide)"));
    }

    #[test]
    fn render_html_mode_links_sibling_titles() {
        let sibling = Term {
            id: "term-200-bbbb".into(),
            title: "Client".into(),
            definitions: Definitions::default(),
            is_understood: None,
        };
        let term = sample_term();
        let siblings = vec![term.clone(), sibling];
        let report = ShowReport {
            category_id: "cat-100-aaaa".into(),
            term,
        };
        let mut buffer = Vec::new();
        render_show_human(&report, &siblings, true, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("<b>server</b>"), "markup kept in html mode");
        assert!(
            text.contains("href=\"#term-term-200-bbbb\""),
            "sibling mention became an anchor: {text}"
        );
    }

    #[test]
    fn extract_domain_handles_urls_and_plain_strings() {
        assert_eq!(extract_domain("https://www.wikipedia.org/wiki/API"), "wikipedia.org");
        assert_eq!(extract_domain("https://docs.rs/petgraph"), "docs.rs");
        assert_eq!(extract_domain("my lecture notes"), "my lecture notes");
    }
}
