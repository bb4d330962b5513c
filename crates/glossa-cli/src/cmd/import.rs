//! `glossa import` — replace or extend the document from an export file.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use glossa_core::{GlossaryData, GlossaryStore, StoreError, parse_document};
use serde::Serialize;

use crate::cmd::save_document;
use crate::output::{CliError, OutputMode, render, render_error};

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Export file to import.
    // Distinct id: the global `--file` document-path flag also has id
    // `file`, and clap merges same-id args across the global namespace.
    #[arg(id = "import_file", value_name = "FILE")]
    pub file: PathBuf,

    /// Append the imported categories to the current document instead of
    /// replacing it.
    #[arg(long)]
    pub merge: bool,
}

#[derive(Debug, Serialize)]
struct ImportReport {
    mode: &'static str,
    categories: usize,
    terms: usize,
}

/// Import a document. The file must parse as a full glossary document
/// before anything is written; a rejected import leaves the stored
/// document untouched.
pub fn run_import(
    args: &ImportArgs,
    output: OutputMode,
    store: &impl GlossaryStore,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read import file {}", args.file.display()))?;
    let incoming = match parse_document(&raw) {
        Ok(incoming) => incoming,
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            anyhow::bail!("invalid import file")
        }
    };

    let (data, mode) = if args.merge {
        let mut existing = match store.load() {
            Ok(existing) => existing,
            Err(StoreError::NotFound { .. }) => GlossaryData::default(),
            Err(err) => {
                render_error(output, &CliError::from(&err))?;
                anyhow::bail!("glossary document unavailable")
            }
        };
        existing.categories.extend(incoming.categories);
        (existing, "merge")
    } else {
        (incoming, "replace")
    };
    save_document(store, output, &data)?;

    let report = ImportReport {
        mode,
        categories: data.categories.len(),
        terms: data.term_count(),
    };
    render(output, &report, render_import_human)
}

fn render_import_human(report: &ImportReport, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        w,
        "✓ Imported ({}): document now has {} categories, {} term(s)",
        report.mode, report.categories, report.terms
    )
}
