//! `glossa export` — write the whole document as portable JSON.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use glossa_core::{GlossaryStore, to_document_json};
use serde::Serialize;

use crate::cmd::load_document;
use crate::output::{CliError, OutputMode, render, render_error};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Write to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ExportReport {
    path: PathBuf,
    categories: usize,
    terms: usize,
}

/// Export the document. Without `--output` the raw document JSON goes to
/// stdout in both output modes; the document itself is the payload.
pub fn run_export(
    args: &ExportArgs,
    output: OutputMode,
    store: &impl GlossaryStore,
) -> anyhow::Result<()> {
    let data = load_document(store, output)?;
    let json = match to_document_json(&data) {
        Ok(json) => json,
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            anyhow::bail!("export failed")
        }
    };

    let Some(path) = &args.output else {
        std::io::stdout().write_all(json.as_bytes())?;
        return Ok(());
    };

    std::fs::write(path, &json)
        .with_context(|| format!("failed to write export to {}", path.display()))?;

    let report = ExportReport {
        path: path.clone(),
        categories: data.categories.len(),
        terms: data.term_count(),
    };
    render(output, &report, render_export_human)
}

fn render_export_human(report: &ExportReport, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        w,
        "✓ Exported {} term(s) in {} categories to {}",
        report.terms,
        report.categories,
        report.path.display()
    )
}
