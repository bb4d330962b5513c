//! `glossa category` — create, rename, remove, and list categories.

use std::io::Write;

use clap::Subcommand;
use glossa_core::{GlossaryStore, ops};
use serde::Serialize;

use crate::cmd::{load_document, save_document};
use crate::output::{CliError, OutputMode, render, render_error};
use crate::resolve;

#[derive(Subcommand, Debug)]
pub enum CategoryCommand {
    /// Create a new category.
    Add {
        /// Display name for the category.
        name: String,
    },

    /// Rename an existing category.
    Rename {
        /// Category id, name, or unique id prefix.
        category: String,
        /// New display name.
        name: String,
    },

    /// Remove a category and every term it contains.
    Rm {
        /// Category id, name, or unique id prefix.
        category: String,
        /// Confirm the removal.
        #[arg(long)]
        yes: bool,
    },

    /// List all categories with their term counts.
    List,
}

#[derive(Debug, Serialize)]
struct CategoryAdded {
    id: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct CategoryRenamed {
    id: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct CategoryRemoved {
    id: String,
    name: String,
    terms_removed: usize,
}

#[derive(Debug, Serialize)]
struct CategoryRow {
    id: String,
    name: String,
    term_count: usize,
}

/// Execute a `glossa category` subcommand.
pub fn run_category(
    command: &CategoryCommand,
    output: OutputMode,
    store: &impl GlossaryStore,
) -> anyhow::Result<()> {
    match command {
        CategoryCommand::Add { name } => run_add(name, output, store),
        CategoryCommand::Rename { category, name } => run_rename(category, name, output, store),
        CategoryCommand::Rm { category, yes } => run_rm(category, *yes, output, store),
        CategoryCommand::List => run_list(output, store),
    }
}

fn run_add(name: &str, output: OutputMode, store: &impl GlossaryStore) -> anyhow::Result<()> {
    let mut data = load_document(store, output)?;
    let id = ops::add_category(&mut data, name);
    save_document(store, output, &data)?;

    let payload = CategoryAdded {
        id,
        name: name.to_string(),
    };
    render(output, &payload, |added, w| {
        writeln!(w, "✓ Added category '{}' ({})", added.name, added.id)
    })
}

fn run_rename(
    category: &str,
    name: &str,
    output: OutputMode,
    store: &impl GlossaryStore,
) -> anyhow::Result<()> {
    let mut data = load_document(store, output)?;
    let id = resolve::require_category(&data, category, output)?.id.clone();

    match ops::rename_category(&mut data, &id, name) {
        Ok(()) => {}
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            anyhow::bail!("rename failed")
        }
    }
    save_document(store, output, &data)?;

    let payload = CategoryRenamed {
        id,
        name: name.to_string(),
    };
    render(output, &payload, |renamed, w| {
        writeln!(w, "✓ Renamed category {} to '{}'", renamed.id, renamed.name)
    })
}

fn run_rm(
    category: &str,
    yes: bool,
    output: OutputMode,
    store: &impl GlossaryStore,
) -> anyhow::Result<()> {
    let mut data = load_document(store, output)?;
    let resolved = resolve::require_category(&data, category, output)?;
    let id = resolved.id.clone();
    let term_count = resolved.terms.len();

    if !yes {
        render_error(
            output,
            &CliError::with_details(
                format!(
                    "removing category '{}' would delete {} term(s)",
                    resolved.name, term_count
                ),
                "pass --yes to confirm the removal",
                "confirmation_required",
            ),
        )?;
        anyhow::bail!("removal not confirmed")
    }

    let removed = match ops::delete_category(&mut data, &id) {
        Ok(removed) => removed,
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            anyhow::bail!("removal failed")
        }
    };
    save_document(store, output, &data)?;

    let payload = CategoryRemoved {
        id: removed.id,
        name: removed.name,
        terms_removed: removed.terms.len(),
    };
    render(output, &payload, |gone, w| {
        writeln!(
            w,
            "✓ Removed category '{}' and {} term(s)",
            gone.name, gone.terms_removed
        )
    })
}

fn run_list(output: OutputMode, store: &impl GlossaryStore) -> anyhow::Result<()> {
    let data = load_document(store, output)?;
    let rows: Vec<CategoryRow> = data
        .categories
        .iter()
        .map(|c| CategoryRow {
            id: c.id.clone(),
            name: c.name.clone(),
            term_count: c.terms.len(),
        })
        .collect();

    render(output, &rows, |rows, w| render_list_human(rows, w))
}

fn render_list_human(rows: &[CategoryRow], w: &mut dyn Write) -> std::io::Result<()> {
    if rows.is_empty() {
        writeln!(w, "No categories yet. Create one with `glossa category add <NAME>`.")?;
        return Ok(());
    }

    writeln!(w, "Categories ({})", rows.len())?;
    for row in rows {
        writeln!(w, "  {}  {} ({} terms)", row.id, row.name, row.term_count)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(subcommand)]
        command: CategoryCommand,
    }

    #[test]
    fn add_parses_name() {
        let parsed = Wrapper::parse_from(["test", "add", "Technical Terms"]);
        assert!(matches!(
            parsed.command,
            CategoryCommand::Add { name } if name == "Technical Terms"
        ));
    }

    #[test]
    fn rename_parses_both_positionals() {
        let parsed = Wrapper::parse_from(["test", "rename", "cat-1", "Renamed"]);
        assert!(matches!(
            parsed.command,
            CategoryCommand::Rename { category, name } if category == "cat-1" && name == "Renamed"
        ));
    }

    #[test]
    fn rm_defaults_to_unconfirmed() {
        let parsed = Wrapper::parse_from(["test", "rm", "cat-1"]);
        assert!(matches!(parsed.command, CategoryCommand::Rm { yes: false, .. }));

        let parsed = Wrapper::parse_from(["test", "rm", "cat-1", "--yes"]);
        assert!(matches!(parsed.command, CategoryCommand::Rm { yes: true, .. }));
    }

    #[test]
    fn list_parses_without_arguments() {
        let parsed = Wrapper::parse_from(["test", "list"]);
        assert!(matches!(parsed.command, CategoryCommand::List));
    }

    #[test]
    fn render_list_human_empty_has_hint() {
        let mut out = Vec::new();
        render_list_human(&[], &mut out).expect("render");
        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.contains("glossa category add"));
    }

    #[test]
    fn render_list_human_shows_counts() {
        let rows = vec![CategoryRow {
            id: "cat-1".into(),
            name: "Tech".into(),
            term_count: 4,
        }];
        let mut out = Vec::new();
        render_list_human(&rows, &mut out).expect("render");
        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.contains("cat-1  Tech (4 terms)"));
    }
}
