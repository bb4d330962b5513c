//! `glossa term` — add, edit, remove, and bulk-import terms.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Subcommand};
use glossa_core::ops::{self, TermDraft, TermPatch};
use glossa_core::{Definitions, GlossaryStore};
use serde::Serialize;

use crate::cmd::{load_document, save_document};
use crate::output::{CliError, OutputMode, render, render_error};
use crate::resolve;

/// The four definition fields plus references, shared by add and edit.
///
/// Passing `"-"` for a text field marks it intentionally blank, which
/// excludes it from reference scanning, quizzes, and display.
#[derive(Args, Debug, Default)]
pub struct DefinitionFlags {
    /// Definition text.
    #[arg(long, value_name = "TEXT")]
    pub istilah: Option<String>,

    /// Language meaning of the term.
    #[arg(long, value_name = "TEXT")]
    pub bahasa: Option<String>,

    /// Why the term exists.
    #[arg(long = "kenapa-ada", value_name = "TEXT")]
    pub kenapa_ada: Option<String>,

    /// Usage example.
    #[arg(long, value_name = "TEXT")]
    pub contoh: Option<String>,

    /// Reference URL (repeatable; on edit, replaces the whole list).
    #[arg(long = "ref", value_name = "URL")]
    pub references: Vec<String>,
}

impl DefinitionFlags {
    fn is_empty(&self) -> bool {
        self.istilah.is_none()
            && self.bahasa.is_none()
            && self.kenapa_ada.is_none()
            && self.contoh.is_none()
            && self.references.is_empty()
    }

    fn to_definitions(&self) -> Definitions {
        Definitions {
            istilah: self.istilah.clone(),
            bahasa: self.bahasa.clone(),
            kenapa_ada: self.kenapa_ada.clone(),
            contoh: self.contoh.clone(),
            referensi: if self.references.is_empty() {
                None
            } else {
                Some(self.references.clone())
            },
        }
    }

    /// Overlay provided flags onto existing definitions. The ops layer
    /// replaces the definitions block wholesale, so the CLI rebuilds it
    /// from the current term to keep untouched fields intact.
    fn overlaid(&self, base: &Definitions) -> Definitions {
        Definitions {
            istilah: self.istilah.clone().or_else(|| base.istilah.clone()),
            bahasa: self.bahasa.clone().or_else(|| base.bahasa.clone()),
            kenapa_ada: self.kenapa_ada.clone().or_else(|| base.kenapa_ada.clone()),
            contoh: self.contoh.clone().or_else(|| base.contoh.clone()),
            referensi: if self.references.is_empty() {
                base.referensi.clone()
            } else {
                Some(self.references.clone())
            },
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum TermCommand {
    /// Add a term to a category.
    Add {
        /// Category id, name, or unique id prefix.
        category: String,

        /// Title of the new term (the cross-reference matching key).
        #[arg(long, value_name = "TITLE")]
        title: String,

        #[command(flatten)]
        fields: DefinitionFlags,
    },

    /// Edit a term's title, definitions, or understood marker.
    Edit {
        /// Category id, name, or unique id prefix.
        category: String,

        /// Term id, title, or unique id prefix.
        term: String,

        /// New title.
        #[arg(long, value_name = "TITLE")]
        title: Option<String>,

        #[command(flatten)]
        fields: DefinitionFlags,

        /// Mark the term as understood (true) or not (false).
        #[arg(long, value_name = "BOOL")]
        understood: Option<bool>,
    },

    /// Remove a term from a category.
    Rm {
        /// Category id, name, or unique id prefix.
        category: String,

        /// Term id, title, or unique id prefix.
        term: String,

        /// Confirm the removal.
        #[arg(long)]
        yes: bool,
    },

    /// Add many terms at once from a JSON drafts file.
    Bulk {
        /// Category id, name, or unique id prefix.
        category: String,

        /// JSON file holding an array of term drafts:
        /// `[{"title": "...", "definitions": {"istilah": "..."}}]`.
        #[arg(long, value_name = "PATH")]
        input: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct TermAdded {
    id: String,
    title: String,
    category_id: String,
}

#[derive(Debug, Serialize)]
struct TermUpdated {
    id: String,
    category_id: String,
}

#[derive(Debug, Serialize)]
struct TermRemoved {
    id: String,
    title: String,
    category_id: String,
}

#[derive(Debug, Serialize)]
struct TermsBulkAdded {
    category_id: String,
    added: usize,
    ids: Vec<String>,
}

/// Execute a `glossa term` subcommand.
pub fn run_term(
    command: &TermCommand,
    output: OutputMode,
    store: &impl GlossaryStore,
) -> anyhow::Result<()> {
    match command {
        TermCommand::Add {
            category,
            title,
            fields,
        } => run_add(category, title, fields, output, store),
        TermCommand::Edit {
            category,
            term,
            title,
            fields,
            understood,
        } => run_edit(category, term, title.as_deref(), fields, *understood, output, store),
        TermCommand::Rm {
            category,
            term,
            yes,
        } => run_rm(category, term, *yes, output, store),
        TermCommand::Bulk { category, input } => run_bulk(category, input, output, store),
    }
}

fn run_add(
    category: &str,
    title: &str,
    fields: &DefinitionFlags,
    output: OutputMode,
    store: &impl GlossaryStore,
) -> anyhow::Result<()> {
    let mut data = load_document(store, output)?;
    let category_id = resolve::require_category(&data, category, output)?.id.clone();

    let draft = TermDraft {
        title: title.to_string(),
        definitions: fields.to_definitions(),
        is_understood: None,
    };
    let id = match ops::add_term(&mut data, &category_id, draft) {
        Ok(id) => id,
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            anyhow::bail!("term not added")
        }
    };
    save_document(store, output, &data)?;

    let payload = TermAdded {
        id,
        title: title.to_string(),
        category_id,
    };
    render(output, &payload, |added, w| {
        writeln!(w, "✓ Added term '{}' ({}) to {}", added.title, added.id, added.category_id)
    })
}

fn run_edit(
    category: &str,
    term: &str,
    title: Option<&str>,
    fields: &DefinitionFlags,
    understood: Option<bool>,
    output: OutputMode,
    store: &impl GlossaryStore,
) -> anyhow::Result<()> {
    let mut data = load_document(store, output)?;
    let (category_id, term_id, current) = {
        let resolved_category = resolve::require_category(&data, category, output)?;
        let resolved_term = resolve::require_term(resolved_category, term, output)?;
        (
            resolved_category.id.clone(),
            resolved_term.id.clone(),
            resolved_term.definitions.clone(),
        )
    };

    if title.is_none() && fields.is_empty() && understood.is_none() {
        render_error(
            output,
            &CliError::with_details(
                "nothing to update",
                "pass at least one of --title, --istilah, --bahasa, --kenapa-ada, \
                 --contoh, --ref, --understood",
                "empty_update",
            ),
        )?;
        anyhow::bail!("empty update")
    }

    let patch = TermPatch {
        title: title.map(String::from),
        definitions: if fields.is_empty() {
            None
        } else {
            Some(fields.overlaid(&current))
        },
        is_understood: understood,
    };
    match ops::update_term(&mut data, &category_id, &term_id, patch) {
        Ok(()) => {}
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            anyhow::bail!("term not updated")
        }
    }
    save_document(store, output, &data)?;

    let payload = TermUpdated {
        id: term_id,
        category_id,
    };
    render(output, &payload, |updated, w| {
        writeln!(w, "✓ Updated term {}", updated.id)
    })
}

fn run_rm(
    category: &str,
    term: &str,
    yes: bool,
    output: OutputMode,
    store: &impl GlossaryStore,
) -> anyhow::Result<()> {
    let mut data = load_document(store, output)?;
    let (category_id, category_name, term_id, term_title) = {
        let resolved_category = resolve::require_category(&data, category, output)?;
        let resolved_term = resolve::require_term(resolved_category, term, output)?;
        (
            resolved_category.id.clone(),
            resolved_category.name.clone(),
            resolved_term.id.clone(),
            resolved_term.title.clone(),
        )
    };

    if !yes {
        render_error(
            output,
            &CliError::with_details(
                format!("removing term '{term_title}' from category '{category_name}'"),
                "pass --yes to confirm the removal",
                "confirmation_required",
            ),
        )?;
        anyhow::bail!("removal not confirmed")
    }

    let removed = match ops::delete_term(&mut data, &category_id, &term_id) {
        Ok(removed) => removed,
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            anyhow::bail!("removal failed")
        }
    };
    save_document(store, output, &data)?;

    let payload = TermRemoved {
        id: removed.id,
        title: removed.title,
        category_id,
    };
    render(output, &payload, |gone, w| {
        writeln!(w, "✓ Removed term '{}' ({})", gone.title, gone.id)
    })
}

fn run_bulk(
    category: &str,
    input: &Path,
    output: OutputMode,
    store: &impl GlossaryStore,
) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read drafts file {}", input.display()))?;
    let drafts: Vec<TermDraft> = match serde_json::from_str(&raw) {
        Ok(drafts) => drafts,
        Err(err) => {
            render_error(
                output,
                &CliError::with_details(
                    format!("drafts file is not a term draft array: {err}"),
                    "expected JSON like [{\"title\": \"API\", \"definitions\": {\"istilah\": \"...\"}}]",
                    "drafts_invalid",
                ),
            )?;
            anyhow::bail!("invalid drafts file")
        }
    };

    let mut data = load_document(store, output)?;
    let category_id = resolve::require_category(&data, category, output)?.id.clone();

    let ids = match ops::bulk_add_terms(&mut data, &category_id, drafts) {
        Ok(ids) => ids,
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            anyhow::bail!("bulk add failed")
        }
    };
    save_document(store, output, &data)?;

    let payload = TermsBulkAdded {
        category_id,
        added: ids.len(),
        ids,
    };
    render(output, &payload, |bulk, w| {
        writeln!(w, "✓ Added {} term(s) to {}", bulk.added, bulk.category_id)?;
        for id in &bulk.ids {
            writeln!(w, "  - {id}")?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(subcommand)]
        command: TermCommand,
    }

    #[test]
    fn add_parses_title_and_fields() {
        let parsed = Wrapper::parse_from([
            "test",
            "add",
            "tech",
            "--title",
            "API",
            "--istilah",
            "An interface",
            "--kenapa-ada",
            "So programs can talk",
            "--ref",
            "https://example.com/a",
            "--ref",
            "https://example.com/b",
        ]);
        let TermCommand::Add {
            category,
            title,
            fields,
        } = parsed.command
        else {
            panic!("expected add");
        };
        assert_eq!(category, "tech");
        assert_eq!(title, "API");
        assert_eq!(fields.istilah.as_deref(), Some("An interface"));
        assert_eq!(fields.kenapa_ada.as_deref(), Some("So programs can talk"));
        assert_eq!(fields.references.len(), 2);
    }

    #[test]
    fn edit_parses_understood_bool() {
        let parsed = Wrapper::parse_from(["test", "edit", "tech", "api", "--understood", "true"]);
        let TermCommand::Edit { understood, .. } = parsed.command else {
            panic!("expected edit");
        };
        assert_eq!(understood, Some(true));

        let parsed = Wrapper::parse_from(["test", "edit", "tech", "api", "--understood", "false"]);
        let TermCommand::Edit { understood, .. } = parsed.command else {
            panic!("expected edit");
        };
        assert_eq!(understood, Some(false));
    }

    #[test]
    fn rm_and_bulk_parse() {
        let parsed = Wrapper::parse_from(["test", "rm", "tech", "api", "--yes"]);
        assert!(matches!(parsed.command, TermCommand::Rm { yes: true, .. }));

        let parsed = Wrapper::parse_from(["test", "bulk", "tech", "--input", "drafts.json"]);
        let TermCommand::Bulk { input, .. } = parsed.command else {
            panic!("expected bulk");
        };
        assert_eq!(input, PathBuf::from("drafts.json"));
    }

    #[test]
    fn to_definitions_omits_empty_reference_list() {
        let flags = DefinitionFlags {
            istilah: Some("text".into()),
            ..DefinitionFlags::default()
        };
        let definitions = flags.to_definitions();
        assert_eq!(definitions.istilah.as_deref(), Some("text"));
        assert_eq!(definitions.referensi, None);
    }

    #[test]
    fn overlaid_keeps_untouched_fields() {
        let base = Definitions {
            istilah: Some("old definition".into()),
            contoh: Some("old example".into()),
            referensi: Some(vec!["https://example.com".into()]),
            ..Definitions::default()
        };
        let flags = DefinitionFlags {
            istilah: Some("new definition".into()),
            ..DefinitionFlags::default()
        };

        let merged = flags.overlaid(&base);
        assert_eq!(merged.istilah.as_deref(), Some("new definition"));
        assert_eq!(merged.contoh.as_deref(), Some("old example"), "untouched field kept");
        assert_eq!(merged.referensi, Some(vec!["https://example.com".to_string()]));
    }

    #[test]
    fn overlaid_replaces_reference_list_when_given() {
        let base = Definitions {
            referensi: Some(vec!["https://old.example".into()]),
            ..Definitions::default()
        };
        let flags = DefinitionFlags {
            references: vec!["https://new.example".into()],
            ..DefinitionFlags::default()
        };

        let merged = flags.overlaid(&base);
        assert_eq!(merged.referensi, Some(vec!["https://new.example".to_string()]));
    }

    #[test]
    fn sentinel_flag_value_passes_through() {
        let flags = DefinitionFlags {
            bahasa: Some("-".into()),
            ..DefinitionFlags::default()
        };
        let definitions = flags.to_definitions();
        assert_eq!(definitions.bahasa.as_deref(), Some("-"));
        assert_eq!(
            definitions.provided(glossa_core::DefinitionField::Bahasa),
            None,
            "sentinel still counts as not provided"
        );
    }
}
