use anyhow::{Context as _, Result};
use clap::Args;
use glossa_core::config::CONFIG_FILE;
use glossa_core::store::JsonFileStore;
use glossa_core::{GlossaryData, GlossaryStore};
use std::path::Path;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Force re-initialization even if the glossary document already exists.
    #[arg(long)]
    pub force: bool,
}

const CONFIG_TOML: &str = "[quiz]\n\
    default_questions = 5\n\
    min_distractors = 2\n\
    \n\
    [graph]\n\
    base_radius = 8.0\n\
    radius_per_link = 1.5\n";

/// Execute `glossa init`. Creates the project skeleton:
///
/// ```text
/// glossary.json    (empty document: {"categories": []})
/// glossa.toml      (default config template)
/// ```
///
/// Both files land in the directory of the configured document path, so
/// `glossa --file docs/glossary.json init` sets up `docs/`.
///
/// # Errors
///
/// Returns an error if the document already exists and `--force` is not
/// set, or if any filesystem operation fails.
pub fn run_init(args: &InitArgs, document_path: &Path) -> Result<()> {
    if document_path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists. Use `glossa init --force` to reinitialize.",
            document_path.display()
        );
    }

    if let Some(parent) = document_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let store = JsonFileStore::new(document_path);
    store
        .save(&GlossaryData::default())
        .with_context(|| format!("Failed to write document: {}", document_path.display()))?;

    let config_dir = document_path.parent().unwrap_or_else(|| Path::new("."));
    let config_path = config_dir.join(CONFIG_FILE);
    std::fs::write(&config_path, CONFIG_TOML)
        .with_context(|| format!("Failed to write config: {}", config_path.display()))?;

    // Onboarding hints
    println!("✓ Initialized glossary project.");
    println!();
    println!("  Document: {}", document_path.display());
    println!("  Config:   {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  Create a category:");
    println!("    glossa category add \"Technical Terms\"");
    println!();
    println!("  Add your first term:");
    println!("    glossa term add \"Technical Terms\" --title \"API\" \\");
    println!("      --istilah \"A contract that lets one program call another.\"");

    Ok(())
}
