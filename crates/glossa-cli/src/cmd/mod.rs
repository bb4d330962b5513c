//! Command handlers for the `glossa` binary, one module per subcommand.

pub mod category;
pub mod completions;
pub mod cycles;
pub mod export;
pub mod graph;
pub mod import;
pub mod init;
pub mod list;
pub mod quiz;
pub mod show;
pub mod stats;
pub mod term;

use crate::output::{CliError, OutputMode, render_error};
use glossa_core::{GlossaryData, GlossaryStore};

/// Load the glossary document, rendering a structured error on failure.
pub(crate) fn load_document(
    store: &impl GlossaryStore,
    output: OutputMode,
) -> anyhow::Result<GlossaryData> {
    match store.load() {
        Ok(data) => Ok(data),
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            anyhow::bail!("glossary document unavailable")
        }
    }
}

/// Persist the glossary document, rendering a structured error on failure.
pub(crate) fn save_document(
    store: &impl GlossaryStore,
    output: OutputMode,
    data: &GlossaryData,
) -> anyhow::Result<()> {
    match store.save(data) {
        Ok(()) => Ok(()),
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            anyhow::bail!("glossary document not saved")
        }
    }
}
