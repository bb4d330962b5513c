//! `glossa completions` — shell completion scripts.

use std::io::Write;

use clap::Args;
use clap_complete::{Shell, generate};

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write a completion script for `shell` to stdout.
pub fn run_completions(shell: Shell, command: &mut clap::Command) -> anyhow::Result<()> {
    write_completions(shell, command, &mut std::io::stdout());
    Ok(())
}

fn write_completions(shell: Shell, command: &mut clap::Command, w: &mut dyn Write) {
    generate(shell, command, "glossa", w);
}
