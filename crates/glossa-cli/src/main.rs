#![forbid(unsafe_code)]

mod cmd;
mod output;
mod resolve;

use clap::{CommandFactory, Parser, Subcommand};
use glossa_core::JsonFileStore;
use output::OutputMode;
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Document path used when neither `--file` nor `GLOSSA_FILE` is set.
const DEFAULT_DOCUMENT: &str = "glossary.json";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "glossa: glossary term dependency analysis",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the glossary document (overrides GLOSSA_FILE).
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }

    /// Resolve the document path: `--file`, then `GLOSSA_FILE`, then the
    /// default `glossary.json` in the current directory.
    fn document_path(&self) -> PathBuf {
        if let Some(file) = &self.file {
            return file.clone();
        }
        env::var_os("GLOSSA_FILE").map_or_else(|| PathBuf::from(DEFAULT_DOCUMENT), PathBuf::from)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Project Maintenance",
        about = "Initialize a glossary project",
        long_about = "Create an empty glossary document and a glossa.toml config.",
        after_help = "EXAMPLES:\n    # Initialize in the current directory\n    glossa init\n\n    # Reinitialize over an existing document\n    glossa init --force"
    )]
    Init(cmd::init::InitArgs),

    #[command(
        next_help_heading = "Authoring",
        about = "Manage categories",
        after_help = "EXAMPLES:\n    # Add a category\n    glossa category add \"Tech Terms\"\n\n    # List categories with term counts\n    glossa category list"
    )]
    Category {
        #[command(subcommand)]
        command: cmd::category::CategoryCommand,
    },

    #[command(
        next_help_heading = "Authoring",
        about = "Manage terms",
        after_help = "EXAMPLES:\n    # Add a term\n    glossa term add tech --title \"API\" --istilah \"An interface for programs\"\n\n    # Mark a term as understood\n    glossa term edit tech api --understood true\n\n    # Bulk-add from a drafts file\n    glossa term bulk tech --input drafts.json"
    )]
    Term {
        #[command(subcommand)]
        command: cmd::term::TermCommand,
    },

    #[command(
        next_help_heading = "Read",
        about = "List a category's terms in reading order",
        long_about = "List a category's terms ordered so prerequisites come before the terms that mention them.",
        after_help = "EXAMPLES:\n    # List terms in dependency-first order\n    glossa list tech\n\n    # Emit machine-readable output\n    glossa list tech --json"
    )]
    List(cmd::list::ListArgs),

    #[command(
        next_help_heading = "Read",
        about = "Show one term",
        long_about = "Show full details for a single term: definitions, references, understood marker.",
        after_help = "EXAMPLES:\n    # Show a term\n    glossa show tech api\n\n    # Keep markup and link cross-references\n    glossa show tech api --html"
    )]
    Show(cmd::show::ShowArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Emit the reference graph",
        long_about = "Build the {nodes, links} reference graph payload for a category.",
        after_help = "EXAMPLES:\n    # Graph payload for a visualization\n    glossa graph tech --json\n\n    # Human-readable edge list\n    glossa graph tech"
    )]
    Graph(cmd::graph::GraphArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Find circular references",
        long_about = "Find groups of terms whose definitions mention each other in a loop.",
        after_help = "EXAMPLES:\n    # List circular reference groups\n    glossa cycles tech\n\n    # Emit machine-readable output\n    glossa cycles tech --json"
    )]
    Cycles(cmd::cycles::CyclesArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Show reference graph metrics",
        long_about = "Summarize a category's reference structure: counts, density, cycles, islands, most-referenced term.",
        after_help = "EXAMPLES:\n    # Show graph metrics\n    glossa stats tech\n\n    # Emit machine-readable output\n    glossa stats tech --json"
    )]
    Stats(cmd::stats::StatsArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Generate a quiz from a category",
        long_about = "Generate multiple-choice questions from a category's definitions.",
        after_help = "EXAMPLES:\n    # Five questions on any field\n    glossa quiz tech\n\n    # Reproducible three-question quiz on istilah\n    glossa quiz tech -n 3 --focus istilah --seed 42\n\n    # Answer interactively\n    glossa quiz tech --play"
    )]
    Quiz(cmd::quiz::QuizArgs),

    #[command(
        next_help_heading = "Project Maintenance",
        about = "Export the document as JSON",
        long_about = "Write the whole glossary document as portable JSON.",
        after_help = "EXAMPLES:\n    # Export to stdout\n    glossa export > backup.json\n\n    # Export to a file\n    glossa export --output backup.json"
    )]
    Export(cmd::export::ExportArgs),

    #[command(
        next_help_heading = "Project Maintenance",
        about = "Import a document export",
        long_about = "Validate and import an export file, replacing or merging with the current document.",
        after_help = "EXAMPLES:\n    # Replace the current document\n    glossa import backup.json\n\n    # Append the imported categories instead\n    glossa import backup.json --merge"
    )]
    Import(cmd::import::ImportArgs),

    #[command(
        next_help_heading = "Project Maintenance",
        about = "Generate shell completion scripts",
        long_about = "Generate shell completion scripts for supported shells.",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    glossa completions bash\n\n    # Generate zsh completions\n    glossa completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(quiet: bool) {
    let filter = EnvFilter::try_from_env("GLOSSA_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if quiet {
            "error"
        } else if env::var("DEBUG").is_ok() {
            "glossa_core=debug,glossa_graph=debug,glossa_quiz=debug,glossa_cli=debug,info"
        } else {
            "glossa_core=info,glossa_graph=info,glossa_quiz=info,glossa_cli=info,warn"
        })
    });

    let format = env::var("GLOSSA_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr; stdout is reserved for command output.
    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let output = cli.output_mode();
    let document_path = cli.document_path();
    let config_dir = document_path.parent().unwrap_or_else(|| Path::new("."));
    let store = JsonFileStore::new(&document_path);

    match &cli.command {
        Commands::Init(args) => cmd::init::run_init(args, &document_path),
        Commands::Category { command } => cmd::category::run_category(command, output, &store),
        Commands::Term { command } => cmd::term::run_term(command, output, &store),
        Commands::List(args) => cmd::list::run_list(args, output, &store),
        Commands::Show(args) => cmd::show::run_show(args, output, &store),
        Commands::Graph(args) => cmd::graph::run_graph(args, output, &store, config_dir),
        Commands::Cycles(args) => cmd::cycles::run_cycles(args, output, &store),
        Commands::Stats(args) => cmd::stats::run_stats(args, output, &store),
        Commands::Quiz(args) => cmd::quiz::run_quiz(args, output, &store, config_dir),
        Commands::Export(args) => cmd::export::run_export(args, output, &store),
        Commands::Import(args) => cmd::import::run_import(args, output, &store),
        Commands::Completions(args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}
