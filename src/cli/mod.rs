//! CLI adapter for seekbase
//!
//! Provides the command-line interface over the core pipeline. The
//! commands map directly onto the core operations: build an index from
//! entity snapshots, query it, inspect or delete single documents, and
//! show the effective configuration.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Seekbase - Fulltext Index Builder
///
/// Builds a searchable fulltext index from CMS entity snapshots
/// (documents, assets, data objects) and lets you query it with
/// keywords, phrases, or boolean operators.
#[derive(Parser, Debug)]
#[command(name = "seekbase")]
#[command(author = "RHOBIMD HEALTH")]
#[command(version)]
#[command(about = "Fulltext index builder for CMS entities", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build or update the index from a directory of entity snapshots
    Build(commands::BuildArgs),

    /// Search the index with BM25 ranking
    Search(commands::SearchArgs),

    /// Show the stored index document for one entity
    Show(commands::ShowArgs),

    /// Delete one entity's document from the index
    Delete(commands::DeleteArgs),

    /// Show current configuration
    Config(commands::ConfigArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::xdg::XdgDirs;

    // Initialize XDG directories
    let xdg = XdgDirs::new();
    xdg.log_paths();
    xdg.ensure_dirs_exist()?;

    // Load configuration
    let config = Config::load()?;
    config.log_config();

    // Execute command
    match cli.command {
        Commands::Build(args) => commands::build::execute(args, &config, cli.format),
        Commands::Search(args) => commands::search::execute(args, &config, cli.format),
        Commands::Show(args) => commands::show::execute(args, &config, cli.format),
        Commands::Delete(args) => commands::delete::execute(args, &config, cli.format),
        Commands::Config(args) => commands::config::execute(args, &config, cli.format),
    }
}
