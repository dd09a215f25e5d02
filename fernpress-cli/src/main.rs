//! # fernpress CLI
//!
//! Command-line driver for the fernpress static site generator.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fernpress")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "fernpress.yml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new fernpress project
    Init {
        /// Target directory (defaults to current directory)
        path: Option<PathBuf>,
    },

    /// Build the static site
    Build {
        /// Rescan content on every read instead of caching
        #[arg(long)]
        dev: bool,
    },

    /// Remove the output directory
    Clean,

    /// Print the scanned content model as JSON
    Entries {
        /// Restrict to one directory (use "root" for top-level files)
        #[arg(long)]
        directory: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Init { path } => commands::init_project(path.as_deref()),
        Commands::Build { dev } => commands::build_site(&cli.config, dev),
        Commands::Clean => commands::clean_output(&cli.config),
        Commands::Entries { directory } => {
            commands::print_entries(&cli.config, directory.as_deref())
        }
    }
}
