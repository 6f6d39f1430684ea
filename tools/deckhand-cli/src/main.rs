//! Deckhand Command Line Interface
//!
//! A CLI tool for managing slide decks: add, delete, and renumber slides
//! while keeping the manifest, the slide files, and git's index in sync.

mod commands;
mod error;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands::{add, delete, list, renumber};
use crate::error::Result;

/// Deckhand Command Line Interface
///
/// Manages a presentation's slide manifest and backing files with
/// automatic renumbering and git-aware, transactional file operations.
#[derive(Parser, Debug)]
#[command(name = "deckhand")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the slide manifest
    #[arg(short, long, env = "DECKHAND_MANIFEST", default_value = "slides.md", global = true)]
    pub manifest: PathBuf,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new slide at a position (1-indexed)
    Add {
        /// Position to insert the new slide at
        position: usize,

        /// Title of the new slide
        #[arg(short, long)]
        title: String,

        /// Layout for the new slide
        #[arg(short, long, default_value = "default")]
        layout: String,

        /// Renumber the whole deck to 1..N afterwards
        #[arg(short, long)]
        renumber: bool,
    },

    /// Delete the slide at a position (1-indexed)
    Delete {
        /// Position of the slide to delete
        position: usize,

        /// Renumber the remaining slides to 1..N
        #[arg(short, long)]
        renumber: bool,
    },

    /// Close numbering gaps, keeping the first slide's offset
    Renumber,

    /// List the slides and any numbering gaps
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

/// Output format for the list command
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table
    Table,
    /// JSON array of slide records
    Json,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        return ExitCode::from(e.exit_code());
    }
    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    log::debug!("using manifest {}", cli.manifest.display());

    match cli.command {
        Commands::Add { position, title, layout, renumber } => {
            add::run(&cli.manifest, position, &title, &layout, renumber)
        }
        Commands::Delete { position, renumber } => delete::run(&cli.manifest, position, renumber),
        Commands::Renumber => renumber::run(&cli.manifest),
        Commands::List { format } => list::run(&cli.manifest, format),
    }
}
