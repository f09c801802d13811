//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hemeroteca")]
#[command(
    author,
    version,
    about = "Full-text search over digitized periodical collections"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the archive database
    Db(DbArgs),

    /// List periodicals, or show one periodical's per-year counts
    Periodicals(PeriodicalsArgs),

    /// Search page transcriptions and show highlighted previews
    Search(SearchArgs),
}

#[derive(Args)]
pub struct DbArgs {
    #[command(subcommand)]
    pub action: DbAction,
}

#[derive(Subcommand)]
pub enum DbAction {
    /// Create and populate a database from CSV exports
    Create {
        /// Directory holding periodicals.csv, periodical_years.csv,
        /// issues.csv and pages.csv
        #[arg(long)]
        from: PathBuf,

        /// Overwrite an existing database file
        #[arg(long)]
        force: bool,
    },
    /// Show row counts per table
    Status,
}

#[derive(Args)]
pub struct PeriodicalsArgs {
    /// Periodical id; omit to list all periodicals
    pub id: Option<i64>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Search term
    pub term: Vec<String>,

    /// Result page to show
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Only show hits from this periodical
    #[arg(long)]
    pub periodical: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
}
