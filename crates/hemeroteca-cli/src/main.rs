//! Hemeroteca CLI
//!
//! Search front end for digitized periodical collections.

use anyhow::Result;
use clap::Parser;
use hemeroteca_core::{Config, Database};

mod app;
mod commands;
mod output;

use app::{Cli, Commands, DbAction};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;

    // Use HEMEROTECA_DB env var if set, otherwise the configured path
    let db_path = std::env::var("HEMEROTECA_DB")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| config.database_path());

    let result = match cli.command {
        Commands::Db(args) => match args.action {
            DbAction::Create { from, force } => {
                commands::database::create(&db_path, &from, force, &config)
            }
            DbAction::Status => {
                let db = Database::open(&db_path)?;
                commands::database::status(&db, cli.format)
            }
        },
        Commands::Periodicals(args) => {
            let db = Database::open(&db_path)?;
            commands::periodicals::run(args, &db, cli.format)
        }
        Commands::Search(args) => {
            let db = Database::open(&db_path)?;
            commands::search::run(args, &db, &config, cli.format)
        }
    };

    if let Err(ref e) = result {
        if let Some(core_err) = e.downcast_ref::<hemeroteca_core::Error>() {
            eprintln!("error: {}", core_err);
            std::process::exit(core_err.exit_code());
        }
    }

    result
}
