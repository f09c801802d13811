//! Periodical listing command

use crate::app::{OutputFormat, PeriodicalsArgs};
use anyhow::Result;
use hemeroteca_core::{Database, HemerotecaError};

pub fn run(args: PeriodicalsArgs, db: &Database, format: OutputFormat) -> Result<()> {
    match args.id {
        None => list(db, format),
        Some(id) => details(db, id, format),
    }
}

fn list(db: &Database, format: OutputFormat) -> Result<()> {
    let periodicals = db.list_periodicals()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&periodicals)?),
        OutputFormat::Cli => {
            for p in &periodicals {
                println!("{:>4}  {}", p.id, p.name);
            }
        }
    }
    Ok(())
}

fn details(db: &Database, id: i64, format: OutputFormat) -> Result<()> {
    let name = db
        .periodical_name(id)?
        .ok_or(HemerotecaError::PeriodicalNotFound(id))?;
    let stats = db.periodical_stats(id)?;

    match format {
        OutputFormat::Json => {
            let details = serde_json::json!({ "id": id, "name": name, "years": stats });
            println!("{}", serde_json::to_string_pretty(&details)?);
        }
        OutputFormat::Cli => {
            println!("{}", name);
            for year in &stats {
                println!(
                    "  {}: {} issues, {} pages",
                    year.year, year.issue_count, year.page_count
                );
            }
        }
    }
    Ok(())
}
