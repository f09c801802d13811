//! Database provisioning commands

use crate::app::OutputFormat;
use anyhow::Result;
use hemeroteca_core::{Config, Database, HemerotecaError};
use std::path::Path;

/// Create a database from CSV exports: schema, data, aggregates, FTS index
pub fn create(db_path: &Path, csv_dir: &Path, force: bool, config: &Config) -> Result<()> {
    if db_path.is_file() {
        if !force {
            return Err(HemerotecaError::DatabaseExists(db_path.to_path_buf()).into());
        }
        std::fs::remove_file(db_path)?;
    }

    let mut db = Database::open(db_path)?;
    db.initialize()?;

    let report = db.ingest_csv_dir(csv_dir)?;
    db.rebuild_stats()?;
    db.create_fts_index(&config.accepted_special_characters)?;

    println!("database created at {}", db_path.display());
    println!(
        "  periodicals: {}, years: {}, issues: {}, pages: {}",
        report.periodicals, report.years, report.issues, report.pages
    );
    Ok(())
}

/// Show row counts per table
pub fn status(db: &Database, format: OutputFormat) -> Result<()> {
    let periodicals = db.list_periodicals()?;
    let pages = db.page_count()?;
    let fts = db.has_fts_index()?;

    match format {
        OutputFormat::Json => {
            let status = serde_json::json!({
                "periodicals": periodicals.len(),
                "pages": pages,
                "fts_index": fts,
            });
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        OutputFormat::Cli => {
            println!("Periodicals:  {}", periodicals.len());
            println!("Pages:        {}", pages);
            println!("FTS index:    {}", if fts { "present" } else { "missing" });
        }
    }
    Ok(())
}
