//! Database layer for hemeroteca
//!
//! SQLite storage for the periodical hierarchy (periodicals, years, issues,
//! pages) with a contentless FTS5 index over page text.

mod ingest;
mod pages;
mod periodicals;
mod schema;

pub use ingest::{IngestReport, CSV_FILES};
pub use periodicals::{PeriodicalInfo, YearStats};
pub use schema::Database;

use std::path::PathBuf;

impl Database {
    /// Get the default database path
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::DATA_DIR_NAME)
            .join(crate::DATABASE_FILE_NAME)
    }
}
