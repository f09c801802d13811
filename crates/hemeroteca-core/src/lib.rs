//! Hemeroteca Core Library
//!
//! Core functionality for the hemeroteca periodical archive search engine.
//!
//! # Features
//! - SQLite FTS5 full-text search over digitized page transcriptions
//! - Diacritic-insensitive snippet extraction with term highlighting
//! - CSV-based database provisioning for periodical collections
//! - Per-periodical result grouping and pagination

pub mod config;
pub mod db;
pub mod error;
pub mod preview;
pub mod search;

pub use config::Config;
pub use db::{Database, IngestReport, PeriodicalInfo, YearStats};
pub use error::{Error, HemerotecaError, Result};
pub use preview::{build_previews, render_preview, PageContentSource, PagePreview};
pub use search::{
    format_search_term, fts_match_expression, paginate, Page, PagedSearch, PeriodicalCount,
    SearchHit,
};

/// Default database file name
pub const DATABASE_FILE_NAME: &str = "app.db";

/// Default data directory name
pub const DATA_DIR_NAME: &str = "hemeroteca";
