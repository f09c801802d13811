//! Database schema and initialization

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;

/// Main database handle
pub struct Database {
    pub(crate) conn: Connection,
}

const CREATE_TABLES: &str = r#"
-- Periodical titles
CREATE TABLE IF NOT EXISTS periodicals (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    link TEXT
);

-- Publication years of one periodical
CREATE TABLE IF NOT EXISTS periodical_years (
    id INTEGER PRIMARY KEY,
    periodical_id INTEGER NOT NULL REFERENCES periodicals(id),
    year TEXT NOT NULL,
    link TEXT
);

-- Numbered issues within one year
CREATE TABLE IF NOT EXISTS issues (
    id INTEGER PRIMARY KEY,
    year_id INTEGER NOT NULL REFERENCES periodical_years(id),
    number TEXT NOT NULL,
    link TEXT
);

-- Digitized pages of one issue, full OCR transcription per row
CREATE TABLE IF NOT EXISTS pages (
    id INTEGER PRIMARY KEY,
    issue_id INTEGER NOT NULL REFERENCES issues(id),
    content TEXT,
    page_no TEXT
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_periodical_years_periodical ON periodical_years(periodical_id);
CREATE INDEX IF NOT EXISTS idx_issues_year ON issues(year_id);
CREATE INDEX IF NOT EXISTS idx_pages_issue ON pages(issue_id);
"#;

impl Database {
    /// Open database at path, creating parent directories if necessary
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Open in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Initialize database schema
    pub fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = 5000;",
        )?;

        self.conn.execute_batch(CREATE_TABLES)?;

        Ok(())
    }

    /// Create the contentless FTS5 index over page text and populate it.
    ///
    /// `tokenchars` are extra characters the unicode61 tokenizer treats as
    /// token members, mirroring the accepted special characters of search
    /// terms. Diacritics are removed on both the index and the query side.
    pub fn create_fts_index(&self, tokenchars: &str) -> Result<()> {
        self.conn.execute_batch(&format!(
            r#"
            DROP TABLE IF EXISTS pages_fts;
            CREATE VIRTUAL TABLE pages_fts USING fts5(
                content,
                content='',
                tokenize = "unicode61 remove_diacritics 2 tokenchars '{}'"
            );
            INSERT INTO pages_fts(rowid, content)
            SELECT id, content FROM pages;
            "#,
            tokenchars
        ))?;

        Ok(())
    }

    /// Whether the FTS index has been created
    pub fn has_fts_index(&self) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'pages_fts'",
            [],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}
