//! Page content lookups

use super::Database;
use crate::error::Result;
use crate::preview::PageContentSource;
use rusqlite::params;

impl Database {
    /// Get the raw OCR transcription of one page
    pub fn page_content(&self, page_id: i64) -> Result<Option<String>> {
        let result = self.conn.query_row(
            "SELECT content FROM pages WHERE id = ?1",
            params![page_id],
            |row| row.get(0),
        );
        match result {
            Ok(content) => Ok(Some(content)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Total number of indexed pages
    pub fn page_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM pages", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl PageContentSource for Database {
    /// Preview lookups degrade to `None` on any failure: a broken row must
    /// cost one placeholder preview, not the whole result listing.
    fn lookup_page_content(&self, page_id: i64) -> Option<String> {
        match self.page_content(page_id) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(page_id, error = %e, "page content lookup failed");
                None
            }
        }
    }
}
