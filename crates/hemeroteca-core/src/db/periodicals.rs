//! Periodical listings and per-year aggregates

use super::Database;
use crate::error::Result;
use rusqlite::params;

/// One periodical title
#[derive(Debug, Clone, serde::Serialize)]
pub struct PeriodicalInfo {
    pub id: i64,
    pub name: String,
    pub link: String,
}

/// Issue and page counts for one publication year
#[derive(Debug, Clone, serde::Serialize)]
pub struct YearStats {
    pub year: String,
    pub issue_count: i64,
    pub page_count: i64,
}

impl Database {
    /// All periodicals, ordered by name
    pub fn list_periodicals(&self) -> Result<Vec<PeriodicalInfo>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, COALESCE(link, '') FROM periodicals ORDER BY name")?;

        let periodicals = stmt
            .query_map([], |row| {
                Ok(PeriodicalInfo {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    link: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(periodicals)
    }

    /// Name of one periodical, or `None` when the id is unknown
    pub fn periodical_name(&self, periodical_id: i64) -> Result<Option<String>> {
        let result = self.conn.query_row(
            "SELECT name FROM periodicals WHERE id = ?1",
            params![periodical_id],
            |row| row.get(0),
        );
        match result {
            Ok(name) => Ok(Some(name)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Per-year issue and page counts for one periodical, from the
    /// precomputed aggregate table
    pub fn periodical_stats(&self, periodical_id: i64) -> Result<Vec<YearStats>> {
        let mut stmt = self.conn.prepare(
            "SELECT year, issue_count, page_count FROM periodical_stats
             WHERE periodical_id = ?1 ORDER BY year",
        )?;

        let stats = stmt
            .query_map(params![periodical_id], |row| {
                Ok(YearStats {
                    year: row.get(0)?,
                    issue_count: row.get(1)?,
                    page_count: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(stats)
    }
}
