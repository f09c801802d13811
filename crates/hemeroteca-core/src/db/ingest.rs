//! CSV ingestion and derived tables
//!
//! Databases are provisioned from the CSV exports of the digitization
//! project: one file per table, id columns included, no header row.

use super::Database;
use crate::error::{HemerotecaError, Result};
use std::path::Path;

/// CSV file name and target table, in insertion order (parents first)
pub const CSV_FILES: &[(&str, &str)] = &[
    ("periodicals.csv", "periodicals"),
    ("periodical_years.csv", "periodical_years"),
    ("issues.csv", "issues"),
    ("pages.csv", "pages"),
];

fn insert_sql(table: &str) -> &'static str {
    match table {
        "periodicals" => "INSERT INTO periodicals (id, name, link) VALUES (?1, ?2, ?3)",
        "periodical_years" => {
            "INSERT INTO periodical_years (id, periodical_id, year, link) VALUES (?1, ?2, ?3, ?4)"
        }
        "issues" => "INSERT INTO issues (id, year_id, number, link) VALUES (?1, ?2, ?3, ?4)",
        "pages" => "INSERT INTO pages (id, issue_id, content, page_no) VALUES (?1, ?2, ?3, ?4)",
        _ => unreachable!("unknown ingest table"),
    }
}

/// Row counts after a completed ingest
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct IngestReport {
    pub periodicals: usize,
    pub years: usize,
    pub issues: usize,
    pub pages: usize,
}

impl Database {
    /// Load all four CSV exports from `dir` inside one transaction.
    ///
    /// Missing files abort before anything is written; a failing row rolls
    /// the whole ingest back. Id columns arrive as text and rely on SQLite
    /// column affinity for coercion, exactly as the exports were produced.
    pub fn ingest_csv_dir(&mut self, dir: &Path) -> Result<IngestReport> {
        for (file, _) in CSV_FILES {
            let path = dir.join(file);
            if !path.is_file() {
                return Err(HemerotecaError::CsvFileNotFound(path));
            }
        }

        let mut report = IngestReport::default();
        let tx = self.conn.transaction()?;

        for (file, table) in CSV_FILES {
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .from_path(dir.join(file))?;

            let mut rows = 0usize;
            {
                let mut stmt = tx.prepare(insert_sql(table))?;
                for record in reader.records() {
                    let record = record?;
                    let fields: Vec<&str> = record.iter().collect();
                    stmt.execute(rusqlite::params_from_iter(fields.iter()))?;
                    rows += 1;
                }
            }

            tracing::info!(file, table, rows, "ingested csv file");
            match *table {
                "periodicals" => report.periodicals = rows,
                "periodical_years" => report.years = rows,
                "issues" => report.issues = rows,
                "pages" => report.pages = rows,
                _ => {}
            }
        }

        tx.commit()?;
        Ok(report)
    }

    /// Rebuild the per-year aggregate counts from scratch
    pub fn rebuild_stats(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            DROP TABLE IF EXISTS periodical_stats;

            CREATE TABLE periodical_stats (
                id INTEGER PRIMARY KEY,
                periodical_id INTEGER NOT NULL REFERENCES periodicals(id),
                year TEXT NOT NULL,
                issue_count INTEGER NOT NULL,
                page_count INTEGER NOT NULL
            );

            INSERT INTO periodical_stats (periodical_id, year, issue_count, page_count)
            SELECT
                p.id,
                y.year,
                COUNT(DISTINCT i.id),
                COUNT(DISTINCT pg.id)
            FROM periodicals p
            INNER JOIN periodical_years y ON p.id = y.periodical_id
            INNER JOIN issues i ON y.id = i.year_id
            INNER JOIN pages pg ON i.id = pg.issue_id
            GROUP BY y.id
            ORDER BY p.id, y.year;
            "#,
        )?;

        Ok(())
    }
}
