//! FTS5 queries over the page content index

use super::{paginate, Page, PeriodicalCount, SearchHit};
use crate::db::Database;
use crate::error::Result;

/// Everything the results view needs for one search request
#[derive(Debug, Clone, serde::Serialize)]
pub struct PagedSearch {
    pub results: Page<SearchHit>,
    pub periodicals: Vec<PeriodicalCount>,
}

impl Database {
    /// All hits for a match expression, joined up to their periodical.
    ///
    /// With a periodical filter the hits are ordered by year, issue and page;
    /// without one they keep index order.
    pub fn search_pages(
        &self,
        match_expr: &str,
        periodical: Option<&str>,
    ) -> Result<Vec<SearchHit>> {
        let mut sql = String::from(
            r#"
            SELECT p.name, y.year, i.number, pg.page_no, i.link, pg.id
            FROM pages_fts fts
            JOIN pages pg ON pg.id = fts.rowid
            JOIN issues i ON i.id = pg.issue_id
            JOIN periodical_years y ON y.id = i.year_id
            JOIN periodicals p ON p.id = y.periodical_id
            WHERE pages_fts MATCH ?1
        "#,
        );

        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> =
            vec![Box::new(match_expr.to_string())];

        if let Some(name) = periodical {
            sql.push_str(" AND p.name = ?2 ORDER BY y.year, i.number, pg.page_no");
            params_vec.push(Box::new(name.to_string()));
        } else {
            sql.push_str(" ORDER BY pg.id");
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let hits = stmt
            .query_map(
                rusqlite::params_from_iter(params_vec.iter().map(|p| p.as_ref())),
                |row| {
                    Ok(SearchHit {
                        periodical: row.get(0)?,
                        year: row.get(1)?,
                        issue: row.get(2)?,
                        page_no: row.get(3)?,
                        issue_link: row.get(4)?,
                        page_id: row.get(5)?,
                    })
                },
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(hits)
    }

    /// Hit counts per periodical for a match expression, ordered by name
    pub fn distinct_periodicals(&self, match_expr: &str) -> Result<Vec<PeriodicalCount>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT p.name, COUNT(*)
            FROM pages_fts fts
            JOIN pages pg ON pg.id = fts.rowid
            JOIN issues i ON i.id = pg.issue_id
            JOIN periodical_years y ON y.id = i.year_id
            JOIN periodicals p ON p.id = y.periodical_id
            WHERE pages_fts MATCH ?1
            GROUP BY p.id
            ORDER BY p.name
        "#,
        )?;

        let counts = stmt
            .query_map([match_expr], |row| {
                Ok(PeriodicalCount {
                    name: row.get(0)?,
                    hits: row.get::<_, i64>(1)? as usize,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(counts)
    }

    /// Run one full search request: hits, per-periodical counts, pagination.
    ///
    /// The periodical counts always cover the unfiltered result set, so the
    /// filter sidebar stays complete while a filter is active.
    pub fn paged_search(
        &self,
        match_expr: &str,
        periodical: Option<&str>,
        page: usize,
        per_page: usize,
    ) -> Result<PagedSearch> {
        tracing::debug!(match_expr, ?periodical, page, "running paged search");

        let periodicals = self.distinct_periodicals(match_expr)?;
        let hits = self.search_pages(match_expr, periodical)?;
        let results = paginate(hits, page, per_page)?;

        Ok(PagedSearch {
            results,
            periodicals,
        })
    }
}
