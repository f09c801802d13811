//! Search layer
//!
//! Term formatting, FTS5 match expressions, and pagination over the joined
//! periodical/year/issue/page rows. The actual queries live in `fts.rs`.

mod fts;

pub use fts::PagedSearch;

use crate::error::{HemerotecaError, Result};

/// One search hit: a page of one issue of one periodical.
///
/// The page id comes last; it is the key the preview engine uses to fetch
/// the page text.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SearchHit {
    pub periodical: String,
    pub year: String,
    pub issue: String,
    pub page_no: String,
    pub issue_link: String,
    pub page_id: i64,
}

/// Hit count for one periodical, for the filter sidebar
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PeriodicalCount {
    pub name: String,
    pub hits: usize,
}

/// One page of a larger result set
#[derive(Debug, Clone, serde::Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub pages: usize,
}

impl<T> Page<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }
}

/// Slice `items` down to the requested page.
///
/// Page numbers are 1-based. Page 1 of an empty result set is fine; any
/// other page past the end is an error, as is page 0.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Result<Page<T>> {
    let total = items.len();
    let pages = total.div_ceil(per_page.max(1));

    if page == 0 || (page > 1 && page > pages) {
        return Err(HemerotecaError::PageOutOfRange(page));
    }

    let start = (page - 1) * per_page;
    let items: Vec<T> = items.into_iter().skip(start).take(per_page).collect();

    Ok(Page {
        items,
        page,
        per_page,
        total,
        pages,
    })
}

/// Format a raw search term for matching.
///
/// Strips every character that is neither alphanumeric, a space, nor one of
/// `accepted_special_characters`, then joins the remaining words with
/// `separator`: `" "` for display and preview matching, `"+"` when building
/// the FTS expression.
pub fn format_search_term(raw: &str, separator: &str, accepted_special_characters: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| {
            c.is_alphanumeric() || *c == ' ' || accepted_special_characters.contains(*c)
        })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(separator)
}

/// Build the FTS5 phrase-prefix expression for a formatted term
pub fn fts_match_expression(formatted_term: &str) -> String {
    format!("\"{}\"*", formatted_term)
}
