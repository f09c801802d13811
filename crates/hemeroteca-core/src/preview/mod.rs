//! Preview engine
//!
//! Builds the highlighted snippet shown next to each search result: locate
//! every diacritic- and case-insensitive occurrence of the term in the page
//! text, cut word-aligned windows around them, merge the overlaps and join
//! the rest with ellipsis markers, then mark the term variants.
//!
//! Every function here is total: bad or missing page content degrades to the
//! placeholder preview, never to an error. One page failing must not take
//! down the rest of a result listing.

mod fold;
mod highlight;
mod locate;
mod snippet;
mod window;

pub use fold::fold;
pub use highlight::{mark_variants, wrap_ellipses};
pub use locate::{distinct_variants, find_occurrences};
pub use snippet::{assemble, ELLIPSIS, PREVIEW_UNAVAILABLE};
pub use window::{build_windows, merge_windows};

use crate::search::SearchHit;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EXTRA_WHITESPACE: Regex = Regex::new(r"\s{2,}").expect("valid regex");
}

/// Collapse every run of two or more whitespace characters into one space.
///
/// OCR text keeps layout whitespace (column gaps, line breaks) that would
/// bloat previews. All offsets downstream are computed against the
/// normalized text, never the raw page.
pub fn normalize_whitespace(text: &str) -> String {
    EXTRA_WHITESPACE.replace_all(text, " ").into_owned()
}

/// Source of raw page text, keyed by page id.
///
/// Implementations report unknown pages as `None`; the preview pipeline
/// treats that the same as an empty page.
pub trait PageContentSource {
    fn lookup_page_content(&self, page_id: i64) -> Option<String>;
}

/// One rendered preview, paired with the page it belongs to
#[derive(Debug, Clone, serde::Serialize)]
pub struct PagePreview {
    pub page_id: i64,
    pub html: String,
}

/// Render the highlighted preview for one page.
///
/// Pure in `(content, term, radius)`; returns the placeholder when the term
/// does not occur. The output carries `<mark>` and `<b><i>` markup and is
/// meant to be embedded verbatim by the rendering layer.
pub fn render_preview(content: &str, term: &str, radius: usize) -> String {
    let content = normalize_whitespace(content);
    let term_len = term.chars().count();

    let occurrences = find_occurrences(term, &content);
    let variants = distinct_variants(&occurrences, &content, term_len);

    let windows = build_windows(&content, radius, term_len, &occurrences);
    let merged = merge_windows(&windows);

    let preview = assemble(&merged, &content);
    wrap_ellipses(&mark_variants(&variants, &preview))
}

/// Render previews for a page of search results, in result order.
///
/// Each hit yields exactly one preview; pages that cannot be fetched render
/// as the placeholder.
pub fn build_previews<S>(
    source: &S,
    hits: &[SearchHit],
    term: &str,
    radius: usize,
) -> Vec<PagePreview>
where
    S: PageContentSource + ?Sized,
{
    hits.iter()
        .map(|hit| {
            let content = source.lookup_page_content(hit.page_id).unwrap_or_default();
            PagePreview {
                page_id: hit.page_id,
                html: render_preview(&content, term, radius),
            }
        })
        .collect()
}
