//! JSON output formatter

use anyhow::Result;
use hemeroteca_core::{PagePreview, PagedSearch, SearchHit};
use serde::Serialize;

#[derive(Serialize)]
struct JsonResult<'a> {
    #[serde(flatten)]
    hit: &'a SearchHit,
    preview: &'a str,
}

#[derive(Serialize)]
struct JsonResponse<'a> {
    term: &'a str,
    page: usize,
    pages: usize,
    total: usize,
    periodicals: &'a [hemeroteca_core::PeriodicalCount],
    results: Vec<JsonResult<'a>>,
}

pub fn format_results(
    term: &str,
    search: &PagedSearch,
    previews: &[PagePreview],
) -> Result<String> {
    let results = search
        .results
        .items
        .iter()
        .zip(previews)
        .map(|(hit, preview)| JsonResult {
            hit,
            preview: &preview.html,
        })
        .collect();

    let response = JsonResponse {
        term,
        page: search.results.page,
        pages: search.results.pages,
        total: search.results.total,
        periodicals: &search.periodicals,
        results,
    };

    Ok(format!("{}\n", serde_json::to_string_pretty(&response)?))
}
