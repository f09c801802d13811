//! Terminal output formatter

use hemeroteca_core::{PagePreview, PagedSearch};

pub fn format_results(term: &str, search: &PagedSearch, previews: &[PagePreview]) -> String {
    let results = &search.results;

    if results.total == 0 {
        return format!("no results found for \"{}\"\n", term);
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{} pages match \"{}\" (page {}/{})\n",
        results.total, term, results.page, results.pages
    ));

    for count in &search.periodicals {
        out.push_str(&format!("  {} ({})\n", count.name, count.hits));
    }
    out.push('\n');

    for (hit, preview) in results.items.iter().zip(previews) {
        out.push_str(&format!(
            "{} · {} · no. {} · p. {}  [#{}]\n",
            hit.periodical, hit.year, hit.issue, hit.page_no, hit.page_id
        ));
        out.push_str(&format!("    {}\n\n", preview.html));
    }

    out
}
