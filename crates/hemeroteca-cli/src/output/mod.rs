//! Output formatting

mod json;
mod terminal;

use crate::app::OutputFormat;
use anyhow::Result;
use hemeroteca_core::{PagePreview, PagedSearch};

pub fn format_search_results(
    term: &str,
    search: &PagedSearch,
    previews: &[PagePreview],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_results(term, search, previews),
        OutputFormat::Cli => Ok(terminal::format_results(term, search, previews)),
    }
}
