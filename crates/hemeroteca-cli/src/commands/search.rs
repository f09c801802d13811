//! Search command

use crate::app::{OutputFormat, SearchArgs};
use crate::output;
use anyhow::Result;
use hemeroteca_core::{
    build_previews, format_search_term, fts_match_expression, Config, Database,
};

pub fn run(args: SearchArgs, db: &Database, config: &Config, format: OutputFormat) -> Result<()> {
    let raw = args.term.join(" ");

    let term = format_search_term(&raw, " ", &config.accepted_special_characters);
    tracing::info!(raw, term, "formatted search term");
    config.check_term_length(&term)?;

    let expr = fts_match_expression(&format_search_term(
        &term,
        "+",
        &config.accepted_special_characters,
    ));

    let search = db.paged_search(
        &expr,
        args.periodical.as_deref(),
        args.page,
        config.results_per_page,
    )?;
    let previews = build_previews(db, &search.results.items, &term, config.preview_radius);

    print!(
        "{}",
        output::format_search_results(&term, &search, &previews, format)?
    );
    Ok(())
}
