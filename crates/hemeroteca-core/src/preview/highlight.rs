//! Highlight markup for term variants and ellipsis markers

use super::snippet::ELLIPSIS;

/// Wrap every occurrence of each distinct variant in `<mark>` tags.
///
/// Longer variants are replaced first, so a variant can never match inside
/// markup inserted for a longer one.
pub fn mark_variants(variants: &[String], snippet: &str) -> String {
    let mut ordered: Vec<&String> = variants.iter().collect();
    ordered.sort_by_key(|variant| std::cmp::Reverse(variant.chars().count()));

    let mut marked = snippet.to_string();
    for variant in ordered {
        marked = marked.replace(variant.as_str(), &format!("<mark>{}</mark>", variant));
    }

    marked
}

/// Wrap every ellipsis marker in `<b><i>` tags.
///
/// Runs after variant marking: markers sit between windows, never inside a
/// variant's span, so the two passes touch disjoint substrings.
pub fn wrap_ellipses(snippet: &str) -> String {
    snippet.replace(ELLIPSIS, &format!("<b><i>{}</i></b>", ELLIPSIS))
}
