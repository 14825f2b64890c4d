//! Substring filters for browsing the catalogs.
//!
//! Unlike [`crate::match_query`], these are exact case-insensitive
//! substring filters that keep catalog order.

use augur_base::{Entity, Intent};

/// Tradition filter value that matches every entity.
pub const ALL_TRADITIONS: &str = "All";

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Entities whose tradition matches `tradition` and whose text matches `search`.
///
/// `tradition` of `"All"` or empty keeps every tradition; otherwise the
/// entity's tradition must contain it. `search` is matched against the
/// name, tradition, tags, and description; empty keeps everything.
pub fn filter_entities<'a>(entities: &'a [Entity], search: &str, tradition: &str) -> Vec<&'a Entity> {
    let search = search.to_lowercase();
    let tradition = tradition.to_lowercase();
    let any_tradition = tradition.is_empty() || tradition == ALL_TRADITIONS.to_lowercase();

    entities
        .iter()
        .filter(|e| any_tradition || contains_ci(&e.tradition, &tradition))
        .filter(|e| {
            search.is_empty()
                || contains_ci(&e.name, &search)
                || contains_ci(&e.tradition, &search)
                || e.tags.iter().any(|t| contains_ci(t, &search))
                || contains_ci(&e.description, &search)
        })
        .collect()
}

/// Intents whose label, tags, or description contain `search`.
pub fn filter_intents<'a>(intents: &'a [Intent], search: &str) -> Vec<&'a Intent> {
    let search = search.to_lowercase();
    intents
        .iter()
        .filter(|i| {
            search.is_empty()
                || contains_ci(&i.label, &search)
                || i.tags.iter().any(|t| contains_ci(t, &search))
                || i.description.as_deref().is_some_and(|d| contains_ci(d, &search))
        })
        .collect()
}
