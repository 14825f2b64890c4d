//! One-call consultation: match, normalize, and suggest dates.

use augur_match::match_query;
use augur_ritual::{CorrespondenceResult, normalize_result};
use augur_search::{DateSuggestion, SuggestConfig, suggest_dates};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;

/// Full answer to one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub result: CorrespondenceResult,
    /// Match score, in [0, 1].
    pub score: f64,
    /// Empty unless the matched intent carries timing hints.
    pub suggestions: Vec<DateSuggestion>,
}

/// Match `query` against the catalog, build its correspondence result, and
/// suggest dates from `start` when the matched intent has timing hints.
pub fn consult(
    catalog: &Catalog,
    query: &str,
    include_pop_culture: bool,
    start: NaiveDate,
) -> Reading {
    let matched = match_query(
        query,
        &catalog.intents,
        &catalog.entities,
        include_pop_culture,
    );
    let result = normalize_result(&matched, query, &catalog.correspondences);

    let suggestions = match matched.intent.as_ref().and_then(|i| i.timing_hints.as_ref()) {
        Some(hints) if !hints.is_empty() => {
            suggest_dates(hints, start, SuggestConfig::default().count)
        }
        _ => Vec::new(),
    };
    debug!(
        score = matched.score,
        suggestions = suggestions.len(),
        "consultation complete"
    );

    Reading {
        result,
        score: matched.score,
        suggestions,
    }
}
