//! Shape a match into the full correspondence result.

use augur_base::{Entity, Intent};
use augur_match::MatchResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::correspondence::{Correspondence, find_correspondence};
use crate::outline::{RitualStep, build_ritual_outline};

/// Attached to every result.
pub const DISCLAIMER: &str = "This tool offers symbolic inspiration for personal reflection. \
No outcomes are guaranteed. Always approach spiritual practices with respect for their cultural origins.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrespondenceResult {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_intent: Option<Intent>,
    pub matched_entities: Vec<Entity>,
    pub correspondences: Correspondence,
    pub ritual_outline: Vec<RitualStep>,
    pub disclaimer: String,
}

/// Look up correspondences for `matched`, build the outline, and attach the
/// disclaimer. `query` is echoed back untouched.
pub fn normalize_result(
    matched: &MatchResult,
    query: &str,
    table: &[Correspondence],
) -> CorrespondenceResult {
    let correspondence = find_correspondence(table, matched.intent.as_ref(), &matched.entities);
    debug!(
        intent = correspondence.intent_id.as_deref(),
        entity = correspondence.entity_id.as_deref(),
        "correspondence selected"
    );
    let ritual_outline =
        build_ritual_outline(&correspondence, matched.intent.as_ref(), &matched.entities);

    CorrespondenceResult {
        query: query.to_string(),
        matched_intent: matched.intent.clone(),
        matched_entities: matched.entities.clone(),
        correspondences: correspondence,
        ritual_outline,
        disclaimer: DISCLAIMER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correspondence::default_correspondence;

    #[test]
    fn empty_match_gets_default() {
        let result = normalize_result(&MatchResult::default(), "  zzzz ", &[]);
        assert_eq!(result.query, "  zzzz ");
        assert!(result.matched_intent.is_none());
        assert!(result.matched_entities.is_empty());
        assert_eq!(result.correspondences, default_correspondence());
        assert_eq!(result.ritual_outline.len(), 7);
        assert_eq!(result.disclaimer, DISCLAIMER);
    }

    #[test]
    fn disclaimer_wording() {
        assert!(DISCLAIMER.contains("symbolic inspiration"));
        assert!(DISCLAIMER.contains("No outcomes are guaranteed"));
    }

    #[test]
    fn serializes_camel_case() {
        let result = normalize_result(&MatchResult::default(), "q", &[]);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("ritualOutline").is_some());
        assert!(json.get("matchedEntities").is_some());
        assert!(json.get("matchedIntent").is_none());
    }
}
