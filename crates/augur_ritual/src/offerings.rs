//! Traditional offering records keyed by entity.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferingRecord {
    pub entity_id: String,
    pub tradition: String,
    #[serde(default)]
    pub common_offerings: Vec<String>,
    #[serde(default)]
    pub symbolism: Vec<String>,
    #[serde(default)]
    pub ritual_objects: Vec<String>,
    #[serde(default)]
    pub cautions: Vec<String>,
}

pub fn offerings_for_entity<'a>(
    records: &'a [OfferingRecord],
    entity_id: &str,
) -> Option<&'a OfferingRecord> {
    records.iter().find(|r| r.entity_id == entity_id)
}

/// Records for each id in input order; unknown ids are skipped.
pub fn offerings_for_entities<'a, S: AsRef<str>>(
    records: &'a [OfferingRecord],
    entity_ids: &[S],
) -> Vec<&'a OfferingRecord> {
    entity_ids
        .iter()
        .filter_map(|id| offerings_for_entity(records, id.as_ref()))
        .collect()
}
