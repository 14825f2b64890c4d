//! Symbol glyphs keyed by entity.

use serde::{Deserialize, Serialize};

/// An entity's symbol with its inline SVG body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigilRecord {
    pub entity_id: String,
    pub symbol_name: String,
    #[serde(default)]
    pub symbol_description: String,
    /// SVG child elements, without the outer `<svg>` tag.
    pub svg_content: String,
    /// SVG `viewBox` attribute, e.g. "0 0 100 100".
    pub view_box: String,
}

pub fn sigil_for_entity<'a>(
    records: &'a [SigilRecord],
    entity_id: &str,
) -> Option<&'a SigilRecord> {
    records.iter().find(|r| r.entity_id == entity_id)
}

/// Sigils for each id in input order; unknown ids are skipped.
pub fn sigils_for_entities<'a, S: AsRef<str>>(
    records: &'a [SigilRecord],
    entity_ids: &[S],
) -> Vec<&'a SigilRecord> {
    entity_ids
        .iter()
        .filter_map(|id| sigil_for_entity(records, id.as_ref()))
        .collect()
}
