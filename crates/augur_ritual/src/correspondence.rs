//! Correspondence records and lookup by matched intent or entity.

use augur_base::{Entity, Intent};
use serde::{Deserialize, Serialize};

/// Symbolic correspondences for one intent or entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Correspondence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub stones: Vec<String>,
    #[serde(default)]
    pub herbs: Vec<String>,
    #[serde(default)]
    pub metals: Vec<String>,
    #[serde(default)]
    pub scents: Vec<String>,
    /// Free-text timing advice, e.g. "Full moon, midnight or dawn".
    #[serde(default)]
    pub timing: String,
    #[serde(default)]
    pub element: String,
    #[serde(default)]
    pub sphere: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zodiac: Option<String>,
    #[serde(default)]
    pub tarot_cards: Vec<String>,
    #[serde(default)]
    pub rune_associations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numerology: Option<u32>,

    // Crowley's 777 tables.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub magical_weapon: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub magical_powers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divine_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub animals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alchemical_process: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_part: Option<String>,

    // Folk-craft tables.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flowers: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub woods: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub essential_oils: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moon_phase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candle_color: Option<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Universal correspondence used when nothing in the table matches.
pub fn default_correspondence() -> Correspondence {
    Correspondence {
        colors: strings(&["white", "gold", "purple"]),
        stones: strings(&["clear quartz", "amethyst"]),
        herbs: strings(&["lavender", "rosemary"]),
        metals: strings(&["silver", "gold"]),
        scents: strings(&["frankincense", "sandalwood"]),
        timing: "Full moon, midnight or dawn".into(),
        element: "Spirit".into(),
        sphere: "Universal".into(),
        planet: Some("Sun".into()),
        zodiac: Some("Universal".into()),
        tarot_cards: strings(&["The World", "The Magician"]),
        rune_associations: strings(&["Dagaz", "Sowilo"]),
        numerology: Some(7),
        ..Correspondence::default()
    }
}

/// Find the correspondence for a match.
///
/// The intent's record wins; otherwise the first entity (in match order)
/// with a record; otherwise [`default_correspondence`].
pub fn find_correspondence(
    table: &[Correspondence],
    intent: Option<&Intent>,
    entities: &[Entity],
) -> Correspondence {
    let by_intent = intent.and_then(|i| {
        table
            .iter()
            .find(|c| c.intent_id.as_deref() == Some(i.id.as_str()))
    });
    let by_entity = || {
        entities.iter().find_map(|e| {
            table
                .iter()
                .find(|c| c.entity_id.as_deref() == Some(e.id.as_str()))
        })
    };
    by_intent
        .or_else(by_entity)
        .cloned()
        .unwrap_or_else(default_correspondence)
}
