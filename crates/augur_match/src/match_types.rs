//! Configuration and result types for query matching.

use augur_base::{Entity, Intent};
use serde::{Deserialize, Serialize};

/// Thresholds and weights used by [`crate::match_query_with_config`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct MatchConfig {
    /// An intent is returned only if its score exceeds this. Default: 0.3.
    pub intent_threshold: f64,
    /// An entity is a candidate only if its score exceeds this. Default: 0.35.
    pub entity_threshold: f64,
    /// Maximum number of entities returned. Default: 3.
    pub max_entities: usize,
    /// Multiplier on intent description similarity. Default: 0.5.
    pub description_weight: f64,
    /// Multiplier on entity tradition similarity. Default: 0.6.
    pub tradition_weight: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            intent_threshold: 0.3,
            entity_threshold: 0.35,
            max_entities: 3,
            description_weight: 0.5,
            tradition_weight: 0.6,
        }
    }
}

/// Outcome of matching one query against the catalogs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Best intent or entity score; 0.0 when both catalogs are empty.
    pub score: f64,
    /// Best intent, if it cleared the intent threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    /// Best entities, highest score first.
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl MatchResult {
    /// True when neither an intent nor any entity was selected.
    pub fn is_empty(&self) -> bool {
        self.intent.is_none() && self.entities.is_empty()
    }

    /// True when any selected entity belongs to a closed or initiatory tradition.
    pub fn has_closed_tradition(&self) -> bool {
        self.entities.iter().any(|e| e.is_closed)
    }
}
