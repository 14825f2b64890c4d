//! In-memory catalogs loaded from JSON.

use std::collections::HashSet;

use augur_base::{Entity, Intent};
use augur_ritual::{
    Correspondence, OfferingRecord, SigilRecord, offerings_for_entities, sigils_for_entities,
};
use tracing::debug;

use crate::error::CatalogError;

/// Everything a consultation reads: intents, entities, correspondences,
/// offering records, and sigils.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub intents: Vec<Intent>,
    pub entities: Vec<Entity>,
    pub correspondences: Vec<Correspondence>,
    pub offerings: Vec<OfferingRecord>,
    pub sigils: Vec<SigilRecord>,
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

impl Catalog {
    /// Parse intent and entity arrays. Ids must be unique within each.
    pub fn from_json(intents_json: &str, entities_json: &str) -> Result<Self, CatalogError> {
        let intents: Vec<Intent> = serde_json::from_str(intents_json)?;
        let entities: Vec<Entity> = serde_json::from_str(entities_json)?;
        ensure_unique("intent", intents.iter().map(|i| i.id.as_str()))?;
        ensure_unique("entity", entities.iter().map(|e| e.id.as_str()))?;
        debug!(
            intents = intents.len(),
            entities = entities.len(),
            "catalog loaded"
        );
        Ok(Self {
            intents,
            entities,
            ..Self::default()
        })
    }

    /// Attach a correspondence table.
    pub fn with_correspondences_json(mut self, json: &str) -> Result<Self, CatalogError> {
        self.correspondences = serde_json::from_str(json)?;
        Ok(self)
    }

    /// Attach offering records. Entity ids must be unique.
    pub fn with_offerings_json(mut self, json: &str) -> Result<Self, CatalogError> {
        let offerings: Vec<OfferingRecord> = serde_json::from_str(json)?;
        ensure_unique("offering", offerings.iter().map(|o| o.entity_id.as_str()))?;
        self.offerings = offerings;
        Ok(self)
    }

    /// Attach sigil records. Entity ids must be unique.
    pub fn with_sigils_json(mut self, json: &str) -> Result<Self, CatalogError> {
        let sigils: Vec<SigilRecord> = serde_json::from_str(json)?;
        ensure_unique("sigil", sigils.iter().map(|s| s.entity_id.as_str()))?;
        self.sigils = sigils;
        Ok(self)
    }

    pub fn intent(&self, id: &str) -> Option<&Intent> {
        self.intents.iter().find(|i| i.id == id)
    }

    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Offering records for `entities`, in order; entities without one are skipped.
    pub fn offerings_for(&self, entities: &[Entity]) -> Vec<&OfferingRecord> {
        let ids: Vec<&str> = entities.iter().map(|e| e.id.as_str()).collect();
        offerings_for_entities(&self.offerings, &ids)
    }

    /// Sigils for `entities`, in order; entities without one are skipped.
    pub fn sigils_for(&self, entities: &[Entity]) -> Vec<&SigilRecord> {
        let ids: Vec<&str> = entities.iter().map(|e| e.id.as_str()).collect();
        sigils_for_entities(&self.sigils, &ids)
    }
}
