//! Resolve a free-text query to the best intent and entities.
//!
//! Every record is scored as the maximum of several field similarities;
//! there is no weighting across fields beyond the description and
//! tradition multipliers in [`MatchConfig`].

use augur_base::{Entity, Intent};
use tracing::{debug, trace};

use crate::match_types::{MatchConfig, MatchResult};
use crate::similarity::{similarity, token_similarity};

/// Score one intent against a normalized query.
pub fn intent_score(query: &str, intent: &Intent, config: &MatchConfig) -> f64 {
    let label = similarity(query, &intent.label);
    let id = similarity(query, &intent.id.replace('_', " "));
    let tags = token_similarity(query, &intent.tags);
    let description = intent
        .description
        .as_deref()
        .map_or(0.0, |d| similarity(query, d) * config.description_weight);
    label.max(id).max(tags).max(description)
}

/// Score one entity against a normalized query.
pub fn entity_score(query: &str, entity: &Entity, config: &MatchConfig) -> f64 {
    let name = similarity(query, &entity.name);
    let tags = token_similarity(query, &entity.tags);
    let tradition = similarity(query, &entity.tradition) * config.tradition_weight;
    name.max(tags).max(tradition)
}

/// Match a query with the default [`MatchConfig`].
pub fn match_query(
    query: &str,
    intents: &[Intent],
    entities: &[Entity],
    include_pop_culture: bool,
) -> MatchResult {
    match_query_with_config(
        query,
        intents,
        entities,
        include_pop_culture,
        &MatchConfig::default(),
    )
}

/// Match a query against intent and entity catalogs.
///
/// The highest-scoring intent wins (first in catalog order on ties) and is
/// kept only above `intent_threshold`. Entities above `entity_threshold`
/// are ranked by score, ties kept in catalog order, and truncated to
/// `max_entities`. Pop-culture entities are skipped unless opted in.
pub fn match_query_with_config(
    query: &str,
    intents: &[Intent],
    entities: &[Entity],
    include_pop_culture: bool,
    config: &MatchConfig,
) -> MatchResult {
    let q = query.trim().to_lowercase();

    let mut best_intent: Option<&Intent> = None;
    let mut best_intent_score = 0.0_f64;
    for intent in intents {
        let score = intent_score(&q, intent, config);
        trace!(intent = %intent.id, score, "scored intent");
        if score > best_intent_score {
            best_intent_score = score;
            best_intent = Some(intent);
        }
    }

    let mut candidates: Vec<(&Entity, f64)> = entities
        .iter()
        .filter(|e| include_pop_culture || !e.is_pop_culture)
        .filter_map(|e| {
            let score = entity_score(&q, e, config);
            trace!(entity = %e.id, score, "scored entity");
            (score > config.entity_threshold).then_some((e, score))
        })
        .collect();
    // Stable sort keeps catalog order among equal scores.
    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

    let best_entity_score = candidates.first().map_or(0.0, |(_, s)| *s);
    let intent = if best_intent_score > config.intent_threshold {
        best_intent.cloned()
    } else {
        None
    };
    let entities: Vec<Entity> = candidates
        .into_iter()
        .take(config.max_entities)
        .map(|(e, _)| e.clone())
        .collect();

    let result = MatchResult {
        score: best_intent_score.max(best_entity_score),
        intent,
        entities,
    };
    debug!(
        query = %q,
        intent = result.intent.as_ref().map(|i| i.id.as_str()),
        entities = result.entities.len(),
        score = result.score,
        "matched query"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use augur_base::EntityKind;

    fn intent(id: &str, label: &str, tags: &[&str]) -> Intent {
        Intent {
            id: id.into(),
            label: label.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            description: None,
            tradition: None,
            timing_hints: None,
        }
    }

    fn entity(id: &str, name: &str, tradition: &str, tags: &[&str]) -> Entity {
        Entity {
            id: id.into(),
            name: name.into(),
            tradition: tradition.into(),
            kind: EntityKind::Deity,
            description: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            is_pop_culture: false,
            is_closed: false,
            sphere: None,
        }
    }

    #[test]
    fn empty_catalogs() {
        let result = match_query("love", &[], &[], true);
        assert_eq!(result, MatchResult::default());
        assert!(result.is_empty());
    }

    #[test]
    fn empty_query() {
        let intents = [intent("love", "Love", &["love"])];
        let result = match_query("", &intents, &[], false);
        assert_eq!(result.score, 0.0);
        assert!(result.intent.is_none());
    }

    #[test]
    fn id_underscores_become_spaces() {
        let intents = [intent("inner_peace", "Serenity", &[])];
        let result = match_query("inner peace", &intents, &[], false);
        assert_eq!(result.score, 1.0);
        assert_eq!(result.intent.unwrap().id, "inner_peace");
    }

    #[test]
    fn first_intent_wins_ties() {
        let intents = [intent("a", "Moon", &[]), intent("b", "Moon", &[])];
        let result = match_query("moon", &intents, &[], false);
        assert_eq!(result.intent.unwrap().id, "a");
    }

    #[test]
    fn weak_intent_dropped_but_scored() {
        // Label containment: 2/11 * 0.9 + 0.1 = 0.2636, below the 0.3 threshold.
        let intents = [intent("x", "abcdefghijk", &[])];
        let result = match_query("ab", &intents, &[], false);
        assert!(result.intent.is_none());
        assert!((result.score - (2.0 / 11.0 * 0.9 + 0.1)).abs() < 1e-12);
    }

    #[test]
    fn entities_capped_and_ordered() {
        let entities = [
            entity("a", "Nut", "Egyptian", &["sky"]),
            entity("b", "Sky Father", "Greek", &["sky"]),
            entity("c", "Sky", "Norse", &[]),
            entity("d", "Skyla", "Celtic", &[]),
        ];
        let result = match_query("sky", &[], &entities, false);
        let ids: Vec<&str> = result.entities.iter().map(|e| e.id.as_str()).collect();
        // a, b, c all score 1.0 (tag or name); d scores 3/5*0.9+0.1 = 0.64.
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn tradition_is_discounted() {
        let entities = [entity("zeus", "Zeus", "Greek", &[])];
        let result = match_query("greek", &[], &entities, false);
        assert_eq!(result.entities.len(), 1);
        assert!((result.score - 0.6).abs() < 1e-12);
    }

    #[test]
    fn custom_config_limits() {
        let entities = [
            entity("a", "Sky", "X", &[]),
            entity("b", "Sky", "Y", &[]),
        ];
        let config = MatchConfig {
            max_entities: 1,
            ..MatchConfig::default()
        };
        let result = match_query_with_config("sky", &[], &entities, false, &config);
        assert_eq!(result.entities.len(), 1);
        assert_eq!(result.entities[0].id, "a");
    }

    #[test]
    fn closed_tradition_flag() {
        let mut e = entity("oshun", "Oshun", "Ifá/Yorùbá", &["love"]);
        e.is_closed = true;
        let result = match_query("oshun", &[], &[e], false);
        assert!(result.has_closed_tradition());
    }
}
