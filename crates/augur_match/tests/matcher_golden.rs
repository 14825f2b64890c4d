//! Integration tests for query matching against a small fixture catalog.

use augur_base::{Entity, Intent};
use augur_match::{match_query, similarity};

const INTENTS_JSON: &str = r#"[
  { "id": "love", "label": "Love & Romance",
    "tags": ["love", "romance", "relationship", "heart"],
    "description": "Attracting love", "tradition": "universal" },
  { "id": "protection", "label": "Protection",
    "tags": ["protection", "shield", "ward"],
    "description": "Protection working", "tradition": "universal" },
  { "id": "wisdom", "label": "Wisdom & Knowledge",
    "tags": ["wisdom", "knowledge", "intelligence"],
    "description": "Gaining wisdom", "tradition": "universal" }
]"#;

const ENTITIES_JSON: &str = r#"[
  { "id": "aphrodite", "name": "Aphrodite", "tradition": "Greek", "type": "deity",
    "description": "Goddess of love", "tags": ["love", "beauty", "Venus"], "sphere": "Venus" },
  { "id": "hermes", "name": "Hermes", "tradition": "Greek", "type": "deity",
    "description": "Messenger god", "tags": ["communication", "travel", "Mercury"],
    "sphere": "Mercury" },
  { "id": "batman_archetype", "name": "The Dark Knight Archetype", "tradition": "Pop Culture",
    "type": "pop-culture", "description": "Pop culture archetype",
    "tags": ["protection", "justice"], "isPopCulture": true }
]"#;

fn catalog() -> (Vec<Intent>, Vec<Entity>) {
    (
        serde_json::from_str(INTENTS_JSON).unwrap(),
        serde_json::from_str(ENTITIES_JSON).unwrap(),
    )
}

fn entity_ids(entities: &[Entity]) -> Vec<&str> {
    entities.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn similarity_properties() {
    assert_eq!(similarity("love", "love"), 1.0);
    assert_eq!(similarity("", "love"), 0.0);
    assert_eq!(similarity("love", ""), 0.0);
    assert!(similarity("love", "loves") > 0.7);
    assert!(similarity("love", "xyz") < 0.5);
    assert!(similarity("healing", "heal") > 0.5);
    assert_eq!(similarity("LOVE", "love"), 1.0);
}

#[test]
fn love_matches_love_intent() {
    let (intents, entities) = catalog();
    let result = match_query("love", &intents, &entities, false);
    assert_eq!(result.intent.as_ref().unwrap().id, "love");
    assert!(result.score > 0.5);
    assert_eq!(entity_ids(&result.entities), ["aphrodite"]);
}

#[test]
fn entity_by_name() {
    let (intents, entities) = catalog();
    let result = match_query("Aphrodite", &intents, &entities, false);
    assert!(result.entities.iter().any(|e| e.id == "aphrodite"));
    // Best intent scores 0.222, below the acceptance threshold.
    assert!(result.intent.is_none());
    assert_eq!(result.score, 1.0);
}

#[test]
fn intent_by_tag() {
    let (intents, entities) = catalog();
    let result = match_query("romance", &intents, &entities, false);
    assert_eq!(result.intent.unwrap().id, "love");
    assert!(result.entities.is_empty());
}

#[test]
fn pop_culture_excluded_without_opt_in() {
    let (intents, entities) = catalog();
    let result = match_query("batman protection", &intents, &entities, false);
    assert!(result.entities.iter().all(|e| !e.is_pop_culture));
    assert_eq!(result.intent.unwrap().id, "protection");
    // "protection" vs the "communication" tag: 8 edits over 13 chars.
    assert_eq!(entity_ids(&result.entities), ["hermes"]);
}

#[test]
fn pop_culture_included_with_opt_in() {
    let (intents, entities) = catalog();
    let result = match_query("batman protection", &intents, &entities, true);
    assert_eq!(entity_ids(&result.entities), ["batman_archetype", "hermes"]);
}

#[test]
fn nonsense_query() {
    let (intents, entities) = catalog();
    let result = match_query("zzzzxxx", &intents, &entities, false);
    assert!(result.entities.is_empty());
    assert!(result.intent.is_none());
    assert_eq!(result.score, 0.0);
}

#[test]
fn tradition_query_ranks_in_catalog_order() {
    let (intents, entities) = catalog();
    let result = match_query("greek", &intents, &entities, false);
    assert_eq!(entity_ids(&result.entities), ["aphrodite", "hermes"]);
    assert!((result.score - 0.6).abs() < 1e-12);
    assert!(result.intent.is_none());
}

#[test]
fn partial_word_matches_tag() {
    let (intents, entities) = catalog();
    let result = match_query("protect", &intents, &entities, true);
    assert_eq!(result.intent.unwrap().id, "protection");
    // 7/10 * 0.9 + 0.1
    assert!((result.score - 0.73).abs() < 1e-12);
    assert_eq!(entity_ids(&result.entities), ["batman_archetype"]);
}

#[test]
fn repeated_calls_agree() {
    let (intents, entities) = catalog();
    let a = match_query("hermes travel", &intents, &entities, false);
    let b = match_query("hermes travel", &intents, &entities, false);
    assert_eq!(a, b);
    assert_eq!(entity_ids(&a.entities), ["hermes"]);
}
