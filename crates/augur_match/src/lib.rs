//! Approximate text matching for intent and entity catalogs.
//!
//! This crate provides:
//! - Normalized string similarity (containment bonus, Levenshtein fallback)
//! - Query matching that selects one intent and up to three entities
//! - Substring filters for browsing the catalogs
//!
//! Catalogs are plain slices owned by the caller; nothing here keeps state
//! between calls.

pub mod library;
pub mod match_types;
pub mod matcher;
pub mod similarity;

pub use library::{ALL_TRADITIONS, filter_entities, filter_intents};
pub use match_types::{MatchConfig, MatchResult};
pub use matcher::{entity_score, intent_score, match_query, match_query_with_config};
pub use similarity::{levenshtein, similarity, token_similarity};
