//! Convenience facade for augur.
//!
//! Loads catalogs from JSON and answers a query in one call: the best
//! matching intent and entities, their correspondences, a ritual outline,
//! and ranked dates when the intent carries timing hints.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use augur_rs::*;
//!
//! let catalog = Catalog::from_json(INTENTS_JSON, ENTITIES_JSON)?
//!     .with_correspondences_json(CORRESPONDENCES_JSON)?;
//! let start = chrono::Utc::now().date_naive();
//! let reading = consult(&catalog, "love", false, start);
//! for s in &reading.suggestions {
//!     println!("{} {:?}", s.date, s.reasons);
//! }
//! ```

pub mod catalog;
pub mod consult;
pub mod error;

// Primary re-exports; users should only need `use augur_rs::*`
pub use catalog::Catalog;
pub use consult::{Reading, consult};
pub use error::CatalogError;

pub use augur_base::{
    ALL_MOON_PHASES, ALL_PLANETS, ALL_SIGNS, AugurError, DateRange, Entity, EntityKind, Intent,
    MoonPhase, PLANETARY_WEEKDAYS, PhaseSnapshot, Planet, PlanetaryWeekday,
    REFERENCE_NEW_MOON_UNIX_MS, SYNODIC_PERIOD_DAYS, TimingHints, ZodiacSign, moon_age_days,
    phase_of, phase_on, planetary_weekday, season_range,
};
pub use augur_match::{
    ALL_TRADITIONS, MatchConfig, MatchResult, entity_score, filter_entities, filter_intents,
    intent_score, levenshtein, match_query, match_query_with_config, similarity,
    token_similarity,
};
pub use augur_ritual::{
    Correspondence, CorrespondenceResult, DISCLAIMER, OfferingRecord, RitualStep, STEP_PHASES,
    SigilRecord, build_ritual_outline, default_correspondence, find_correspondence,
    normalize_result, offerings_for_entities, offerings_for_entity, sigil_for_entity,
    sigils_for_entities,
};
pub use augur_search::{
    DateSuggestion, ScoreWeights, SeasonWindow, SuggestConfig, score_date, suggest_dates,
    suggest_dates_with_config, upcoming_season_windows,
};
