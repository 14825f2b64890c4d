//! Ritual timing search: ranked date suggestions and season windows.
//!
//! This crate provides:
//! - Scoring of calendar days against planetary-day, moon-phase, and
//!   sun-sign-season preferences
//! - Ranked, deduplicated suggestions over a bounded horizon, with
//!   weekday-only fallback
//! - The next season window for each preferred sign
//!
//! All scanning is over UTC calendar days; no ephemeris is consulted.

pub mod season_window;
pub mod suggest;
pub mod suggest_types;

pub use season_window::upcoming_season_windows;
pub use suggest::{score_date, suggest_dates, suggest_dates_with_config};
pub use suggest_types::{DateSuggestion, ScoreWeights, SeasonWindow, SuggestConfig};
