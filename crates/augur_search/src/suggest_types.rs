//! Types for ritual date suggestions.

use augur_base::{DateRange, PhaseSnapshot, ZodiacSign};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Points awarded (or deducted) per matched preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ScoreWeights {
    /// Date falls on the preferred planet's weekday. Default: 3.
    pub weekday: i32,
    /// Moon is in the preferred phase. Default: 2.
    pub preferred_phase: i32,
    /// Deducted when the moon is in the avoided phase. Default: 3.
    pub avoided_phase: i32,
    /// Date falls in a preferred sign's season. Default: 2.
    pub season: i32,
    /// Score given to weekday-only fallback dates. Default: 1.
    pub fallback: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            weekday: 3,
            preferred_phase: 2,
            avoided_phase: 3,
            season: 2,
            fallback: 1,
        }
    }
}

/// Configuration for [`crate::suggest_dates_with_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SuggestConfig {
    /// Maximum suggestions returned. Default: 5.
    pub count: usize,
    /// Days scanned from the start date, start included. Default: 90.
    pub horizon_days: u32,
    /// Scanning stops once `count * candidate_factor` dates have scored. Default: 3.
    pub candidate_factor: usize,
    /// Scoring weights.
    pub weights: ScoreWeights,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            count: 5,
            horizon_days: 90,
            candidate_factor: 3,
            weights: ScoreWeights::default(),
        }
    }
}

impl SuggestConfig {
    /// Default configuration returning up to `count` suggestions.
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }
}

/// One suggested date with the reasons it scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateSuggestion {
    /// UTC calendar day.
    pub date: NaiveDate,
    /// Moon phase at 00:00 UTC of `date`.
    pub phase: PhaseSnapshot,
    /// Human-readable reasons, in scoring order.
    pub reasons: Vec<String>,
    /// Total score.
    pub score: i32,
}

/// A preferred sign's next season window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonWindow {
    pub sign: ZodiacSign,
    #[serde(flatten)]
    pub range: DateRange,
}
