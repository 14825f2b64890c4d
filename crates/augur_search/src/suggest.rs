//! Ritual date suggestions.
//!
//! Scans a fixed horizon of UTC calendar days from a start date and scores
//! each day against an intent's timing hints:
//!
//! | match                          | points |
//! |--------------------------------|--------|
//! | preferred planet's weekday     | +3     |
//! | preferred moon phase           | +2     |
//! | avoided moon phase             | -3     |
//! | inside a preferred sign season | +2     |
//!
//! Days scoring zero or less are dropped. Survivors are ranked by score,
//! then date. If too few survive and a planetary day is set, remaining
//! slots are filled with plain weekday matches.

use std::collections::HashSet;

use augur_base::{Planet, TimingHints, phase_on};
use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

use crate::suggest_types::{DateSuggestion, ScoreWeights, SuggestConfig};

/// Weekday index of `date`, 0 = Sunday.
fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Calendar days `start .. start + horizon_days`.
fn horizon(start: NaiveDate, horizon_days: u32) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take(horizon_days as usize)
}

/// Score a single day against timing hints.
///
/// Returns `None` when the day scores zero or less.
pub fn score_date(
    hints: &TimingHints,
    date: NaiveDate,
    weights: &ScoreWeights,
) -> Option<DateSuggestion> {
    let mut score = 0;
    let mut reasons = Vec::new();

    if let Some(planet) = hints.planetary_day {
        let weekday = planet.weekday();
        if weekday_index(date) == weekday.day {
            reasons.push(format!("{}'s day ({})", planet.name(), weekday.name));
            score += weights.weekday;
        }
    }

    let phase = phase_on(date);
    if hints.preferred_moon_phase == Some(phase.phase) {
        reasons.push(format!("{} (preferred phase)", phase.phase.name()));
        score += weights.preferred_phase;
    }
    if hints.avoid_moon_phase == Some(phase.phase) {
        score -= weights.avoided_phase;
    }

    // Windows anchor on the day's own year; first listed sign wins.
    let in_season = hints
        .preferred_sun_signs
        .iter()
        .find(|sign| sign.season(date.year()).is_some_and(|r| r.contains(date)));
    if let Some(sign) = in_season {
        reasons.push(format!("{} season", sign.name()));
        score += weights.season;
    }

    trace!(%date, score, "scored date");
    (score > 0).then_some(DateSuggestion {
        date,
        phase,
        reasons,
        score,
    })
}

/// Suggest up to `count` dates from `start` with the default configuration.
pub fn suggest_dates(hints: &TimingHints, start: NaiveDate, count: usize) -> Vec<DateSuggestion> {
    suggest_dates_with_config(hints, start, &SuggestConfig::with_count(count))
}

/// Suggest ritual dates, best first.
///
/// Returns at most `config.count` suggestions with unique dates, ordered by
/// descending score then ascending date, followed by any weekday-only
/// fallback dates in calendar order. Hints with no preferences produce an
/// empty list.
pub fn suggest_dates_with_config(
    hints: &TimingHints,
    start: NaiveDate,
    config: &SuggestConfig,
) -> Vec<DateSuggestion> {
    let count = config.count;
    let candidate_cap = count.saturating_mul(config.candidate_factor);

    let mut scored: Vec<DateSuggestion> = Vec::new();
    for date in horizon(start, config.horizon_days) {
        if scored.len() >= candidate_cap {
            break;
        }
        if let Some(suggestion) = score_date(hints, date, &config.weights) {
            scored.push(suggestion);
        }
    }
    let scored_count = scored.len();

    scored.sort_by(|a, b| b.score.cmp(&a.score).then(a.date.cmp(&b.date)));

    let mut seen: HashSet<NaiveDate> = HashSet::new();
    let mut top: Vec<DateSuggestion> = Vec::with_capacity(count);
    for suggestion in scored {
        if top.len() == count {
            break;
        }
        if seen.insert(suggestion.date) {
            top.push(suggestion);
        }
    }

    let ranked = top.len();
    if ranked < count {
        if let Some(planet) = hints.planetary_day {
            fill_weekday_fallback(&mut top, &mut seen, planet, start, config);
        }
    }

    debug!(
        %start,
        scored = scored_count,
        returned = top.len(),
        fallback = top.len() - ranked,
        "suggested ritual dates"
    );
    top
}

/// Append unseen days on `planet`'s weekday until `config.count` is reached.
fn fill_weekday_fallback(
    top: &mut Vec<DateSuggestion>,
    seen: &mut HashSet<NaiveDate>,
    planet: Planet,
    start: NaiveDate,
    config: &SuggestConfig,
) {
    let weekday = planet.weekday();
    for date in horizon(start, config.horizon_days) {
        if top.len() >= config.count {
            break;
        }
        if weekday_index(date) == weekday.day && seen.insert(date) {
            top.push(DateSuggestion {
                date,
                phase: phase_on(date),
                reasons: vec![format!("{} (planetary day)", weekday.name)],
                score: config.weights.fallback,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use augur_base::{MoonPhase, ZodiacSign};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekday_index_sunday_zero() {
        assert_eq!(weekday_index(ymd(2024, 1, 7)), 0);
        assert_eq!(weekday_index(ymd(2024, 1, 1)), 1);
        assert_eq!(weekday_index(ymd(2024, 1, 6)), 6);
    }

    #[test]
    fn horizon_length() {
        let days: Vec<NaiveDate> = horizon(ymd(2024, 1, 1), 90).collect();
        assert_eq!(days.len(), 90);
        assert_eq!(days[0], ymd(2024, 1, 1));
        assert_eq!(days[89], ymd(2024, 3, 30));
    }

    #[test]
    fn score_weekday_only() {
        let hints = TimingHints {
            planetary_day: Some(Planet::Venus),
            ..TimingHints::default()
        };
        let weights = ScoreWeights::default();
        let friday = score_date(&hints, ymd(2024, 1, 5), &weights).unwrap();
        assert_eq!(friday.score, 3);
        assert_eq!(friday.reasons, ["Venus's day (Friday)"]);
        assert!(score_date(&hints, ymd(2024, 1, 6), &weights).is_none());
    }

    #[test]
    fn avoided_phase_cancels_weekday() {
        // 2024-01-05 is a Friday in the Last Quarter.
        let hints = TimingHints {
            planetary_day: Some(Planet::Venus),
            avoid_moon_phase: Some(MoonPhase::LastQuarter),
            ..TimingHints::default()
        };
        assert!(score_date(&hints, ymd(2024, 1, 5), &ScoreWeights::default()).is_none());
    }

    #[test]
    fn first_listed_sign_wins() {
        let hints = TimingHints {
            preferred_sun_signs: vec![ZodiacSign::Leo, ZodiacSign::Aries],
            ..TimingHints::default()
        };
        let s = score_date(&hints, ymd(2024, 4, 1), &ScoreWeights::default()).unwrap();
        assert_eq!(s.reasons, ["Aries season"]);
        assert_eq!(s.score, 2);
    }

    #[test]
    fn capricorn_uses_the_days_own_year() {
        // Early January belongs to the window anchored on the previous year,
        // which is never consulted.
        let hints = TimingHints {
            preferred_sun_signs: vec![ZodiacSign::Capricorn],
            ..TimingHints::default()
        };
        let weights = ScoreWeights::default();
        assert!(score_date(&hints, ymd(2024, 1, 5), &weights).is_none());
        assert!(score_date(&hints, ymd(2024, 12, 25), &weights).is_some());
    }

    #[test]
    fn zero_count() {
        let hints = TimingHints {
            planetary_day: Some(Planet::Sun),
            ..TimingHints::default()
        };
        assert!(suggest_dates(&hints, ymd(2024, 1, 1), 0).is_empty());
    }

    #[test]
    fn no_hints_no_suggestions() {
        assert!(suggest_dates(&TimingHints::default(), ymd(2024, 1, 1), 5).is_empty());
    }
}
