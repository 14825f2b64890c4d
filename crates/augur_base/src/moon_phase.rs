//! Offline moon-phase estimation from a mean synodic cycle.
//!
//! The Moon's age is the time elapsed since a fixed reference new moon,
//! reduced modulo the mean synodic month. Phase names come from fixed
//! day-count thresholds and illumination from a cosine curve. This is a
//! closed-form approximation, not an ephemeris: it can be off by a day
//! around the true phase instants.

use std::f64::consts::PI;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AugurError;

/// Mean synodic month in days.
pub const SYNODIC_PERIOD_DAYS: f64 = 29.530_588_67;

/// Reference new moon, 2000-01-06T18:14:00Z, as Unix milliseconds.
pub const REFERENCE_NEW_MOON_UNIX_MS: i64 = 947_182_440_000;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Upper age bound (exclusive, days) of each named phase, in cycle order.
/// Ages at or past the last bound fold back to New Moon.
const PHASE_AGE_LIMITS: [(f64, MoonPhase); 8] = [
    (1.85, MoonPhase::NewMoon),
    (7.38, MoonPhase::WaxingCrescent),
    (9.22, MoonPhase::FirstQuarter),
    (14.77, MoonPhase::WaxingGibbous),
    (16.61, MoonPhase::FullMoon),
    (22.15, MoonPhase::WaningGibbous),
    (23.99, MoonPhase::LastQuarter),
    (29.53, MoonPhase::WaningCrescent),
];

/// The eight canonical moon phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "Waxing Crescent")]
    WaxingCrescent,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
    #[serde(rename = "Waning Crescent")]
    WaningCrescent,
}

/// All 8 phases in cycle order, starting at New Moon.
pub const ALL_MOON_PHASES: [MoonPhase; 8] = [
    MoonPhase::NewMoon,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
    MoonPhase::FullMoon,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::WaningCrescent,
];

impl MoonPhase {
    /// Display name, e.g. "Waxing Crescent".
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Moon glyph for the phase.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::NewMoon => "\u{1F311}",
            Self::WaxingCrescent => "\u{1F312}",
            Self::FirstQuarter => "\u{1F313}",
            Self::WaxingGibbous => "\u{1F314}",
            Self::FullMoon => "\u{1F315}",
            Self::WaningGibbous => "\u{1F316}",
            Self::LastQuarter => "\u{1F317}",
            Self::WaningCrescent => "\u{1F318}",
        }
    }

    /// Classify a moon age in days (expected in `[0, SYNODIC_PERIOD_DAYS)`).
    pub fn from_age(age_days: f64) -> Self {
        PHASE_AGE_LIMITS
            .iter()
            .find(|(limit, _)| age_days < *limit)
            .map_or(Self::NewMoon, |(_, phase)| *phase)
    }
}

impl Display for MoonPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoonPhase {
    type Err = AugurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_MOON_PHASES
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| AugurError::UnknownMoonPhase(s.to_string()))
    }
}

/// Moon phase estimate at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseSnapshot {
    /// Named phase.
    #[serde(rename = "phaseName")]
    pub phase: MoonPhase,
    /// Illuminated fraction estimate in [0, 1].
    #[serde(rename = "illuminationEstimate")]
    pub illumination: f64,
    /// True for the first half of the cycle.
    pub waxing: bool,
    /// Days since the most recent mean new moon, in [0, SYNODIC_PERIOD_DAYS).
    #[serde(rename = "ageInDays")]
    pub age_days: f64,
}

/// Moon age in days at an instant.
///
/// Negative elapsed times (before the reference) wrap into the same range.
pub fn moon_age_days(instant: DateTime<Utc>) -> f64 {
    let elapsed_ms = instant.timestamp_millis() - REFERENCE_NEW_MOON_UNIX_MS;
    let elapsed = elapsed_ms as f64 / MS_PER_DAY;
    // The second remainder keeps a tiny negative remainder from rounding up to the period.
    ((elapsed % SYNODIC_PERIOD_DAYS) + SYNODIC_PERIOD_DAYS) % SYNODIC_PERIOD_DAYS
}

/// Estimate the moon phase at an instant.
pub fn phase_of(instant: DateTime<Utc>) -> PhaseSnapshot {
    let age_days = moon_age_days(instant);
    PhaseSnapshot {
        phase: MoonPhase::from_age(age_days),
        illumination: (1.0 - (2.0 * PI * age_days / SYNODIC_PERIOD_DAYS).cos()) / 2.0,
        waxing: age_days < SYNODIC_PERIOD_DAYS / 2.0,
        age_days,
    }
}

/// Estimate the moon phase at 00:00 UTC of a calendar day.
pub fn phase_on(date: NaiveDate) -> PhaseSnapshot {
    phase_of(date.and_time(NaiveTime::MIN).and_utc())
}
