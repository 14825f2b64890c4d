//! Symbolic vocabulary and offline date math for augur.
//!
//! This crate provides:
//! - The seven classical planets and their planetary weekdays
//! - Moon-phase estimation from a mean synodic cycle
//! - Tropical sun-sign season windows
//! - Catalog records (intents, entities, timing hints)
//!
//! Every calculation works on UTC calendar days or UTC instants, so
//! results do not depend on the caller's locale.

pub mod catalog;
pub mod error;
pub mod moon_phase;
pub mod planet;
pub mod zodiac;

pub use catalog::{Entity, EntityKind, Intent, TimingHints};
pub use error::AugurError;
pub use moon_phase::{
    ALL_MOON_PHASES, MoonPhase, PhaseSnapshot, REFERENCE_NEW_MOON_UNIX_MS, SYNODIC_PERIOD_DAYS,
    moon_age_days, phase_of, phase_on,
};
pub use planet::{ALL_PLANETS, PLANETARY_WEEKDAYS, Planet, PlanetaryWeekday, planetary_weekday};
pub use zodiac::{ALL_SIGNS, DateRange, ZodiacSign, season_range};
