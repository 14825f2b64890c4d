//! Catalog records: intents, entities, and timing hints.
//!
//! Records are immutable inputs owned by the caller. Field names on the
//! wire follow the catalog JSON (`camelCase`).

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::moon_phase::MoonPhase;
use crate::planet::Planet;
use crate::zodiac::ZodiacSign;

/// Parse an optional name, dropping it when it names nothing known.
fn known_name<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name.and_then(|n| match n.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            debug!(name = %n, "ignoring unknown timing hint name");
            None
        }
    }))
}

/// Parse a list of names, keeping only the known ones in order.
fn known_names<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let names = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(names
        .iter()
        .filter_map(|n| match n.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                debug!(name = %n, "ignoring unknown timing hint name");
                None
            }
        })
        .collect())
}

/// Astrological timing preferences attached to an intent.
///
/// Names that match no planet, phase, or sign are dropped while parsing, so
/// they never score a date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingHints {
    /// Planet whose weekday is preferred.
    #[serde(
        default,
        deserialize_with = "known_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub planetary_day: Option<Planet>,
    /// Preferred moon phase.
    #[serde(
        default,
        deserialize_with = "known_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub preferred_moon_phase: Option<MoonPhase>,
    /// Signs whose season is favorable. Order does not affect scoring weight,
    /// only which sign is named when several seasons overlap.
    #[serde(default, deserialize_with = "known_names")]
    pub preferred_sun_signs: Vec<ZodiacSign>,
    /// Moon phase to avoid.
    #[serde(
        default,
        deserialize_with = "known_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub avoid_moon_phase: Option<MoonPhase>,
}

impl TimingHints {
    /// True when no preference is set; such hints never score a date.
    pub fn is_empty(&self) -> bool {
        self.planetary_day.is_none()
            && self.preferred_moon_phase.is_none()
            && self.preferred_sun_signs.is_empty()
            && self.avoid_moon_phase.is_none()
    }
}

/// An intention archetype (love, protection, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Stable identifier, snake_case.
    pub id: String,
    /// Display label.
    pub label: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tradition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing_hints: Option<TimingHints>,
}

/// Kind of catalog entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Deity,
    Angel,
    Demon,
    Spirit,
    Archetype,
    PopCulture,
}

/// A deity, spirit, or archetype that a query can resolve to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: String,
    pub name: String,
    /// Tradition label, e.g. "Greek".
    pub tradition: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Modern or pop-culture archetype; excluded from matching unless requested.
    #[serde(default)]
    pub is_pop_culture: bool,
    /// Closed or initiatory tradition.
    #[serde(default)]
    pub is_closed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sphere: Option<String>,
}
