//! Classical planets and their planetary days.
//!
//! Each of the seven classical planets rules one weekday. Weekday indices
//! count from Sunday = 0, matching `chrono::Weekday::num_days_from_sunday`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AugurError;

/// The seven classical planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
}

/// All 7 planets in weekday order (Sun = Sunday .. Saturn = Saturday).
pub const ALL_PLANETS: [Planet; 7] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
];

/// Weekday ruled by a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PlanetaryWeekday {
    /// 0 = Sunday .. 6 = Saturday.
    pub day: u8,
    /// English weekday name.
    pub name: &'static str,
}

/// Planet-to-weekday table, keyed by planet name.
pub const PLANETARY_WEEKDAYS: [(&str, PlanetaryWeekday); 7] = [
    ("Sun", PlanetaryWeekday { day: 0, name: "Sunday" }),
    ("Moon", PlanetaryWeekday { day: 1, name: "Monday" }),
    ("Mars", PlanetaryWeekday { day: 2, name: "Tuesday" }),
    ("Mercury", PlanetaryWeekday { day: 3, name: "Wednesday" }),
    ("Jupiter", PlanetaryWeekday { day: 4, name: "Thursday" }),
    ("Venus", PlanetaryWeekday { day: 5, name: "Friday" }),
    ("Saturn", PlanetaryWeekday { day: 6, name: "Saturday" }),
];

impl Planet {
    /// English name of the planet.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
        }
    }

    /// 0-based index into [`ALL_PLANETS`], equal to the weekday index.
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mars => 2,
            Self::Mercury => 3,
            Self::Jupiter => 4,
            Self::Venus => 5,
            Self::Saturn => 6,
        }
    }

    /// The weekday this planet rules.
    pub const fn weekday(self) -> PlanetaryWeekday {
        PLANETARY_WEEKDAYS[self.index() as usize].1
    }

    /// Planet ruling the given weekday index (0 = Sunday). Wraps modulo 7.
    pub const fn from_weekday(day: u8) -> Self {
        ALL_PLANETS[(day % 7) as usize]
    }

    /// All 7 planets in weekday order.
    pub const fn all() -> &'static [Planet; 7] {
        &ALL_PLANETS
    }
}

impl Display for Planet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = AugurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PLANETS
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| AugurError::UnknownPlanet(s.to_string()))
    }
}

/// Look up the weekday ruled by a planet name. Unknown names yield `None`.
pub fn planetary_weekday(planet: &str) -> Option<PlanetaryWeekday> {
    PLANETARY_WEEKDAYS
        .iter()
        .find(|(name, _)| *name == planet)
        .map(|(_, weekday)| *weekday)
}
