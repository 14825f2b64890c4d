//! Tropical zodiac signs and their conventional sun-sign seasons.
//!
//! Season boundaries are fixed calendar dates, not computed ingresses.
//! Capricorn is the only season that crosses into the following year.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AugurError;

/// The 12 tropical signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// Inclusive calendar-day window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the window.
    pub start: NaiveDate,
    /// Last day of the window (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Whether `date` falls within the window, both ends inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Season boundaries as ((start month, day), (end month, day)).
const fn season_bounds(sign: ZodiacSign) -> ((u32, u32), (u32, u32)) {
    match sign {
        ZodiacSign::Aries => ((3, 20), (4, 19)),
        ZodiacSign::Taurus => ((4, 20), (5, 20)),
        ZodiacSign::Gemini => ((5, 21), (6, 20)),
        ZodiacSign::Cancer => ((6, 21), (7, 22)),
        ZodiacSign::Leo => ((7, 23), (8, 22)),
        ZodiacSign::Virgo => ((8, 23), (9, 22)),
        ZodiacSign::Libra => ((9, 23), (10, 22)),
        ZodiacSign::Scorpio => ((10, 23), (11, 21)),
        ZodiacSign::Sagittarius => ((11, 22), (12, 21)),
        ZodiacSign::Capricorn => ((12, 22), (1, 19)),
        ZodiacSign::Aquarius => ((1, 20), (2, 18)),
        ZodiacSign::Pisces => ((2, 19), (3, 19)),
    }
}

impl ZodiacSign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_SIGNS
    }

    /// Season window anchored on `year`.
    ///
    /// Returns `None` only when the year lies outside chrono's calendar range.
    pub fn season(self, year: i32) -> Option<DateRange> {
        let ((start_month, start_day), (end_month, end_day)) = season_bounds(self);
        let end_year = if end_month < start_month { year.checked_add(1)? } else { year };
        Some(DateRange {
            start: NaiveDate::from_ymd_opt(year, start_month, start_day)?,
            end: NaiveDate::from_ymd_opt(end_year, end_month, end_day)?,
        })
    }
}

impl Display for ZodiacSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = AugurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SIGNS
            .iter()
            .copied()
            .find(|sign| sign.name() == s)
            .ok_or_else(|| AugurError::UnknownSign(s.to_string()))
    }
}

/// Season window for a sign name in `year`. Unknown names yield `None`.
pub fn season_range(sign: &str, year: i32) -> Option<DateRange> {
    sign.parse::<ZodiacSign>().ok()?.season(year)
}
