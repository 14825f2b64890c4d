//! Next season windows for a set of preferred signs.

use augur_base::ZodiacSign;
use chrono::{Datelike, NaiveDate};

use crate::suggest_types::SeasonWindow;

/// Season window of each sign that is current or next relative to `today`.
///
/// A sign's window anchored on `today`'s year is used unless it already
/// ended, in which case the following year's window is used. Results are
/// sorted by start date.
pub fn upcoming_season_windows(signs: &[ZodiacSign], today: NaiveDate) -> Vec<SeasonWindow> {
    let year = today.year();
    let mut windows: Vec<SeasonWindow> = signs
        .iter()
        .filter_map(|&sign| {
            let range = match sign.season(year)? {
                r if r.end < today => sign.season(year + 1)?,
                r => r,
            };
            Some(SeasonWindow { sign, range })
        })
        .collect();
    windows.sort_by_key(|w| w.range.start);
    windows
}
