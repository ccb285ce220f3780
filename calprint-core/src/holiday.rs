//! Fixed-date holiday catalog.

use serde::{Deserialize, Serialize};

/// A fixed-date annual observance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// ISO calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HolidayKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKind {
    International,
    /// Reserved for user-defined holidays; not populated by the default
    /// catalog.
    Custom,
}

/// The default catalog as (month, day, name). Fixed-date observances only;
/// variable-date rules (Easter-relative, nth-weekday) are out of scope.
const FIXED_HOLIDAYS: [(u32, u32, &str); 10] = [
    (1, 1, "New Year's Day"),
    (2, 14, "Valentine's Day"),
    (3, 8, "Int'l Women's Day"),
    (3, 17, "St. Patrick's Day"),
    (4, 22, "Earth Day"),
    (5, 1, "Labor Day"),
    (10, 31, "Halloween"),
    (11, 11, "Veterans Day"),
    (12, 25, "Christmas Day"),
    (12, 31, "New Year's Eve"),
];

/// International observances for a year. The list is regenerated on every
/// call; only the year component of each date changes between years.
pub fn holidays_for_year(year: i32) -> Vec<Holiday> {
    FIXED_HOLIDAYS
        .iter()
        .map(|&(month, day, name)| Holiday {
            date: format!("{year}-{month:02}-{day:02}"),
            name: name.to_string(),
            kind: HolidayKind::International,
        })
        .collect()
}

/// Look up the holiday on a specific day, if any. Absence is the normal
/// outcome, not an error.
pub fn holiday_on(year: i32, month: u32, day: u32) -> Option<Holiday> {
    let date = format!("{year}-{month:02}-{day:02}");
    holidays_for_year(year).into_iter().find(|h| h.date == date)
}
