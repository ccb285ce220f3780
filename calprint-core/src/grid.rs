//! Month grid generation.

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::Serialize;

/// Cells in a month grid: six full weeks of seven days. Every month fits,
/// so renderers never deal with a variable row count.
pub const GRID_CELLS: usize = 42;

/// One cell of a month grid.
///
/// Padding cells (leading days of the previous month, trailing days of the
/// next) carry their *actual* year and month, so holiday lookups and note
/// keys for them resolve to the real-world date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Day-of-month as displayed (1-31).
    pub day: u32,
    /// Month this date actually belongs to (1-12).
    pub month: u32,
    /// Year this date actually belongs to.
    pub year: i32,
    /// True only for cells of the month the grid was requested for.
    pub is_current_month: bool,
    /// True iff this date equals the local date the grid was built with.
    pub is_today: bool,
}

/// Build the 42-cell grid for a month, using the current local date for
/// the today marker.
///
/// `month` must be 1-12; callers validate before calling (see the CLI's
/// argument handling). `year` is unrestricted here.
pub fn month_grid(year: i32, month: u32) -> Vec<CalendarDay> {
    month_grid_on(year, month, Local::now().date_naive())
}

/// Build the 42-cell grid for a month with an explicit "today".
///
/// The grid starts on the Sunday on or before the 1st, covers every day of
/// the month, and runs into the following month until all 42 cells are
/// filled. Entries are strictly chronological with no gaps or duplicates,
/// and year rollover at the Dec/Jan boundaries falls out of plain date
/// arithmetic.
pub fn month_grid_on(year: i32, month: u32, today: NaiveDate) -> Vec<CalendarDay> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();

    // Week starts on Sunday: index 0 (Sun) through 6 (Sat).
    let leading = first.weekday().num_days_from_sunday() as i64;
    let start = first - Duration::days(leading);

    (0..GRID_CELLS as i64)
        .map(|offset| {
            let date = start + Duration::days(offset);
            CalendarDay {
                date,
                day: date.day(),
                month: date.month(),
                year: date.year(),
                is_current_month: date.month() == month && date.year() == year,
                is_today: date == today,
            }
        })
        .collect()
}

/// Split a grid into its six week rows.
pub fn weeks(days: &[CalendarDay]) -> impl Iterator<Item = &[CalendarDay]> {
    days.chunks(7)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn on(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // --- shape ---

    #[test]
    fn grid_has_42_cells_for_every_month() {
        for month in 1..=12 {
            let grid = month_grid_on(2026, month, on(2020, 1, 1));
            assert_eq!(grid.len(), GRID_CELLS, "month {}", month);
        }
    }

    #[test]
    fn grid_is_strictly_chronological_without_duplicates() {
        for (year, month) in [(2026, 8), (2025, 1), (2025, 12), (2024, 2), (1900, 1), (2100, 12)] {
            let grid = month_grid_on(year, month, on(2020, 1, 1));
            for pair in grid.windows(2) {
                assert_eq!(
                    pair[1].date - pair[0].date,
                    Duration::days(1),
                    "gap or duplicate in grid for {}-{}",
                    year,
                    month
                );
            }
        }
    }

    #[test]
    fn cell_fields_match_their_date() {
        let grid = month_grid_on(2026, 8, on(2020, 1, 1));
        for cell in &grid {
            assert_eq!(cell.day, cell.date.day());
            assert_eq!(cell.month, cell.date.month());
            assert_eq!(cell.year, cell.date.year());
        }
    }

    // --- current-month flag ---

    #[test]
    fn current_month_count_matches_month_length() {
        let cases = [
            (2026, 1, 31),
            (2026, 4, 30),
            (2024, 2, 29), // leap year
            (2023, 2, 28),
            (2026, 12, 31),
        ];
        for (year, month, expected) in cases {
            let grid = month_grid_on(year, month, on(2020, 1, 1));
            let current = grid.iter().filter(|d| d.is_current_month).count();
            assert_eq!(current, expected, "{}-{}", year, month);
        }
    }

    #[test]
    fn padding_surrounds_current_month_contiguously() {
        let grid = month_grid_on(2026, 8, on(2020, 1, 1));
        let first_current = grid.iter().position(|d| d.is_current_month).unwrap();
        let last_current = grid.iter().rposition(|d| d.is_current_month).unwrap();

        assert!(grid[..first_current].iter().all(|d| !d.is_current_month));
        assert!(grid[first_current..=last_current].iter().all(|d| d.is_current_month));
        assert!(grid[last_current + 1..].iter().all(|d| !d.is_current_month));
        assert_eq!(grid[first_current].day, 1);
    }

    #[test]
    fn grid_starts_on_sunday_column() {
        // August 2026 begins on a Saturday, so six padding days lead in.
        let grid = month_grid_on(2026, 8, on(2020, 1, 1));
        assert_eq!(grid[0].date, on(2026, 7, 26));
        assert_eq!(grid[6].date, on(2026, 8, 1));
        assert!(grid[6].is_current_month);
    }

    #[test]
    fn month_starting_on_sunday_has_no_leading_padding() {
        // February 2026 begins on a Sunday.
        let grid = month_grid_on(2026, 2, on(2020, 1, 1));
        assert_eq!(grid[0].date, on(2026, 2, 1));
        assert!(grid[0].is_current_month);
    }

    // --- year rollover ---

    #[test]
    fn january_grid_rolls_back_into_december() {
        let grid = month_grid_on(2025, 1, on(2020, 1, 1));
        // January 1st 2025 is a Wednesday; Sun Dec 29 2024 leads the grid.
        assert_eq!(grid[0].date, on(2024, 12, 29));
        assert_eq!(grid[0].year, 2024);
        assert_eq!(grid[0].month, 12);
        assert!(!grid[0].is_current_month);
    }

    #[test]
    fn december_grid_rolls_forward_into_january() {
        let grid = month_grid_on(2025, 12, on(2020, 1, 1));
        let last = grid.last().unwrap();
        assert_eq!(last.year, 2026);
        assert_eq!(last.month, 1);
        assert!(!last.is_current_month);
    }

    // --- leap years ---

    #[test]
    fn february_length_tracks_leap_years() {
        let leap = month_grid_on(2024, 2, on(2020, 1, 1));
        assert_eq!(leap.iter().filter(|d| d.is_current_month).count(), 29);

        let common = month_grid_on(2023, 2, on(2020, 1, 1));
        assert_eq!(common.iter().filter(|d| d.is_current_month).count(), 28);

        // Century rule: 2100 is not a leap year.
        let century = month_grid_on(2100, 2, on(2020, 1, 1));
        assert_eq!(century.iter().filter(|d| d.is_current_month).count(), 28);
    }

    // --- today ---

    #[test]
    fn today_is_marked_on_matching_date_only() {
        let today = on(2026, 8, 6);
        let grid = month_grid_on(2026, 8, today);
        let marked: Vec<_> = grid.iter().filter(|d| d.is_today).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].date, today);
    }

    #[test]
    fn today_is_marked_on_padding_cells_too() {
        // July 31 2026 appears as leading padding in the August grid.
        let today = on(2026, 7, 31);
        let grid = month_grid_on(2026, 8, today);
        let marked: Vec<_> = grid.iter().filter(|d| d.is_today).collect();
        assert_eq!(marked.len(), 1);
        assert!(!marked[0].is_current_month);
    }

    #[test]
    fn exactly_one_today_across_a_full_year_of_grids() {
        let today = on(2026, 6, 15);
        let mut marked: HashSet<NaiveDate> = HashSet::new();
        for month in 1..=12 {
            for cell in month_grid_on(2026, month, today) {
                if cell.is_today {
                    marked.insert(cell.date);
                }
            }
        }
        assert_eq!(marked.len(), 1);
        assert!(marked.contains(&today));
    }

    #[test]
    fn default_grid_marks_the_current_local_date() {
        let today = Local::now().date_naive();
        let grid = month_grid(today.year(), today.month());
        assert!(grid.iter().any(|d| d.is_today && d.date == today));
    }

    // --- weeks ---

    #[test]
    fn weeks_yields_six_rows_of_seven() {
        let grid = month_grid_on(2026, 8, on(2020, 1, 1));
        let rows: Vec<_> = weeks(&grid).collect();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|w| w.len() == 7));
    }
}
