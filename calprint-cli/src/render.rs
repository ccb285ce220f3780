//! Terminal rendering for the calendar views.
//!
//! Renderers consume the grid and holiday data; they never validate input
//! and never touch the filesystem beyond the injected note store.

use calprint_core::grid::{self, CalendarDay};
use calprint_core::holiday::{self, HolidayKind};
use calprint_core::note::{NoteKey, NoteStore};
use calprint_core::view::{Theme, ViewOptions};
use chrono::{Datelike, NaiveDate, Weekday};
use owo_colors::OwoColorize;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(crate) const WEEKDAYS_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
pub(crate) const WEEKDAYS_TINY: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Visible width of one month-view cell.
const CELL_WIDTH: usize = 6;

/// Visible width of one mini-month in the year view.
const MINI_WIDTH: usize = 21;

pub(crate) fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

// =============================================================================
// Month view
// =============================================================================

/// Render the month view: title, weekday header, the 6x7 day table, then
/// holiday and note sections for the days on screen.
pub fn month_view(
    year: i32,
    month: u32,
    options: &ViewOptions,
    notes: &dyn NoteStore,
) -> String {
    let days = grid::month_grid(year, month);
    let mut lines = Vec::new();

    let title = format!("{} {}", MONTH_NAMES[month as usize - 1].to_uppercase(), year);
    lines.push(format!("{:^width$}", title, width = 7 * CELL_WIDTH).bold().to_string());
    lines.push(weekday_header());

    for week in grid::weeks(&days) {
        let mut row = String::new();
        for cell in week {
            row.push_str(&month_cell(cell, options));
        }
        lines.push(row);
    }

    if options.show_holidays {
        let listed = grid_holidays(&days);
        if !listed.is_empty() {
            lines.push(String::new());
            lines.push("Holidays".bold().to_string());
            for (date, name) in listed {
                let label = format!("{}", date.format("%b %d"));
                lines.push(format!("  {}  {}", label.dimmed(), name.green()));
            }
        }
    }

    if options.show_notes {
        let listed = grid_notes(&days, notes);
        if !listed.is_empty() {
            lines.push(String::new());
            lines.push("Notes".bold().to_string());
            for (date, text) in listed {
                let label = format!("{}", date.format("%b %d"));
                lines.push(format!("  {}  {}", label.dimmed(), text));
            }
        }
    }

    lines.join("\n")
}

fn weekday_header() -> String {
    WEEKDAYS_SHORT
        .iter()
        .map(|name| format!("{:>5} ", name))
        .collect()
}

/// One fixed-width cell: right-aligned day number plus a holiday marker.
/// Colors are applied after padding so alignment survives the ANSI codes.
fn month_cell(cell: &CalendarDay, options: &ViewOptions) -> String {
    let marker = if options.show_holidays
        && holiday::holiday_on(cell.year, cell.month, cell.day).is_some()
    {
        '*'
    } else {
        ' '
    };
    let padded = format!("{:>4}{} ", cell.day, marker);

    if cell.is_today {
        padded.red().bold().to_string()
    } else if !cell.is_current_month {
        padded.dimmed().to_string()
    } else if options.pro_mode && is_weekend(cell.date) {
        padded.bright_black().to_string()
    } else {
        padded
    }
}

/// Holidays falling on any of the grid's days, padding cells included
/// (their lookup uses the cell's actual month and year).
fn grid_holidays(days: &[CalendarDay]) -> Vec<(NaiveDate, String)> {
    days.iter()
        .filter_map(|cell| {
            holiday::holiday_on(cell.year, cell.month, cell.day).map(|h| (cell.date, h.name))
        })
        .collect()
}

fn grid_notes(days: &[CalendarDay], notes: &dyn NoteStore) -> Vec<(NaiveDate, String)> {
    days.iter()
        .filter_map(|cell| notes.get(&NoteKey::for_day(cell)).map(|text| (cell.date, text)))
        .collect()
}

// =============================================================================
// Week view
// =============================================================================

/// Render the grid as six "Week N" blocks, one day per line.
/// `only_week` limits output to a single block (1-6).
pub fn week_view(
    year: i32,
    month: u32,
    only_week: Option<usize>,
    options: &ViewOptions,
    notes: &dyn NoteStore,
) -> String {
    let days = grid::month_grid(year, month);
    let mut sections = Vec::new();

    for (index, week) in grid::weeks(&days).enumerate() {
        if let Some(only) = only_week {
            if only != index + 1 {
                continue;
            }
        }

        let mut lines = vec![format!("Week {}", index + 1).bold().to_string()];
        for cell in week {
            lines.push(week_line(cell, options, notes));
        }
        sections.push(lines.join("\n"));
    }

    sections.join("\n\n")
}

fn week_line(cell: &CalendarDay, options: &ViewOptions, notes: &dyn NoteStore) -> String {
    let label = format!("{:<10}", cell.date.format("%a %b %-d").to_string());

    let mut line = if cell.is_today {
        format!("  {}", label.red().bold())
    } else if !cell.is_current_month {
        format!("  {}", label.dimmed())
    } else if options.pro_mode && is_weekend(cell.date) {
        format!("  {}", label.bright_black())
    } else {
        format!("  {label}")
    };

    if options.show_holidays {
        if let Some(h) = holiday::holiday_on(cell.year, cell.month, cell.day) {
            line.push_str(&format!("  {}", h.name.green()));
        }
    }

    if options.show_notes {
        if let Some(text) = notes.get(&NoteKey::for_day(cell)) {
            line.push_str(&format!("  {}", text.dimmed()));
        }
    }

    line
}

// =============================================================================
// Year view
// =============================================================================

/// Render twelve mini-months, three abreast, with the holiday list below.
pub fn year_view(year: i32, options: &ViewOptions) -> String {
    let mut out = Vec::new();

    out.push(format!("{:^width$}", year, width = 3 * MINI_WIDTH + 6).bold().to_string());
    out.push(String::new());

    let minis: Vec<Vec<String>> = (1..=12).map(|m| mini_month(year, m, options)).collect();

    for row in minis.chunks(3) {
        for line in 0..8 {
            let joined = row
                .iter()
                .map(|mini| mini[line].as_str())
                .collect::<Vec<_>>()
                .join("   ");
            out.push(joined);
        }
        out.push(String::new());
    }

    if options.show_holidays {
        out.push("Holidays & Observances".bold().to_string());
        for h in holiday::holidays_for_year(year) {
            let Ok(date) = NaiveDate::parse_from_str(&h.date, "%Y-%m-%d") else {
                continue;
            };
            let label = format!("{}", date.format("%b %d"));
            out.push(format!("  {}  {}", label.bold(), h.name));
        }
    }

    out.join("\n")
}

/// Eight fixed-width lines: title, weekday header, six day rows.
/// Padding cells render blank, so each mini shows only its own month.
fn mini_month(year: i32, month: u32, options: &ViewOptions) -> Vec<String> {
    let days = grid::month_grid(year, month);
    let mut lines = Vec::with_capacity(8);

    lines.push(format!("{:^width$}", MONTH_NAMES[month as usize - 1], width = MINI_WIDTH));
    lines.push(format!("{} ", WEEKDAYS_TINY.join(" ")));

    for week in grid::weeks(&days) {
        let mut row = String::new();
        for cell in week {
            row.push_str(&mini_cell(cell, options));
        }
        lines.push(row);
    }

    lines
}

fn mini_cell(cell: &CalendarDay, options: &ViewOptions) -> String {
    if !cell.is_current_month {
        return "   ".to_string();
    }

    let padded = format!("{:>2} ", cell.day);
    let is_holiday = options.show_holidays
        && holiday::holiday_on(cell.year, cell.month, cell.day).is_some();

    match options.theme {
        Theme::Corporate => {
            if is_holiday {
                padded.blue().bold().to_string()
            } else if is_weekend(cell.date) {
                padded.dimmed().to_string()
            } else {
                padded
            }
        }
        Theme::Minimalist => {
            if is_holiday {
                padded.bold().underline().to_string()
            } else if is_weekend(cell.date) {
                padded.dimmed().to_string()
            } else {
                padded
            }
        }
    }
}

// =============================================================================
// Holiday listing
// =============================================================================

/// Table of a year's holidays grouped by month.
pub fn holiday_table(year: i32) -> String {
    let holidays = holiday::holidays_for_year(year);
    let mut lines = vec![format!("Holidays in {year}").bold().to_string()];
    let mut current_month: Option<u32> = None;

    for h in &holidays {
        let Ok(date) = NaiveDate::parse_from_str(&h.date, "%Y-%m-%d") else {
            continue;
        };

        if current_month != Some(date.month()) {
            lines.push(String::new());
            lines.push(MONTH_NAMES[date.month0() as usize].bold().to_string());
            current_month = Some(date.month());
        }

        let kind = match h.kind {
            HolidayKind::International => "international",
            HolidayKind::Custom => "custom",
        };
        let label = format!("{}", date.format("%a, %B %-d"));
        lines.push(format!("  {:<16} {:<20} {}", label, h.name, kind.dimmed()));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn no_notes() -> BTreeMap<NoteKey, String> {
        BTreeMap::new()
    }

    // --- month view ---

    #[test]
    fn month_view_has_title_header_and_six_week_rows() {
        let rendered = month_view(2026, 8, &ViewOptions::default(), &no_notes());
        assert!(rendered.contains("AUGUST 2026"));
        assert!(rendered.contains("Sun"));
        assert!(rendered.contains("Sat"));

        // Title + header + 6 week rows before the holiday section.
        let grid_rows = rendered
            .lines()
            .take_while(|l| !l.is_empty())
            .count();
        assert_eq!(grid_rows, 8);
    }

    #[test]
    fn month_view_lists_holidays_on_screen() {
        let rendered = month_view(2026, 12, &ViewOptions::default(), &no_notes());
        assert!(rendered.contains("Christmas Day"));
        assert!(rendered.contains("New Year's Eve"));
    }

    #[test]
    fn month_view_can_hide_holidays() {
        let options = ViewOptions {
            show_holidays: false,
            ..ViewOptions::default()
        };
        let rendered = month_view(2026, 12, &options, &no_notes());
        assert!(!rendered.contains("Christmas Day"));
    }

    #[test]
    fn month_view_shows_notes_for_visible_days() {
        let mut notes = no_notes();
        NoteStore::set(&mut notes, &NoteKey::new(2026, 8, 6), "dentist 9am").unwrap();
        let rendered = month_view(2026, 8, &ViewOptions::default(), &notes);
        assert!(rendered.contains("dentist 9am"));
    }

    #[test]
    fn month_view_shows_notes_on_padding_days() {
        // July 31 2026 is a leading padding cell of the August grid; its
        // note key resolves to the real July date.
        let mut notes = no_notes();
        NoteStore::set(&mut notes, &NoteKey::new(2026, 7, 31), "pack bags").unwrap();
        let rendered = month_view(2026, 8, &ViewOptions::default(), &notes);
        assert!(rendered.contains("pack bags"));
    }

    #[test]
    fn month_view_can_hide_notes() {
        let mut notes = no_notes();
        NoteStore::set(&mut notes, &NoteKey::new(2026, 8, 6), "dentist").unwrap();
        let options = ViewOptions {
            show_notes: false,
            ..ViewOptions::default()
        };
        let rendered = month_view(2026, 8, &options, &notes);
        assert!(!rendered.contains("dentist"));
    }

    // --- week view ---

    #[test]
    fn week_view_has_six_blocks() {
        let rendered = week_view(2026, 8, None, &ViewOptions::default(), &no_notes());
        for n in 1..=6 {
            assert!(rendered.contains(&format!("Week {n}")), "missing week {n}");
        }
    }

    #[test]
    fn week_view_can_show_a_single_week() {
        let rendered = week_view(2026, 8, Some(2), &ViewOptions::default(), &no_notes());
        assert!(rendered.contains("Week 2"));
        assert!(!rendered.contains("Week 1"));
        assert!(!rendered.contains("Week 3"));
    }

    #[test]
    fn week_view_annotates_holidays_inline() {
        let rendered = week_view(2026, 12, None, &ViewOptions::default(), &no_notes());
        assert!(rendered.contains("Christmas Day"));
    }

    // --- year view ---

    #[test]
    fn year_view_shows_all_months_and_the_holiday_list() {
        let rendered = year_view(2026, &ViewOptions::default());
        for name in MONTH_NAMES {
            assert!(rendered.contains(name), "missing {name}");
        }
        assert!(rendered.contains("Holidays & Observances"));
        assert!(rendered.contains("Christmas Day"));
    }

    #[test]
    fn year_view_can_hide_the_holiday_list() {
        let options = ViewOptions {
            show_holidays: false,
            ..ViewOptions::default()
        };
        let rendered = year_view(2026, &options);
        assert!(!rendered.contains("Holidays & Observances"));
    }

    // --- holiday table ---

    #[test]
    fn holiday_table_groups_by_month() {
        let rendered = holiday_table(2026);
        assert!(rendered.contains("Holidays in 2026"));
        assert!(rendered.contains("January"));
        assert!(rendered.contains("December"));
        assert!(rendered.contains("Christmas Day"));
        assert!(rendered.contains("international"));
        // Months without holidays don't get a header.
        assert!(!rendered.contains("June"));
    }
}
