//! SVG rendering of the calendar views.
//!
//! The portable stand-in for "render the view to an image": every view
//! becomes a standalone SVG document sized for an A4 landscape sheet.

use calprint_core::grid::{self, CalendarDay};
use calprint_core::holiday;
use calprint_core::note::{NoteKey, NoteStore};
use calprint_core::view::{Theme, ViewMode, ViewOptions};
use chrono::NaiveDate;
use maud::{Markup, html};

use crate::render::{MONTH_NAMES, WEEKDAYS_SHORT, WEEKDAYS_TINY, is_weekend};

const CELL_W: i32 = 160;
const CELL_H: i32 = 104;
const HEADER_H: i32 = 34;
const TITLE_H: i32 = 58;
const MONTH_W: i32 = 7 * CELL_W;
const MONTH_H: i32 = TITLE_H + HEADER_H + 6 * CELL_H;

/// Colors lifted from the two themes.
struct Palette {
    header_bg: &'static str,
    header_text: &'static str,
    grid_line: &'static str,
    band_bg: &'static str,
    day_text: &'static str,
    muted_text: &'static str,
    padding_bg: &'static str,
    weekend_bg: &'static str,
    holiday_text: &'static str,
    holiday_bg: &'static str,
    today_text: &'static str,
    today_bg: &'static str,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Corporate => Palette {
            header_bg: "#4472c4",
            header_text: "#ffffff",
            grid_line: "#d1d5db",
            band_bg: "#f3f4f6",
            day_text: "#374151",
            muted_text: "#9ca3af",
            padding_bg: "#f9fafb",
            weekend_bg: "#f1f5f9",
            holiday_text: "#4472c4",
            holiday_bg: "#e0efff",
            today_text: "#dc2626",
            today_bg: "#fee2e2",
        },
        Theme::Minimalist => Palette {
            header_bg: "#000000",
            header_text: "#ffffff",
            grid_line: "#e5e7eb",
            band_bg: "#fafaf9",
            day_text: "#1f2937",
            muted_text: "#a8a29e",
            padding_bg: "#fafaf9",
            weekend_bg: "#fafaf9",
            holiday_text: "#000000",
            holiday_bg: "#ffedd5",
            today_text: "#dc2626",
            today_bg: "#fee2e2",
        },
    }
}

/// Render a view to a standalone SVG document. `month` is ignored by the
/// year view; callers have already validated it for the other two.
pub fn render_view(
    mode: ViewMode,
    year: i32,
    month: u32,
    options: &ViewOptions,
    notes: &dyn NoteStore,
) -> String {
    match mode {
        ViewMode::Month => month_svg(year, month, options, notes),
        ViewMode::Week => week_svg(year, month, options, notes),
        ViewMode::Year => year_svg(year, options),
    }
    .into_string()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max_chars).collect();
    short.push('…');
    short
}

// =============================================================================
// Month view
// =============================================================================

fn month_svg(year: i32, month: u32, options: &ViewOptions, notes: &dyn NoteStore) -> Markup {
    let days = grid::month_grid(year, month);
    let palette = palette(options.theme);
    let title = format!("{} {}", MONTH_NAMES[month as usize - 1].to_uppercase(), year);

    html! {
        svg xmlns="http://www.w3.org/2000/svg"
            width=(MONTH_W) height=(MONTH_H)
            viewBox=(format!("0 0 {MONTH_W} {MONTH_H}"))
            font-family="Helvetica, Arial, sans-serif" {
            rect width=(MONTH_W) height=(MONTH_H) fill="#ffffff";
            rect width=(MONTH_W) height=(TITLE_H) fill=(palette.header_bg);
            text x=(MONTH_W / 2) y=(TITLE_H / 2 + 9)
                text-anchor="middle" font-size="26" font-weight="bold"
                fill=(palette.header_text) { (title) }
            (weekday_band(0, TITLE_H, CELL_W, &palette))
            @for (index, cell) in days.iter().enumerate() {
                @let x = (index % 7) as i32 * CELL_W;
                @let y = TITLE_H + HEADER_H + (index / 7) as i32 * CELL_H;
                (day_cell(x, y, cell, &palette, options, notes))
            }
        }
    }
}

/// Weekday labels on a shaded band, one per column.
fn weekday_band(x: i32, y: i32, cell_w: i32, palette: &Palette) -> Markup {
    html! {
        rect x=(x) y=(y) width=(7 * cell_w) height=(HEADER_H) fill=(palette.band_bg);
        @for (column, name) in WEEKDAYS_SHORT.iter().enumerate() {
            text x=(x + column as i32 * cell_w + cell_w / 2) y=(y + HEADER_H / 2 + 5)
                text-anchor="middle" font-size="13" font-weight="bold"
                fill=(palette.day_text) { (name) }
        }
    }
}

/// One day cell: background by state, day number (circled when today),
/// holiday label top-right, note text at the foot.
fn day_cell(
    x: i32,
    y: i32,
    cell: &CalendarDay,
    palette: &Palette,
    options: &ViewOptions,
    notes: &dyn NoteStore,
) -> Markup {
    let fill = if !cell.is_current_month {
        palette.padding_bg
    } else if options.pro_mode && is_weekend(cell.date) {
        palette.weekend_bg
    } else {
        "#ffffff"
    };

    let day_color = if cell.is_current_month {
        palette.day_text
    } else {
        palette.muted_text
    };

    let holiday = if options.show_holidays {
        holiday::holiday_on(cell.year, cell.month, cell.day)
    } else {
        None
    };

    let note = if options.show_notes {
        notes.get(&NoteKey::for_day(cell))
    } else {
        None
    };

    html! {
        rect x=(x) y=(y) width=(CELL_W) height=(CELL_H)
            fill=(fill) stroke=(palette.grid_line) stroke-width="1";
        @if cell.is_today {
            circle cx=(x + 18) cy=(y + 17) r="12" fill=(palette.today_bg);
            text x=(x + 18) y=(y + 22) text-anchor="middle"
                font-size="13" font-weight="bold" fill=(palette.today_text) { (cell.day) }
        } @else {
            text x=(x + 10) y=(y + 22)
                font-size="13" font-weight="bold" fill=(day_color) { (cell.day) }
        }
        @if let Some(h) = holiday {
            text x=(x + CELL_W - 8) y=(y + 22) text-anchor="end"
                font-size="10" fill=(palette.holiday_text) { (h.name) }
        }
        @if let Some(text) = note {
            text x=(x + 10) y=(y + CELL_H - 12)
                font-size="10" fill=(palette.muted_text) { (truncate(&text, 26)) }
        }
    }
}

// =============================================================================
// Week view
// =============================================================================

const WEEK_LABEL_H: i32 = 30;
const WEEK_GAP: i32 = 18;
const WEEK_BLOCK_H: i32 = WEEK_LABEL_H + HEADER_H + CELL_H;
const WEEK_TOTAL_H: i32 = TITLE_H + 6 * (WEEK_BLOCK_H + WEEK_GAP);

fn week_svg(year: i32, month: u32, options: &ViewOptions, notes: &dyn NoteStore) -> Markup {
    let days = grid::month_grid(year, month);
    let palette = palette(options.theme);
    let title = format!("{} {}", MONTH_NAMES[month as usize - 1].to_uppercase(), year);

    html! {
        svg xmlns="http://www.w3.org/2000/svg"
            width=(MONTH_W) height=(WEEK_TOTAL_H)
            viewBox=(format!("0 0 {MONTH_W} {WEEK_TOTAL_H}"))
            font-family="Helvetica, Arial, sans-serif" {
            rect width=(MONTH_W) height=(WEEK_TOTAL_H) fill="#ffffff";
            rect width=(MONTH_W) height=(TITLE_H) fill=(palette.header_bg);
            text x=(MONTH_W / 2) y=(TITLE_H / 2 + 9)
                text-anchor="middle" font-size="26" font-weight="bold"
                fill=(palette.header_text) { (title) }
            @for (index, week) in grid::weeks(&days).enumerate() {
                @let top = TITLE_H + WEEK_GAP + index as i32 * (WEEK_BLOCK_H + WEEK_GAP);
                rect x="0" y=(top) width=(MONTH_W) height=(WEEK_LABEL_H) fill=(palette.band_bg);
                text x="12" y=(top + WEEK_LABEL_H / 2 + 5)
                    font-size="14" font-weight="bold" fill=(palette.day_text) {
                    (format!("Week {}", index + 1))
                }
                (weekday_band(0, top + WEEK_LABEL_H, CELL_W, &palette))
                @for (column, cell) in week.iter().enumerate() {
                    (day_cell(
                        column as i32 * CELL_W,
                        top + WEEK_LABEL_H + HEADER_H,
                        cell,
                        &palette,
                        options,
                        notes,
                    ))
                }
            }
        }
    }
}

// =============================================================================
// Year view
// =============================================================================

const MINI_CELL_W: i32 = 26;
const MINI_ROW_H: i32 = 22;
const MINI_W: i32 = 7 * MINI_CELL_W;
const MINI_TITLE_H: i32 = 26;
const MINI_HEADER_H: i32 = 20;
const MINI_H: i32 = MINI_TITLE_H + MINI_HEADER_H + 6 * MINI_ROW_H;
const MINI_GAP: i32 = 28;
const YEAR_MARGIN: i32 = 24;
const YEAR_TITLE_H: i32 = 70;
const SIDEBAR_W: i32 = 250;
const YEAR_GRID_W: i32 = 3 * MINI_W + 2 * MINI_GAP;
const YEAR_FOOTER_H: i32 = 36;

fn year_svg(year: i32, options: &ViewOptions) -> Markup {
    let palette = palette(options.theme);
    let sidebar = options.show_holidays;

    let width = YEAR_MARGIN * 2
        + YEAR_GRID_W
        + if sidebar { YEAR_MARGIN + SIDEBAR_W } else { 0 };
    let height = YEAR_TITLE_H + YEAR_MARGIN + 4 * (MINI_H + MINI_GAP) + YEAR_FOOTER_H;

    html! {
        svg xmlns="http://www.w3.org/2000/svg"
            width=(width) height=(height)
            viewBox=(format!("0 0 {width} {height}"))
            font-family="Helvetica, Arial, sans-serif" {
            rect width=(width) height=(height) fill="#ffffff";
            rect width=(width) height=(YEAR_TITLE_H) fill=(palette.header_bg);
            text x=(width / 2) y=(YEAR_TITLE_H / 2 + 12)
                text-anchor="middle" font-size="36" font-weight="bold"
                letter-spacing="6" fill=(palette.header_text) { (year) }
            @for month in 1..=12u32 {
                @let index = (month - 1) as i32;
                @let x = YEAR_MARGIN + (index % 3) * (MINI_W + MINI_GAP);
                @let y = YEAR_TITLE_H + YEAR_MARGIN + (index / 3) * (MINI_H + MINI_GAP);
                (mini_month_svg(x, y, year, month, options, &palette))
            }
            @if sidebar {
                (holiday_sidebar(YEAR_MARGIN * 2 + YEAR_GRID_W, YEAR_TITLE_H + YEAR_MARGIN, year, &palette))
            }
            text x=(YEAR_MARGIN) y=(height - 14) font-size="10" fill=(palette.muted_text) {
                (format!("{year} Calendar with Holidays"))
            }
            text x=(width - YEAR_MARGIN) y=(height - 14) text-anchor="end"
                font-size="10" fill=(palette.muted_text) { "My Calendar App" }
        }
    }
}

/// One mini-month: centered name, tiny weekday labels, numbers for the
/// month's own days only (padding cells stay blank).
fn mini_month_svg(
    x: i32,
    y: i32,
    year: i32,
    month: u32,
    options: &ViewOptions,
    palette: &Palette,
) -> Markup {
    let days = grid::month_grid(year, month);

    html! {
        text x=(x + MINI_W / 2) y=(y + 16) text-anchor="middle"
            font-size="15" font-weight="bold" fill=(palette.day_text) {
            (MONTH_NAMES[month as usize - 1])
        }
        @for (column, name) in WEEKDAYS_TINY.iter().enumerate() {
            text x=(x + column as i32 * MINI_CELL_W + MINI_CELL_W / 2)
                y=(y + MINI_TITLE_H + 13)
                text-anchor="middle" font-size="10" font-weight="bold"
                fill=(palette.muted_text) { (name) }
        }
        @for (index, cell) in days.iter().enumerate() {
            @if cell.is_current_month {
                (mini_day(
                    x + (index % 7) as i32 * MINI_CELL_W,
                    y + MINI_TITLE_H + MINI_HEADER_H + (index / 7) as i32 * MINI_ROW_H,
                    cell,
                    options,
                    palette,
                ))
            }
        }
    }
}

fn mini_day(x: i32, y: i32, cell: &CalendarDay, options: &ViewOptions, palette: &Palette) -> Markup {
    let is_holiday = options.show_holidays
        && holiday::holiday_on(cell.year, cell.month, cell.day).is_some();
    let highlight = is_holiday && options.theme == Theme::Minimalist;

    let color = if is_holiday {
        palette.holiday_text
    } else if is_weekend(cell.date) {
        palette.muted_text
    } else {
        palette.day_text
    };
    let weight = if is_holiday { "bold" } else { "normal" };

    html! {
        @if is_weekend(cell.date) && options.theme == Theme::Corporate {
            rect x=(x) y=(y) width=(MINI_CELL_W) height=(MINI_ROW_H) fill=(palette.weekend_bg);
        }
        @if highlight {
            circle cx=(x + MINI_CELL_W / 2) cy=(y + MINI_ROW_H / 2 + 1) r="10"
                fill=(palette.holiday_bg);
        }
        text x=(x + MINI_CELL_W / 2) y=(y + MINI_ROW_H / 2 + 5)
            text-anchor="middle" font-size="12" font-weight=(weight)
            fill=(color) { (cell.day) }
    }
}

/// "Holidays & Observances" panel beside the year grid.
fn holiday_sidebar(x: i32, y: i32, year: i32, palette: &Palette) -> Markup {
    let holidays = holiday::holidays_for_year(year);

    html! {
        rect x=(x) y=(y) width=(SIDEBAR_W) height="52" fill=(palette.header_bg);
        text x=(x + SIDEBAR_W / 2) y=(y + 32) text-anchor="middle"
            font-size="16" font-weight="bold" fill=(palette.header_text) {
            "Holidays & Observances"
        }
        @for (index, h) in holidays.iter().enumerate() {
            @let line_y = y + 80 + index as i32 * 24;
            @if let Ok(date) = NaiveDate::parse_from_str(&h.date, "%Y-%m-%d") {
                text x=(x + 52) y=(line_y) text-anchor="end"
                    font-size="12" font-weight="bold" fill=(palette.holiday_text) {
                    (date.format("%b %d").to_string())
                }
                text x=(x + 64) y=(line_y) font-size="12" fill=(palette.day_text) {
                    (h.name)
                }
            }
        }
        text x=(x + SIDEBAR_W / 2) y=(y + 80 + 10 * 24 + 24) text-anchor="middle"
            font-size="10" fill=(palette.muted_text) {
            (format!("© {year} Calendar App"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn no_notes() -> BTreeMap<NoteKey, String> {
        BTreeMap::new()
    }

    fn options() -> ViewOptions {
        ViewOptions::default()
    }

    // --- month ---

    #[test]
    fn month_svg_has_42_day_cells() {
        let svg = render_view(ViewMode::Month, 2026, 8, &options(), &no_notes());
        // Day cells are the only stroked rects.
        assert_eq!(svg.matches("stroke=").count(), 42);
        assert!(svg.contains("AUGUST 2026"));
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn month_svg_shows_holidays_and_notes() {
        let mut notes = no_notes();
        NoteStore::set(&mut notes, &NoteKey::new(2026, 12, 24), "wrap gifts").unwrap();

        let svg = render_view(ViewMode::Month, 2026, 12, &options(), &notes);
        assert!(svg.contains("Christmas Day"));
        assert!(svg.contains("wrap gifts"));
    }

    #[test]
    fn month_svg_respects_hidden_holidays() {
        let options = ViewOptions {
            show_holidays: false,
            ..ViewOptions::default()
        };
        let svg = render_view(ViewMode::Month, 2026, 12, &options, &no_notes());
        assert!(!svg.contains("Christmas Day"));
    }

    #[test]
    fn minimalist_month_uses_black_header() {
        let options = ViewOptions {
            theme: Theme::Minimalist,
            ..ViewOptions::default()
        };
        let svg = render_view(ViewMode::Month, 2026, 8, &options, &no_notes());
        assert!(svg.contains("#000000"));
        assert!(!svg.contains("#4472c4"));
    }

    // --- week ---

    #[test]
    fn week_svg_has_six_labelled_blocks() {
        let svg = render_view(ViewMode::Week, 2026, 8, &options(), &no_notes());
        for n in 1..=6 {
            assert!(svg.contains(&format!("Week {n}")), "missing week {n}");
        }
        assert_eq!(svg.matches("stroke=").count(), 42);
    }

    // --- year ---

    #[test]
    fn year_svg_has_all_months_and_sidebar() {
        let svg = render_view(ViewMode::Year, 2026, 1, &options(), &no_notes());
        for name in MONTH_NAMES {
            assert!(svg.contains(name), "missing {name}");
        }
        assert!(svg.contains("Holidays &amp; Observances"));
        assert!(svg.contains("Christmas Day"));
    }

    #[test]
    fn year_svg_drops_sidebar_when_holidays_hidden() {
        let options = ViewOptions {
            show_holidays: false,
            ..ViewOptions::default()
        };
        let svg = render_view(ViewMode::Year, 2026, 1, &options, &no_notes());
        assert!(!svg.contains("Holidays &amp; Observances"));
    }

    // --- truncate ---

    #[test]
    fn truncate_only_touches_long_text() {
        assert_eq!(truncate("short", 26), "short");
        let long = "a".repeat(40);
        let cut = truncate(&long, 26);
        assert_eq!(cut.chars().count(), 27);
        assert!(cut.ends_with('…'));
    }
}
