//! Document export.
//!
//! Two-stage pipeline: a view is first rendered to a standalone SVG image,
//! then optionally packaged into a print-ready HTML page (A4 landscape,
//! watermarked). The grid and holiday data never depend on this module;
//! export failures are ordinary CLI errors.

mod svg;

pub use svg::render_view;

use std::path::PathBuf;
use std::str::FromStr;

use calprint_core::view::ViewMode;
use maud::{DOCTYPE, PreEscaped, html};

/// Watermark stamped at the foot of packaged documents.
pub const WATERMARK: &str = "Created with My Calendar App";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// The raw SVG image.
    Svg,
    /// Print-ready HTML page embedding the image.
    Html,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Html => "html",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(ExportFormat::Svg),
            "html" => Ok(ExportFormat::Html),
            _ => Err(format!("Unknown format '{s}'. Available: svg, html")),
        }
    }
}

/// Page set-up for the printable packaging.
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub size: &'static str,
    pub landscape: bool,
    pub margin_mm: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            size: "A4",
            landscape: true,
            margin_mm: 10,
        }
    }
}

/// Wrap a rendered image in a print-ready HTML page: the image centered
/// and scaled to fit the sheet, the watermark at the foot.
pub fn package_printable(image: &str, page: &PageConfig) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { "Printable calendar" }
                style { (PreEscaped(page_css(page))) }
            }
            body {
                main.sheet { (PreEscaped(image)) }
                footer.watermark { (WATERMARK) }
            }
        }
    }
    .into_string()
}

fn page_css(page: &PageConfig) -> String {
    let orientation = if page.landscape { "landscape" } else { "portrait" };

    format!(
        "@page {{ size: {size} {orientation}; margin: {margin}mm; }}\n\
         body {{ margin: 0; display: flex; flex-direction: column; align-items: center; font-family: Helvetica, Arial, sans-serif; }}\n\
         .sheet {{ display: flex; justify-content: center; width: 100%; }}\n\
         .sheet svg {{ max-width: 95%; height: auto; }}\n\
         .watermark {{ margin: 12px 0; color: rgb(200, 200, 200); font-size: 14px; text-align: center; }}\n",
        size = page.size,
        orientation = orientation,
        margin = page.margin_mm,
    )
}

/// Default output filename: `calendar-<year>-<month>-<view>.<ext>`, the
/// month omitted for the year view.
pub fn default_filename(
    mode: ViewMode,
    year: i32,
    month: Option<u32>,
    format: &ExportFormat,
) -> PathBuf {
    let stem = match month {
        Some(m) if mode != ViewMode::Year => format!("calendar-{year}-{m}-{}", mode.as_str()),
        _ => format!("calendar-{year}-{}", mode.as_str()),
    };

    PathBuf::from(format!("{stem}.{}", format.extension()))
}
