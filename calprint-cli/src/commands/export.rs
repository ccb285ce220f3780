use std::path::PathBuf;

use anyhow::{Context, Result};
use calprint_core::config::CalPrintConfig;
use calprint_core::note::FileNoteStore;
use calprint_core::view::{ViewMode, ViewOptions};
use owo_colors::OwoColorize;

use crate::export::{self, ExportFormat, PageConfig};

pub fn run(
    mode: ViewMode,
    year: i32,
    month: Option<u32>,
    format: ExportFormat,
    output: Option<PathBuf>,
    open_after: bool,
    options: ViewOptions,
    config: &CalPrintConfig,
) -> Result<()> {
    let notes = FileNoteStore::open(&config.notes_path())?;
    let image = export::render_view(mode, year, month.unwrap_or(1), &options, &notes);

    let document = match format {
        ExportFormat::Svg => image,
        ExportFormat::Html => export::package_printable(&image, &PageConfig::default()),
    };

    let path = output.unwrap_or_else(|| export::default_filename(mode, year, month, &format));
    std::fs::write(&path, document)
        .with_context(|| format!("Could not write {}", path.display()))?;

    println!("{}", format!("Exported {}", path.display()).green());

    if open_after {
        open::that(&path).with_context(|| format!("Could not open {}", path.display()))?;
    }

    Ok(())
}
