use anyhow::Result;
use calprint_core::config::CalPrintConfig;
use calprint_core::note::FileNoteStore;
use calprint_core::view::ViewOptions;

use crate::render;

pub fn run(
    year: i32,
    month: u32,
    week: Option<usize>,
    options: ViewOptions,
    config: &CalPrintConfig,
) -> Result<()> {
    if let Some(week) = week {
        if !(1..=6).contains(&week) {
            anyhow::bail!("Week {} is out of range (1-6)", week);
        }
    }

    let notes = FileNoteStore::open(&config.notes_path())?;
    println!("{}", render::week_view(year, month, week, &options, &notes));
    Ok(())
}
