use anyhow::Result;
use calprint_core::config::CalPrintConfig;
use calprint_core::note::FileNoteStore;
use calprint_core::view::ViewOptions;

use crate::render;

pub fn run(year: i32, month: u32, options: ViewOptions, config: &CalPrintConfig) -> Result<()> {
    let notes = FileNoteStore::open(&config.notes_path())?;
    println!("{}", render::month_view(year, month, &options, &notes));
    Ok(())
}
