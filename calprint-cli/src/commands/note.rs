use anyhow::Result;
use calprint_core::config::CalPrintConfig;
use calprint_core::note::{FileNoteStore, NoteKey, NoteStore};
use chrono::{Datelike, NaiveDate};
use clap::Subcommand;
use owo_colors::OwoColorize;

#[derive(Subcommand)]
pub enum NoteCommands {
    /// Attach a note to a day, replacing any existing one
    Set {
        /// Day the note belongs to (YYYY-MM-DD)
        date: String,
        /// Note text; empty text clears the note
        text: String,
    },
    /// Print the note for a day
    Show {
        /// Day to look up (YYYY-MM-DD)
        date: String,
    },
    /// List all notes in date order
    List {
        /// Only list notes from this year
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Remove the note for a day
    Clear {
        /// Day to clear (YYYY-MM-DD)
        date: String,
    },
}

pub fn run(command: NoteCommands, config: &CalPrintConfig) -> Result<()> {
    let mut store = FileNoteStore::open(&config.notes_path())?;

    match command {
        NoteCommands::Set { date, text } => {
            let key = parse_note_date(&date)?;
            store.set(&key, &text)?;
            if text.trim().is_empty() {
                println!("{}", format!("Cleared note for {}", date).green());
            } else {
                println!("{}", format!("Saved note for {}", date).green());
            }
        }
        NoteCommands::Show { date } => {
            let key = parse_note_date(&date)?;
            match store.get(&key) {
                Some(text) => println!("{}", text),
                None => println!("{}", "No note".dimmed()),
            }
        }
        NoteCommands::List { year } => {
            let entries: Vec<_> = store
                .entries()
                .into_iter()
                .filter(|(key, _)| year.is_none_or(|y| key.year == y))
                .collect();

            if entries.is_empty() {
                println!("{}", "No notes yet".dimmed());
                return Ok(());
            }

            for (key, text) in entries {
                let label = format!("{}-{:02}-{:02}", key.year, key.month, key.day);
                println!("{}  {}", label.bold(), text);
            }
        }
        NoteCommands::Clear { date } => {
            let key = parse_note_date(&date)?;
            store.set(&key, "")?;
            println!("{}", format!("Cleared note for {}", date).green());
        }
    }

    Ok(())
}

/// Parse YYYY-MM-DD into a note key. Real calendar dates only; the grid's
/// unpadded key form is an internal detail.
fn parse_note_date(input: &str) -> Result<NoteKey> {
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", input))?;

    Ok(NoteKey::new(date.year(), date.month(), date.day()))
}
