//! Per-day note storage.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CalPrintError, CalPrintResult};
use crate::grid::CalendarDay;

/// Identifies the day a note belongs to.
///
/// The string form is unpadded `YYYY-M-D`, derived from the day's actual
/// year/month/day, so a note attached to a padding cell lands on the
/// real-world date rather than the grid's requested month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NoteKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl NoteKey {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        NoteKey { year, month, day }
    }

    pub fn for_day(day: &CalendarDay) -> Self {
        NoteKey::new(day.year, day.month, day.day)
    }

    /// Parse the stored string form back into a key.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.splitn(3, '-');
        let year = parts.next()?.parse().ok()?;
        let month = parts.next()?.parse().ok()?;
        let day = parts.next()?.parse().ok()?;
        Some(NoteKey { year, month, day })
    }
}

impl fmt::Display for NoteKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

/// Key-value interface the view layer uses to read and write notes.
///
/// Renderers only ever see this trait, so they are testable with the
/// in-memory implementation below instead of a real file.
pub trait NoteStore {
    fn get(&self, key: &NoteKey) -> Option<String>;

    /// Attach a note to a day, replacing any existing one. An empty value
    /// removes the entry.
    fn set(&mut self, key: &NoteKey, value: &str) -> CalPrintResult<()>;
}

/// In-memory store, used by tests and anything that doesn't need
/// persistence.
impl NoteStore for BTreeMap<NoteKey, String> {
    fn get(&self, key: &NoteKey) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &NoteKey, value: &str) -> CalPrintResult<()> {
        if value.trim().is_empty() {
            self.remove(key);
        } else {
            self.insert(*key, value.to_string());
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Default)]
struct NotesFile {
    #[serde(default)]
    notes: BTreeMap<String, String>,
}

/// Note store backed by a single TOML file. The whole file is read on open
/// and rewritten on every set; note volumes are tiny.
pub struct FileNoteStore {
    path: PathBuf,
    notes: BTreeMap<String, String>,
}

impl FileNoteStore {
    pub fn open(path: &Path) -> CalPrintResult<Self> {
        let notes = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let file: NotesFile = toml::from_str(&content)
                .map_err(|e| CalPrintError::NoteStore(format!("Could not parse {}: {e}", path.display())))?;
            file.notes
        } else {
            BTreeMap::new()
        };

        Ok(FileNoteStore {
            path: path.to_path_buf(),
            notes,
        })
    }

    /// All stored notes as (key, text), in chronological key order.
    pub fn entries(&self) -> Vec<(NoteKey, &str)> {
        let mut entries: Vec<(NoteKey, &str)> = self
            .notes
            .iter()
            .filter_map(|(k, v)| NoteKey::parse(k).map(|key| (key, v.as_str())))
            .collect();

        entries.sort_by_key(|(key, _)| *key);
        entries
    }

    fn save(&self) -> CalPrintResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = NotesFile {
            notes: self.notes.clone(),
        };
        let content = toml::to_string_pretty(&file)
            .map_err(|e| CalPrintError::Serialization(e.to_string()))?;

        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl NoteStore for FileNoteStore {
    fn get(&self, key: &NoteKey) -> Option<String> {
        self.notes.get(&key.to_string()).cloned()
    }

    fn set(&mut self, key: &NoteKey, value: &str) -> CalPrintResult<()> {
        if value.trim().is_empty() {
            self.notes.remove(&key.to_string());
        } else {
            self.notes.insert(key.to_string(), value.to_string());
        }
        self.save()
    }
}
