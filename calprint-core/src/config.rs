//! Global calprint configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{CalPrintError, CalPrintResult};
use crate::view::{Theme, ViewOptions};

static DEFAULT_NOTES_FILE: &str = "~/.local/share/calprint/notes.toml";

fn default_notes_file() -> PathBuf {
    PathBuf::from(DEFAULT_NOTES_FILE)
}

fn is_default_notes_file(p: &PathBuf) -> bool {
    *p == default_notes_file()
}

fn default_true() -> bool {
    true
}

/// Global configuration at ~/.config/calprint/config.toml
///
/// Everything here is a default; CLI flags override per invocation.
#[derive(Serialize, Deserialize, Clone)]
pub struct CalPrintConfig {
    #[serde(default = "default_notes_file", skip_serializing_if = "is_default_notes_file")]
    pub notes_file: PathBuf,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub pro_mode: bool,

    #[serde(default = "default_true")]
    pub show_holidays: bool,

    #[serde(default = "default_true")]
    pub show_notes: bool,
}

impl Default for CalPrintConfig {
    fn default() -> Self {
        CalPrintConfig {
            notes_file: default_notes_file(),
            theme: Theme::Corporate,
            pro_mode: false,
            show_holidays: true,
            show_notes: true,
        }
    }
}

impl CalPrintConfig {
    pub fn load() -> CalPrintResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: CalPrintConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| CalPrintError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalPrintError::Config(e.to_string()))?;

        Ok(config)
    }

    pub fn config_path() -> CalPrintResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalPrintError::Config("Could not determine config directory".into()))?
            .join("calprint");

        Ok(config_dir.join("config.toml"))
    }

    /// Where notes are stored, with `~` expanded.
    pub fn notes_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.notes_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// The configured defaults as renderer options.
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            theme: self.theme,
            pro_mode: self.pro_mode,
            show_holidays: self.show_holidays,
            show_notes: self.show_notes,
        }
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> CalPrintResult<()> {
        let contents = format!(
            "\
# calprint configuration

# Where your notes live:
# notes_file = \"{}\"

# Theme for the year view and exports (corporate or minimalist):
# theme = \"corporate\"

# Shade weekend cells:
# pro_mode = false

# Annotate days with holidays:
# show_holidays = true

# Show notes in month and week views:
# show_notes = true
",
            DEFAULT_NOTES_FILE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalPrintError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalPrintError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_view_option_defaults() {
        let config = CalPrintConfig::default();
        let options = config.view_options();
        assert_eq!(options.theme, Theme::Corporate);
        assert!(!options.pro_mode);
        assert!(options.show_holidays);
        assert!(options.show_notes);
    }

    #[test]
    fn empty_config_file_deserializes_to_defaults() {
        let config: CalPrintConfig = toml::from_str("").unwrap();
        assert_eq!(config.notes_path().file_name().unwrap(), "notes.toml");
        assert!(config.show_notes);
    }

    #[test]
    fn partial_config_file_keeps_other_defaults() {
        let config: CalPrintConfig =
            toml::from_str("theme = \"minimalist\"\npro_mode = true\n").unwrap();
        assert_eq!(config.theme, Theme::Minimalist);
        assert!(config.pro_mode);
        assert!(config.show_holidays);
    }

    #[test]
    fn default_template_round_trips_as_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        CalPrintConfig::create_default_config(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let config: CalPrintConfig = toml::from_str(&contents).unwrap();
        assert_eq!(config.theme, Theme::Corporate);
    }
}
