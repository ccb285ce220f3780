//! Renderer configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visual theme for the year view and exported documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Corporate,
    Minimalist,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "corporate" => Ok(Theme::Corporate),
            "minimalist" => Ok(Theme::Minimalist),
            _ => Err(format!(
                "Unknown theme '{s}'. Available: corporate, minimalist"
            )),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Theme::Corporate => write!(f, "corporate"),
            Theme::Minimalist => write!(f, "minimalist"),
        }
    }
}

/// Which calendar view to render or export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Month,
    Week,
    Year,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Month => "month",
            ViewMode::Week => "week",
            ViewMode::Year => "year",
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "month" => Ok(ViewMode::Month),
            "week" => Ok(ViewMode::Week),
            "year" => Ok(ViewMode::Year),
            _ => Err(format!("Unknown view '{s}'. Available: month, week, year")),
        }
    }
}

/// Immutable view configuration handed down to renderers, resolved once
/// from the config file and CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    pub theme: Theme,
    /// Shade weekend cells.
    pub pro_mode: bool,
    pub show_holidays: bool,
    pub show_notes: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        ViewOptions {
            theme: Theme::Corporate,
            pro_mode: false,
            show_holidays: true,
            show_notes: true,
        }
    }
}
