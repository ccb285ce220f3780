mod commands;
mod export;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use calprint_core::config::CalPrintConfig;
use calprint_core::constants::{YEAR_MAX, YEAR_MIN};
use calprint_core::view::{Theme, ViewMode, ViewOptions};
use clap::{Args, Parser, Subcommand};

use commands::note::NoteCommands;
use export::ExportFormat;

#[derive(Parser)]
#[command(name = "calprint")]
#[command(about = "Render, annotate and export printable calendars")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month view
    Month {
        year: i32,

        /// Month number (1-12) or English name (e.g. "september")
        month: String,

        #[command(flatten)]
        flags: ViewFlags,
    },
    /// Show the month broken into week blocks
    Week {
        year: i32,

        /// Month number (1-12) or English name
        month: String,

        /// Only show this week row (1-6)
        #[arg(short, long)]
        week: Option<usize>,

        #[command(flatten)]
        flags: ViewFlags,
    },
    /// Show the twelve-month year view
    Year {
        year: i32,

        #[command(flatten)]
        flags: ViewFlags,
    },
    /// List holidays and observances for a year
    Holidays {
        year: i32,

        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage per-day notes
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },
    /// Export a view to a standalone SVG or printable HTML document
    Export {
        /// View to export: month, week or year
        view: String,

        year: i32,

        /// Month number or name (month and week views)
        month: Option<String>,

        /// Output format: svg or html
        #[arg(short, long, default_value = "html")]
        format: String,

        /// Output file (defaults to calendar-<year>-<month>-<view>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open the exported document when done
        #[arg(long)]
        open: bool,

        #[command(flatten)]
        flags: ViewFlags,
    },
}

/// Per-invocation overrides of the configured view defaults.
#[derive(Args)]
struct ViewFlags {
    /// Theme: corporate or minimalist
    #[arg(long)]
    theme: Option<String>,

    /// Shade weekend cells
    #[arg(long)]
    pro: bool,

    /// Hide holiday annotations
    #[arg(long)]
    no_holidays: bool,

    /// Hide notes
    #[arg(long)]
    no_notes: bool,
}

impl ViewFlags {
    fn resolve(&self, config: &CalPrintConfig) -> Result<ViewOptions> {
        let mut options = config.view_options();

        if let Some(theme) = &self.theme {
            options.theme = theme.parse::<Theme>().map_err(|e| anyhow::anyhow!(e))?;
        }
        if self.pro {
            options.pro_mode = true;
        }
        if self.no_holidays {
            options.show_holidays = false;
        }
        if self.no_notes {
            options.show_notes = false;
        }

        Ok(options)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CalPrintConfig::load()?;

    match cli.command {
        Commands::Month { year, month, flags } => {
            let (year, month) = validate_page(year, &month)?;
            let options = flags.resolve(&config)?;
            commands::month::run(year, month, options, &config)
        }
        Commands::Week {
            year,
            month,
            week,
            flags,
        } => {
            let (year, month) = validate_page(year, &month)?;
            let options = flags.resolve(&config)?;
            commands::week::run(year, month, week, options, &config)
        }
        Commands::Year { year, flags } => {
            validate_year(year)?;
            let options = flags.resolve(&config)?;
            commands::year::run(year, options)
        }
        Commands::Holidays { year, json } => commands::holidays::run(year, json),
        Commands::Note { command } => commands::note::run(command, &config),
        Commands::Export {
            view,
            year,
            month,
            format,
            output,
            open,
            flags,
        } => {
            let mode: ViewMode = view.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            validate_year(year)?;

            let month = match (mode, month) {
                (ViewMode::Year, _) => None,
                (_, Some(m)) => Some(parse_month(&m)?),
                (_, None) => anyhow::bail!("The {} view needs a month", mode.as_str()),
            };

            let format: ExportFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            let options = flags.resolve(&config)?;
            commands::export::run(mode, year, month, format, output, open, options, &config)
        }
    }
}

/// The routing boundary: reject pages outside the supported range before
/// any grid code runs.
fn validate_page(year: i32, month: &str) -> Result<(i32, u32)> {
    validate_year(year)?;
    Ok((year, parse_month(month)?))
}

fn validate_year(year: i32) -> Result<()> {
    if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        anyhow::bail!("Year {} is out of range ({}-{})", year, YEAR_MIN, YEAR_MAX);
    }
    Ok(())
}

/// Accept a month number (1-12) or an English month name, matching the
/// `/2026/september` page convention.
fn parse_month(input: &str) -> Result<u32> {
    if let Ok(number) = input.parse::<u32>() {
        if (1..=12).contains(&number) {
            return Ok(number);
        }
        anyhow::bail!("Month {} is out of range (1-12)", number);
    }

    let lower = input.to_lowercase();
    render::MONTH_NAMES
        .iter()
        .position(|name| name.to_lowercase() == lower)
        .map(|index| index as u32 + 1)
        .ok_or_else(|| anyhow::anyhow!("Unknown month '{}'. Use 1-12 or an English month name", input))
}
