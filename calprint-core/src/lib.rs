//! Core types for the calprint ecosystem.
//!
//! This crate provides the pieces shared by the calprint CLI and any other
//! frontend:
//! - `grid` for the 42-cell month grid every view is built from
//! - `holiday` for the fixed-date holiday catalog
//! - `note` for per-day note storage
//! - `view` for renderer configuration

pub mod config;
pub mod constants;
pub mod error;
pub mod grid;
pub mod holiday;
pub mod note;
pub mod view;

// Re-export the core calendar functions at crate root for convenience
pub use error::{CalPrintError, CalPrintResult};
pub use grid::{CalendarDay, GRID_CELLS, month_grid, month_grid_on};
pub use holiday::{Holiday, HolidayKind, holiday_on, holidays_for_year};
