//! Error types for the calprint ecosystem.

use thiserror::Error;

/// Errors that can occur in calprint operations.
///
/// Grid and holiday computation are pure and total; only the surrounding
/// infrastructure (config, note storage) can fail.
#[derive(Error, Debug)]
pub enum CalPrintError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Note store error: {0}")]
    NoteStore(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for calprint operations.
pub type CalPrintResult<T> = Result<T, CalPrintError>;
