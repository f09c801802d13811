//! Error types for hemeroteca

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using HemerotecaError
pub type Result<T> = std::result::Result<T, HemerotecaError>;

/// Error type alias for convenience
pub type Error = HemerotecaError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for hemeroteca
#[derive(Debug, Error)]
pub enum HemerotecaError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database already exists: {0}")]
    DatabaseExists(PathBuf),

    #[error("CSV file not found: {0}")]
    CsvFileNotFound(PathBuf),

    #[error("Periodical not found: {0}")]
    PeriodicalNotFound(i64),

    #[error("Invalid search term: {0}")]
    InvalidTerm(String),

    #[error("Page out of range: {0}")]
    PageOutOfRange(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl HemerotecaError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PeriodicalNotFound(_) | Self::CsvFileNotFound(_) => exit_codes::NOT_FOUND,
            Self::InvalidTerm(_) | Self::PageOutOfRange(_) | Self::Config(_) => {
                exit_codes::INVALID_INPUT
            }
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
