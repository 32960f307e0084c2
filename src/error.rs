//! Error types for Libscrape

use thiserror::Error;

use crate::models::enums::{ItemField, LibrarySystem, RecordKind};

/// Per-record parse failure.
///
/// None of these abort a batch: the batch parser logs the error and moves on
/// to the next scraped item.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unsupported item format: {0:?}")]
    UnsupportedFormat(String),

    #[error("No parse rule for {system} {kind} records without a coarse format")]
    NoRule {
        system: LibrarySystem,
        kind: RecordKind,
    },

    #[error("Line {index} for {field} is out of range ({len} lines scraped)")]
    LineOutOfRange {
        field: ItemField,
        index: usize,
        len: usize,
    },

    #[error("Missing title/format separator in {0:?}")]
    MissingFormat(String),

    #[error("Parse rule maps no line for {0}")]
    UnmappedField(ItemField),
}

/// Result type alias for single-record parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// Application error type for the configuration and replay surface
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid capture file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
