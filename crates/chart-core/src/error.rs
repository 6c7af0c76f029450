// File: crates/chart-core/src/error.rs
// Summary: Error type shared by dataset validation, configuration and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("dataset is empty")]
    EmptyDataset,

    #[error("record {index}: unparseable date '{text}': {source}")]
    InvalidDate {
        index: usize,
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("record {index}: {field} is not a finite number")]
    NonFinite { index: usize, field: &'static str },

    #[error("record {index}: {field} = {value} outside [{min}, {max}]")]
    OutOfRange {
        index: usize,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("record {index}: {field} = {value} must be positive")]
    NotPositive {
        index: usize,
        field: &'static str,
        value: f64,
    },

    #[error("record {index}: date {date} does not follow {previous}")]
    Unordered {
        index: usize,
        date: chrono::NaiveDate,
        previous: chrono::NaiveDate,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;
