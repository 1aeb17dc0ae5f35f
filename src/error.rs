//! Error types for the price history dashboard

use thiserror::Error;

/// Errors that can occur when fetching snapshots from a source
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network request failed
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Reading a local snapshot dump failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Body could not be parsed as a snapshot list
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Endpoint answered with a non-success status
    #[error("API error: {0}")]
    ApiError(String),

    /// Timeout waiting for response
    #[error("Request timeout")]
    Timeout,
}

/// What is wrong with a field of a snapshot record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDefect {
    /// Field (or one of its parents) is absent or null
    Missing,
    /// Field is present but not a number
    NotNumeric(String),
    /// Timestamp cannot be represented as an instant
    OutOfRange,
}

impl std::fmt::Display for FieldDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldDefect::Missing => write!(f, "missing"),
            FieldDefect::NotNumeric(raw) => write!(f, "not a number ({})", raw),
            FieldDefect::OutOfRange => write!(f, "out of range"),
        }
    }
}

/// Errors raised while turning snapshot records into a price series
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// No records to transform
    #[error("Cannot build a price series from zero records")]
    EmptyInput,

    /// A record lacks a required field; the whole batch is rejected
    #[error("Malformed record #{index}{}: field `{field}` is {defect}", fmt_timestamp(.timestamp))]
    MalformedRecord {
        /// Position of the record in the input
        index: usize,
        /// Record timestamp, when it could be read
        timestamp: Option<i64>,
        /// Dotted path of the offending field
        field: String,
        defect: FieldDefect,
    },
}

fn fmt_timestamp(timestamp: &Option<i64>) -> String {
    match timestamp {
        Some(ts) => format!(" (timestamp {})", ts),
        None => String::new(),
    }
}

impl TransformError {
    /// Creates a MalformedRecord error
    pub fn malformed(
        index: usize,
        timestamp: Option<i64>,
        field: impl Into<String>,
        defect: FieldDefect,
    ) -> Self {
        Self::MalformedRecord {
            index,
            timestamp,
            field: field.into(),
            defect,
        }
    }
}

/// Errors raised while presenting a price series
#[derive(Debug, Error)]
pub enum PresentError {
    /// Chart backend failed to draw
    #[error("Chart error: {0}")]
    Chart(String),

    /// Writing the rendered output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PresentError {
    /// Creates a Chart error
    pub fn chart(msg: impl Into<String>) -> Self {
        Self::Chart(msg.into())
    }
}

/// Errors from a full fetch-transform-render pass
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Present(#[from] PresentError),
}
