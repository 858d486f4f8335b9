//! Error types for the vscore engine

use thiserror::Error;

/// Result type alias using the vscore Error
pub type Result<T> = std::result::Result<T, Error>;

/// vscore error types
#[derive(Error, Debug)]
pub enum Error {
    /// A metric field holds a value outside its enumeration. Rejected at
    /// record construction, before any calculator runs.
    #[error("Invalid value `{value}` for metric {metric}")]
    InvalidMetricValue { metric: &'static str, value: String },

    /// A required base or threat metric is absent from the input.
    #[error("Missing required metric: {field}")]
    IncompleteRecord { field: &'static str },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Get an error code for logging/metrics
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidMetricValue { .. } => "INVALID_METRIC_VALUE",
            Error::IncompleteRecord { .. } => "INCOMPLETE_RECORD",
            Error::Configuration(_) => "CONFIG_ERROR",
            Error::Json(_) => "JSON_ERROR",
        }
    }
}
