//! Error types for the travel estimator.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our custom error.
pub type Result<T> = std::result::Result<T, TravelGenieError>;

/// Errors that can occur while estimating travel options.
#[derive(Error, Debug)]
pub enum TravelGenieError {
    /// One or more query fields were missing at submission time.
    /// Carries the names of the missing fields.
    #[error("Incomplete query: please provide {0}")]
    IncompleteQuery(String),

    /// The travel date could not be parsed as a calendar date.
    #[error("Invalid travel date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The travel date lies before the current date.
    #[error("Travel date {date} is in the past (today is {today})")]
    PastDate {
        date: chrono::NaiveDate,
        today: chrono::NaiveDate,
    },

    /// LLM API error.
    #[error("LLM API error: {0}")]
    LlmApi(String),

    /// HTTP request error.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The LLM reply was not valid JSON.
    #[error("Failed to parse LLM response as JSON: {0}")]
    ParseFailure(String),

    /// The reply was valid JSON but carried no `travel_options` key.
    #[error("No travel options found in the response")]
    MissingOptions,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error reading or writing files.
    #[error("I/O error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TravelGenieError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<reqwest::Error> for TravelGenieError {
    fn from(err: reqwest::Error) -> Self {
        TravelGenieError::Http(err.to_string())
    }
}
