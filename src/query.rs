//! User query representation.
//!
//! A [`TravelQuery`] is built once per submission from the raw form
//! fields and never mutated afterwards. Validation happens entirely in
//! the constructor so that an incomplete or malformed query can be
//! rejected before any LLM call is made.

use crate::error::{Result, TravelGenieError};
use chrono::NaiveDate;

/// A validated travel query: where from, where to, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelQuery {
    /// Source location, free text (e.g., "Delhi").
    pub source: String,
    /// Destination location, free text (e.g., "Hyderabad").
    pub destination: String,
    /// Travel date.
    pub date: NaiveDate,
}

impl TravelQuery {
    /// Build a query from raw user input.
    ///
    /// Fields are trimmed; empty fields produce an
    /// [`IncompleteQuery`](TravelGenieError::IncompleteQuery) error naming
    /// every missing field, and a date that is not a `YYYY-MM-DD` calendar
    /// date produces [`InvalidDate`](TravelGenieError::InvalidDate).
    pub fn new(source: &str, destination: &str, date: &str) -> Result<Self> {
        let source = source.trim();
        let destination = destination.trim();
        let date = date.trim();

        let mut missing = Vec::new();
        if source.is_empty() {
            missing.push("source");
        }
        if destination.is_empty() {
            missing.push("destination");
        }
        if date.is_empty() {
            missing.push("travel date");
        }
        if !missing.is_empty() {
            return Err(TravelGenieError::IncompleteQuery(missing.join(", ")));
        }

        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| TravelGenieError::InvalidDate(date.to_string()))?;

        Ok(Self {
            source: source.to_string(),
            destination: destination.to_string(),
            date,
        })
    }

    /// Reject dates before `today`.
    ///
    /// `today` is passed in by the caller (the date-picker rule applies at
    /// selection time, and tests need a fixed clock).
    pub fn check_not_past(&self, today: NaiveDate) -> Result<()> {
        if self.date < today {
            return Err(TravelGenieError::PastDate {
                date: self.date,
                today,
            });
        }
        Ok(())
    }

    /// The travel date as the ISO 8601 string used in the prompt.
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
