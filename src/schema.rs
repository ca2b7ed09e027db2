//! Response schema shared by the prompt builder and the validator.
//!
//! The instructions embedded in the system prompt and the validation of
//! the parsed reply are generated from the same [`ResponseSchema`] value,
//! so the two can never drift apart. The schema is deliberately loose:
//! it pins the top-level shape (an object with a `travel_options` array)
//! and leaves the nested cost representations to the model.

use crate::error::{Result, TravelGenieError};
use crate::options::{TravelOption, TravelOptionsResult};
use serde_json::Value;

/// Schema for the expected LLM reply.
#[derive(Debug, Clone)]
pub struct ResponseSchema {
    root_key: String,
}

impl ResponseSchema {
    /// Schema with a custom root key.
    pub fn new(root_key: impl Into<String>) -> Self {
        Self {
            root_key: root_key.into(),
        }
    }

    /// The schema for travel option replies.
    pub fn travel_options() -> Self {
        Self::new("travel_options")
    }

    /// The key the reply's option array must live under.
    pub fn root_key(&self) -> &str {
        &self.root_key
    }

    /// Generate the output-format instructions for the system prompt.
    pub fn format_instructions(&self) -> String {
        format!(
            r#"The response must be a single JSON object with a "{root}" key holding an array of option objects:
{{
    "{root}": [
        {{
            "mode": <travel mode, e.g. "cab", "train", "bus" or "flight">,
            "estimated_cost": <an object with "currency", "min" and "max", or an object keyed by fare class each holding "currency", "min" and "max", or a plain number>,
            "duration": <travel time in hours>
        }},
        ...
    ]
}}
Directly return the final JSON structure. Do not output anything else."#,
            root = self.root_key
        )
    }

    /// Validate a parsed reply against the schema.
    ///
    /// A reply without the root key is a
    /// [`MissingOptions`](TravelGenieError::MissingOptions) error (shown to
    /// the user as "no options found"); a root value that is not an array
    /// of objects is a [`ParseFailure`](TravelGenieError::ParseFailure).
    pub fn validate(&self, value: &Value) -> Result<TravelOptionsResult> {
        let Some(options) = value.get(&self.root_key) else {
            return Err(TravelGenieError::MissingOptions);
        };

        let travel_options: Vec<TravelOption> =
            serde_json::from_value(options.clone()).map_err(|e| {
                TravelGenieError::ParseFailure(format!(
                    "`{}` is not an array of option objects: {}",
                    self.root_key, e
                ))
            })?;

        Ok(TravelOptionsResult { travel_options })
    }
}

impl Default for ResponseSchema {
    fn default() -> Self {
        Self::travel_options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_instructions_name_the_root_key() {
        let schema = ResponseSchema::travel_options();
        let instructions = schema.format_instructions();
        assert!(instructions.contains(r#""travel_options""#));
        assert!(instructions.contains("estimated_cost"));
        assert!(instructions.contains("duration"));
    }

    #[test]
    fn test_validate_accepts_well_formed_reply() {
        let schema = ResponseSchema::travel_options();
        let value = json!({
            "travel_options": [
                {"mode": "flight", "estimated_cost": 3000, "duration": 2}
            ]
        });

        let result = schema.validate(&value).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_validate_missing_root_key() {
        let schema = ResponseSchema::travel_options();
        let err = schema.validate(&json!({})).unwrap_err();
        assert!(matches!(err, TravelGenieError::MissingOptions));
    }

    #[test]
    fn test_validate_root_key_wrong_shape() {
        let schema = ResponseSchema::travel_options();
        let err = schema
            .validate(&json!({"travel_options": "none today"}))
            .unwrap_err();
        assert!(matches!(err, TravelGenieError::ParseFailure(_)));
    }

    #[test]
    fn test_empty_array_is_valid() {
        let schema = ResponseSchema::travel_options();
        let result = schema.validate(&json!({"travel_options": []})).unwrap();
        assert!(result.is_empty());
    }
}
