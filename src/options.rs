//! Data model for LLM travel estimates.
//!
//! The model is instructed to reply with `{"travel_options": [...]}`, but
//! it is free to vary the fields inside each option (and routinely does,
//! especially the shape of `estimated_cost`). An option is therefore an
//! open JSON object with a few expected keys rather than a rigid struct.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One candidate travel mode with its cost/duration estimate.
///
/// Field order is preserved as emitted by the model so downstream table
/// columns render in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TravelOption {
    fields: Map<String, Value>,
}

impl TravelOption {
    /// Look up a field by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The travel mode (e.g., "cab", "train", "bus", "flight").
    pub fn mode(&self) -> Option<&str> {
        self.fields.get("mode").and_then(Value::as_str)
    }

    /// The raw `estimated_cost` value, in whatever shape the model chose.
    pub fn estimated_cost(&self) -> Option<&Value> {
        self.fields.get("estimated_cost")
    }

    /// The raw `duration` value.
    pub fn duration(&self) -> Option<&Value> {
        self.fields.get("duration")
    }

    /// Iterate fields in encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

/// The parsed and validated reply: a sequence of travel options.
///
/// Exists only for one render cycle; nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelOptionsResult {
    pub travel_options: Vec<TravelOption>,
}

impl TravelOptionsResult {
    /// Whether the model returned any options at all.
    pub fn is_empty(&self) -> bool {
        self.travel_options.is_empty()
    }

    pub fn len(&self) -> usize {
        self.travel_options.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_option_accessors() {
        let option: TravelOption = serde_json::from_value(json!({
            "mode": "flight",
            "estimated_cost": {"currency": "INR", "min": 3000, "max": 5000},
            "duration": 2,
            "operator": "IndiGo"
        }))
        .unwrap();

        assert_eq!(option.mode(), Some("flight"));
        assert!(option.estimated_cost().unwrap().is_object());
        assert_eq!(option.duration(), Some(&json!(2)));
        assert_eq!(option.get("operator"), Some(&json!("IndiGo")));
        assert_eq!(option.get("nonexistent"), None);
    }

    #[test]
    fn test_fields_keep_encounter_order() {
        let option: TravelOption = serde_json::from_value(json!({
            "mode": "train",
            "duration": "12 hours",
            "estimated_cost": 500
        }))
        .unwrap();

        let keys: Vec<&str> = option.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["mode", "duration", "estimated_cost"]);
    }

    #[test]
    fn test_result_roundtrip() {
        let result: TravelOptionsResult = serde_json::from_value(json!({
            "travel_options": [
                {"mode": "bus", "estimated_cost": 800, "duration": "8-10"}
            ]
        }))
        .unwrap();

        assert_eq!(result.len(), 1);
        assert!(!result.is_empty());
        assert_eq!(result.travel_options[0].mode(), Some("bus"));
    }
}
