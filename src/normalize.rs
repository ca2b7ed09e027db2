//! Result normalizer.
//!
//! The model varies the shapes of `estimated_cost` and `duration` from
//! reply to reply: a flat `{currency, min, max}` range, a per-fare-class
//! object, a bare number, free text. This module reshapes every variant
//! into a single display string and builds the row-oriented [`Table`].
//!
//! Both transforms are total: any value, however odd, resolves to some
//! string. An unrecognized shape degrades to its raw JSON form and is
//! logged, never raised.

use crate::options::TravelOptionsResult;
use crate::table::Table;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Verbose free-text fields excluded from tabular display.
const DROPPED_COLUMNS: &[&str] = &["details", "notes"];

/// One fare class inside a multi-class cost object.
#[derive(Debug, Clone, PartialEq)]
pub struct FareClass {
    /// Class label as emitted by the model (e.g., "1AC", "2AC").
    pub label: String,
    pub currency: String,
    pub min: Value,
    pub max: Value,
}

/// Classified shape of an `estimated_cost` value.
#[derive(Debug, Clone, PartialEq)]
pub enum CostShape {
    /// `{"currency": ..., "min": ..., "max": ...}`
    FlatRange {
        currency: String,
        min: Value,
        max: Value,
    },
    /// Object keyed by fare-class labels, each holding a flat range.
    /// Classes keep the order they appear in the source object.
    MultiClass(Vec<FareClass>),
    /// A bare number or string.
    Scalar(Value),
    /// Any other shape; renders as its compact JSON string.
    Unrecognized(Value),
}

impl CostShape {
    /// Classify a raw `estimated_cost` value.
    pub fn classify(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return CostShape::Scalar(value.clone());
        };

        if let (Some(currency), Some(min), Some(max)) = (
            object.get("currency"),
            object.get("min"),
            object.get("max"),
        ) {
            return CostShape::FlatRange {
                currency: scalar_display(currency),
                min: min.clone(),
                max: max.clone(),
            };
        }

        let mut classes = Vec::with_capacity(object.len());
        for (label, entry) in object {
            let Some(range) = entry.as_object() else {
                return CostShape::Unrecognized(value.clone());
            };
            let (Some(currency), Some(min), Some(max)) = (
                range.get("currency"),
                range.get("min"),
                range.get("max"),
            ) else {
                return CostShape::Unrecognized(value.clone());
            };
            classes.push(FareClass {
                label: label.clone(),
                currency: scalar_display(currency),
                min: min.clone(),
                max: max.clone(),
            });
        }

        if classes.is_empty() {
            return CostShape::Unrecognized(value.clone());
        }

        CostShape::MultiClass(classes)
    }
}

impl fmt::Display for CostShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostShape::FlatRange { currency, min, max } => {
                write!(
                    f,
                    "{} {} - {}",
                    currency,
                    scalar_display(min),
                    scalar_display(max)
                )
            }
            CostShape::MultiClass(classes) => {
                let segments: Vec<String> = classes
                    .iter()
                    .map(|c| {
                        format!(
                            "{}: {} {}-{}",
                            c.label,
                            c.currency,
                            scalar_display(&c.min),
                            scalar_display(&c.max)
                        )
                    })
                    .collect();
                write!(f, "{}", segments.join(", "))
            }
            CostShape::Scalar(value) => write!(f, "{}", scalar_display(value)),
            CostShape::Unrecognized(value) => write!(f, "{}", value),
        }
    }
}

/// Render an `estimated_cost` value as one display string.
pub fn format_cost(value: &Value) -> String {
    let shape = CostShape::classify(value);
    if let CostShape::Unrecognized(raw) = &shape {
        tracing::warn!(cost = %raw, "unrecognized estimated_cost shape, using raw display");
    }
    shape.to_string()
}

/// Render a `duration` value as one display string.
///
/// Numbers become `"{n} hours"`. Text gets its range separator collapsed
/// (`" - "` to `"-"`), surrounding whitespace trimmed, and `" hours"`
/// appended unless already present.
pub fn clean_duration(value: &Value) -> String {
    if value.is_number() {
        return format!("{} hours", value);
    }

    let text = scalar_display(value).replace(" - ", "-");
    let text = text.trim();
    if text.contains("hours") {
        text.to_string()
    } else {
        format!("{} hours", text)
    }
}

/// Default string form of an arbitrary JSON value: strings render bare
/// (no quotes), everything else as compact JSON.
fn scalar_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Build a display table from a validated result.
///
/// Columns collect in first-seen encounter order across options; the
/// `details`/`notes` fields are dropped. Cost and duration fields go
/// through their formatters, everything else through the default string
/// conversion. A malformed field degrades in place without affecting
/// other rows or columns.
pub fn normalize(result: &TravelOptionsResult) -> Table {
    let mut columns: Vec<String> = Vec::new();
    let mut rows: Vec<HashMap<String, String>> = Vec::new();

    for option in &result.travel_options {
        let mut row = HashMap::new();

        for (key, value) in option.iter() {
            if DROPPED_COLUMNS.contains(&key.as_str()) {
                continue;
            }
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }

            let display = match key.as_str() {
                "estimated_cost" => format_cost(value),
                "duration" => clean_duration(value),
                _ => scalar_display(value),
            };
            row.insert(key.clone(), display);
        }

        rows.push(row);
    }

    Table::new(columns, rows)
}
