//! Core entity trait and the loosely-typed field view shared by every
//! text-analysis record.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// Represents different types of field values in an entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<FieldValue>),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::List(l) => {
                let items: Vec<String> = l.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            FieldValue::Null => write!(f, "null"),
        }
    }
}

/// Core trait for all text-analysis records.
///
/// `Clone` is a deep copy: entities own every nested sentiment, entity and
/// disambiguation record outright, so a clone never aliases its source.
/// `PartialEq`/`Hash` compare every declared field.
///
/// # Example
///
/// ```
/// use textfacets::{CategoryEntity, Entity};
///
/// let mut category = CategoryEntity::new();
/// category.set_category(Some(" arts_entertainment "));
/// category.set_score(Some(0.76));
///
/// assert_eq!(category.category(), Some("arts_entertainment"));
/// assert_eq!(Entity::score(&category), Some(0.76));
/// ```
pub trait Entity: Serialize + Clone + PartialEq + fmt::Debug + 'static {
    /// The name of this entity type
    const NAME: &'static str;

    /// Relevance used for ordering. Unscored kinds return `None`.
    fn score(&self) -> Option<f64> {
        None
    }

    /// One-line human description.
    fn summary(&self) -> String;

    /// Equality against a value of unknown type. Absent values and values
    /// of another type are never equal.
    fn equals_any(&self, other: Option<&dyn Any>) -> bool {
        match other {
            None => false,
            Some(other) => match other.downcast_ref::<Self>() {
                Some(other) => std::ptr::eq(self, other) || self == other,
                None => false,
            },
        }
    }

    /// Convert entity to an ordered field map
    fn to_fields(&self) -> Result<IndexMap<String, FieldValue>, serde_json::Error> {
        match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => Ok(map
                .into_iter()
                .map(|(k, v)| (k, json_value_to_field_value(v)))
                .collect()),
            _ => Ok(IndexMap::new()),
        }
    }

    /// Convert entity to JSON string
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Convert entity to pretty-printed JSON string
    fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert entity to NDJSON line (newline-delimited JSON)
    fn to_ndjson_line(&self) -> Result<String, serde_json::Error> {
        let json = self.to_json()?;
        Ok(format!("{}\n", json))
    }
}

/// Helper function to convert serde_json::Value to FieldValue
fn json_value_to_field_value(value: serde_json::Value) -> FieldValue {
    match value {
        serde_json::Value::String(s) => FieldValue::String(s),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                FieldValue::Int(i)
            } else if let Some(f) = n.as_f64() {
                FieldValue::Float(f)
            } else {
                FieldValue::Null
            }
        }
        serde_json::Value::Bool(b) => FieldValue::Bool(b),
        serde_json::Value::Array(arr) => {
            FieldValue::List(arr.into_iter().map(json_value_to_field_value).collect())
        }
        serde_json::Value::Null => FieldValue::Null,
        serde_json::Value::Object(_) => {
            // Nested records are flattened to their JSON text
            FieldValue::String(value.to_string())
        }
    }
}
