//! Normalized text fields and loose scalar coercions.
//!
//! Every textual attribute of an entity goes through [`NormalizedField`]:
//! present values are trimmed on the way in, absent values stay absent.
//! Whitespace-only input becomes `Some("")`, never `None`.

use serde::{Deserialize, Serialize};

/// A trim-on-set text attribute.
///
/// Serializes as a plain string or null. Deserialized text is trimmed the
/// same way [`NormalizedField::set`] trims it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>")]
pub struct NormalizedField(Option<String>);

impl NormalizedField {
    pub fn new(value: Option<&str>) -> Self {
        let mut field = Self::default();
        field.set(value);
        field
    }

    /// Store `value.trim()`, or clear the field when `value` is `None`.
    pub fn set(&mut self, value: Option<&str>) {
        self.0 = value.map(|v| v.trim().to_string());
    }

    pub fn get(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// `true` when absent or stored as the empty string.
    pub fn is_blank(&self) -> bool {
        self.0.as_deref().map_or(true, str::is_empty)
    }
}

impl From<&str> for NormalizedField {
    fn from(value: &str) -> Self {
        Self::new(Some(value))
    }
}

impl From<Option<String>> for NormalizedField {
    fn from(value: Option<String>) -> Self {
        Self::new(value.as_deref())
    }
}

/// Returns the trimmed input when it carries any non-whitespace text.
pub(crate) fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// Loose boolean parsing: `true|yes|1` and `false|no|0`, case-insensitive.
pub fn parse_flag(raw: Option<&str>) -> Option<bool> {
    let raw = non_blank(raw)?;
    if ["true", "yes", "1"].iter().any(|t| raw.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if ["false", "no", "0"].iter().any(|t| raw.eq_ignore_ascii_case(t)) {
        Some(false)
    } else {
        tracing::debug!(value = raw, "ignoring unrecognized flag");
        None
    }
}

/// Loose integer parsing; blank or malformed text yields `None`.
pub fn parse_count(raw: Option<&str>) -> Option<i64> {
    let raw = non_blank(raw)?;
    match raw.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::debug!(value = raw, "ignoring malformed count");
            None
        }
    }
}
