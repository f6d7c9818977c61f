//! Native-speaker population figures.
//!
//! The service reports populations as free text: `"9342"`, `"674-9342"`,
//! `"6.45 million"` or `"1.322307-6.021120 million"`. The raw text is kept
//! verbatim and decomposed into integer bounds when it matches that grammar.

use crate::field::NormalizedField;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const MILLION: f64 = 1_000_000.0;

fn range_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^\s*(\d+(?:\.\d+)?)\s*(?:-\s*(\d+(?:\.\d+)?))?\s*(million)?\s*$")
            .expect("native speaker pattern is valid")
    })
}

/// Parse a population figure into `(minimum, maximum)`.
///
/// Without a `million` suffix both bounds must be whole numbers. Returns
/// `None` for anything outside the grammar.
pub fn parse_range(raw: &str) -> Option<(i64, i64)> {
    let caps = range_pattern().captures(raw)?;
    let low = caps.get(1)?.as_str();
    let high = caps.get(2).map_or(low, |m| m.as_str());

    if caps.get(3).is_some() {
        let scale = |n: &str| n.parse::<f64>().ok().map(|v| (v * MILLION).round() as i64);
        Some((scale(low)?, scale(high)?))
    } else {
        Some((low.parse::<i64>().ok()?, high.parse::<i64>().ok()?))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "NativeSpeakersRecord")]
pub struct NativeSpeakers {
    raw: NormalizedField,
    minimum: i64,
    maximum: i64,
}

/// Loaded form of [`NativeSpeakers`]: bounds are always re-derived from
/// the raw text.
#[derive(Deserialize)]
struct NativeSpeakersRecord {
    #[serde(default)]
    raw: Option<String>,
}

impl From<NativeSpeakersRecord> for NativeSpeakers {
    fn from(record: NativeSpeakersRecord) -> Self {
        Self::new(record.raw.as_deref())
    }
}

impl NativeSpeakers {
    pub fn new(raw: Option<&str>) -> Self {
        let mut speakers = Self::default();
        speakers.set(raw);
        speakers
    }

    /// Store the raw text and re-derive the bounds. Bounds fall back to
    /// zero when the text is absent or does not parse.
    pub fn set(&mut self, raw: Option<&str>) {
        self.raw.set(raw);
        let (minimum, maximum) = match self.raw.get() {
            Some(text) if !text.is_empty() => parse_range(text).unwrap_or_else(|| {
                tracing::debug!(value = text, "native speaker figure not understood");
                (0, 0)
            }),
            _ => (0, 0),
        };
        self.minimum = minimum;
        self.maximum = maximum;
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.get()
    }

    pub fn minimum(&self) -> i64 {
        self.minimum
    }

    pub fn maximum(&self) -> i64 {
        self.maximum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_integer() {
        assert_eq!(parse_range("9342"), Some((9342, 9342)));
    }

    #[test]
    fn test_integer_range() {
        assert_eq!(parse_range("674-9342"), Some((674, 9342)));
        assert_eq!(parse_range(" 674 - 9342 "), Some((674, 9342)));
    }

    #[test]
    fn test_millions() {
        assert_eq!(parse_range("6.45 million"), Some((6_450_000, 6_450_000)));
        assert_eq!(parse_range("12 Million"), Some((12_000_000, 12_000_000)));
        assert_eq!(
            parse_range("1.322307-6.021120 million"),
            Some((1_322_307, 6_021_120))
        );
    }

    #[test]
    fn test_garbage() {
        assert_eq!(parse_range("garbage"), None);
        assert_eq!(parse_range("6.45"), None);
        assert_eq!(parse_range("1-2-3"), None);
    }

    #[test]
    fn test_unparseable_keeps_raw_text() {
        let speakers = NativeSpeakers::new(Some("garbage"));
        assert_eq!(speakers.raw(), Some("garbage"));
        assert_eq!((speakers.minimum(), speakers.maximum()), (0, 0));
    }

    #[test]
    fn test_reset_clears_bounds() {
        let mut speakers = NativeSpeakers::new(Some("674-9342"));
        assert_eq!(speakers.maximum(), 9342);
        speakers.set(None);
        assert_eq!(speakers.raw(), None);
        assert_eq!((speakers.minimum(), speakers.maximum()), (0, 0));
    }

    #[test]
    fn test_deserialize_rederives_bounds() {
        let speakers: NativeSpeakers =
            serde_json::from_str(r#"{"raw": " 674-9342 ", "minimum": 1, "maximum": 2}"#).unwrap();
        assert_eq!(speakers.raw(), Some("674-9342"));
        assert_eq!((speakers.minimum(), speakers.maximum()), (674, 9342));

        let speakers: NativeSpeakers = serde_json::from_str(r#"{"maximum": 5}"#).unwrap();
        assert_eq!(speakers, NativeSpeakers::default());
    }
}
