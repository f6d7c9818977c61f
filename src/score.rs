//! Relevance scores.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Neutral score stored when none was reported or the score was cleared.
pub const DEFAULT_SCORE: f64 = 0.0;

/// A relevance score that always holds a value.
///
/// Equality and hashing work on the bit pattern, so `NaN == NaN` and
/// `0.0 != -0.0`. That keeps `Eq` and `Hash` consistent for every entity
/// that embeds a score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// `None` resets to [`DEFAULT_SCORE`].
    pub fn set(&mut self, value: Option<f64>) {
        self.0 = value.unwrap_or(DEFAULT_SCORE);
    }

    /// Text form of [`Score::set`]. `None` resets; blank or malformed text
    /// leaves the current score untouched.
    pub fn set_str(&mut self, raw: Option<&str>) {
        let Some(raw) = raw else {
            self.0 = DEFAULT_SCORE;
            return;
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return;
        }
        match raw.parse::<f64>() {
            Ok(value) => self.0 = value,
            Err(_) => tracing::debug!(value = raw, "ignoring malformed score"),
        }
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(DEFAULT_SCORE)
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Score {}

impl Hash for Score {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Descending order on optional scores. An absent score sorts after every
/// present one.
pub fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_and_clear() {
        let mut score = Score::default();
        assert_eq!(score.value(), DEFAULT_SCORE);

        score.set(Some(0.75));
        assert_eq!(score.value(), 0.75);

        score.set(None);
        assert_eq!(score.value(), DEFAULT_SCORE);
    }

    #[test]
    fn test_set_str_tolerates_garbage() {
        let mut score = Score::new(0.5);
        score.set_str(Some("not a number"));
        assert_eq!(score.value(), 0.5);

        score.set_str(Some("  "));
        assert_eq!(score.value(), 0.5);

        score.set_str(Some(" 0.91 "));
        assert_eq!(score.value(), 0.91);

        score.set_str(None);
        assert_eq!(score.value(), DEFAULT_SCORE);
    }

    #[test]
    fn test_bitwise_equality() {
        assert_eq!(Score::new(f64::NAN), Score::new(f64::NAN));
        assert_ne!(Score::new(0.0), Score::new(-0.0));
    }

    #[test]
    fn test_descending_puts_absent_last() {
        let mut scores = vec![Some(0.2), None, Some(0.9), Some(0.5)];
        scores.sort_by(|a, b| descending(*a, *b));
        assert_eq!(scores, vec![Some(0.9), Some(0.5), Some(0.2), None]);
    }
}
