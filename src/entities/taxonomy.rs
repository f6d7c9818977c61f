use crate::entity::Entity;
use crate::field::{parse_flag, NormalizedField};
use crate::score::Score;
use serde::{Deserialize, Serialize};

/// Hierarchical taxonomy label such as `/finance/personal finance/lending`.
///
/// The service only reports `confident` when it is *not* confident, so a
/// fresh record starts out confident.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaxonomyEntity {
    label: NormalizedField,
    score: Score,
    confident: bool,
}

impl Default for TaxonomyEntity {
    fn default() -> Self {
        Self {
            label: NormalizedField::default(),
            score: Score::default(),
            confident: true,
        }
    }
}

impl TaxonomyEntity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(label: &str, score: f64) -> Self {
        let mut entity = Self::new();
        entity.set_label(Some(label));
        entity.set_score(Some(score));
        entity
    }

    pub fn label(&self) -> Option<&str> {
        self.label.get()
    }

    pub fn set_label(&mut self, label: Option<&str>) {
        self.label.set(label);
    }

    /// Path segments of the label, without empty segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.label
            .get()
            .unwrap_or_default()
            .split('/')
            .filter(|s| !s.is_empty())
    }

    pub fn score(&self) -> f64 {
        self.score.value()
    }

    pub fn set_score(&mut self, score: Option<f64>) {
        self.score.set(score);
    }

    pub fn set_score_str(&mut self, raw: Option<&str>) {
        self.score.set_str(raw);
    }

    pub fn is_confident(&self) -> bool {
        self.confident
    }

    pub fn set_confident(&mut self, confident: bool) {
        self.confident = confident;
    }

    pub fn set_confident_str(&mut self, raw: Option<&str>) {
        if let Some(confident) = parse_flag(raw) {
            self.confident = confident;
        }
    }
}

impl Entity for TaxonomyEntity {
    const NAME: &'static str = "taxonomy";

    fn score(&self) -> Option<f64> {
        Some(self.score.value())
    }

    fn summary(&self) -> String {
        let label = self.label().unwrap_or_default();
        if self.confident {
            label.to_string()
        } else {
            format!("{} (not confident)", label)
        }
    }
}
