use crate::entity::Entity;
use crate::field::NormalizedField;
use crate::score::Score;
use serde::{Deserialize, Serialize};

/// Document-level category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryEntity {
    category: NormalizedField,
    score: Score,
}

impl CategoryEntity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(category: &str, score: f64) -> Self {
        let mut entity = Self::new();
        entity.set_category(Some(category));
        entity.set_score(Some(score));
        entity
    }

    pub fn category(&self) -> Option<&str> {
        self.category.get()
    }

    pub fn set_category(&mut self, category: Option<&str>) {
        self.category.set(category);
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
}

impl Entity for CategoryEntity {
    const NAME: &'static str = "category";

    fn score(&self) -> Option<f64> {
        Some(self.score.value())
    }

    fn summary(&self) -> String {
        self.category().unwrap_or_default().to_string()
    }
}
