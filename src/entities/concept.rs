use crate::disambiguation::Disambiguation;
use crate::entity::Entity;
use crate::field::NormalizedField;
use crate::score::Score;
use serde::{Deserialize, Serialize};

/// An abstract concept the text is about, possibly never named verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConceptEntity {
    concept: NormalizedField,
    score: Score,
    disambiguation: Disambiguation,
}

crate::forward_disambiguation!(ConceptEntity);

impl ConceptEntity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(concept: &str, score: f64) -> Self {
        let mut entity = Self::new();
        entity.set_concept(Some(concept));
        entity.set_score(Some(score));
        entity
    }

    pub fn concept(&self) -> Option<&str> {
        self.concept.get()
    }

    pub fn set_concept(&mut self, concept: Option<&str>) {
        self.concept.set(concept);
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

impl Entity for ConceptEntity {
    const NAME: &'static str = "concept";

    fn score(&self) -> Option<f64> {
        Some(self.score.value())
    }

    fn summary(&self) -> String {
        self.concept().unwrap_or_default().to_string()
    }
}
