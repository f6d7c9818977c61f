use crate::entity::Entity;
use crate::field::parse_flag;
use crate::score::Score;
use crate::vocab::{SentimentPolarity, StringEnum};
use serde::{Deserialize, Serialize};

/// Sentiment attached to a document, keyword, entity or relation argument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SentimentEntity {
    polarity: SentimentPolarity,
    score: Score,
    mixed: bool,
}

impl SentimentEntity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polarity(&self) -> SentimentPolarity {
        self.polarity
    }

    pub fn set_polarity(&mut self, polarity: Option<SentimentPolarity>) {
        self.polarity = SentimentPolarity::or_unset(polarity);
    }

    pub fn set_polarity_str(&mut self, raw: Option<&str>) {
        self.polarity = SentimentPolarity::parse_or(raw, self.polarity);
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

    pub fn is_mixed(&self) -> bool {
        self.mixed
    }

    pub fn set_mixed(&mut self, mixed: bool) {
        self.mixed = mixed;
    }

    pub fn set_mixed_str(&mut self, raw: Option<&str>) {
        if let Some(mixed) = parse_flag(raw) {
            self.mixed = mixed;
        }
    }
}

impl Entity for SentimentEntity {
    const NAME: &'static str = "sentiment";

    fn score(&self) -> Option<f64> {
        Some(self.score.value())
    }

    fn summary(&self) -> String {
        if self.mixed {
            format!("{} (mixed)", self.polarity)
        } else {
            self.polarity.to_string()
        }
    }
}
