use super::SentimentEntity;
use crate::entity::Entity;
use crate::field::NormalizedField;
use crate::score::Score;
use serde::{Deserialize, Serialize};

/// Ranked keyword, optionally carrying its own sentiment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordEntity {
    keyword: NormalizedField,
    score: Score,
    sentiment: Option<SentimentEntity>,
}

impl KeywordEntity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(keyword: &str, score: f64) -> Self {
        let mut entity = Self::new();
        entity.set_keyword(Some(keyword));
        entity.set_score(Some(score));
        entity
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.get()
    }

    pub fn set_keyword(&mut self, keyword: Option<&str>) {
        self.keyword.set(keyword);
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

    pub fn sentiment(&self) -> Option<&SentimentEntity> {
        self.sentiment.as_ref()
    }

    pub fn sentiment_mut(&mut self) -> &mut SentimentEntity {
        self.sentiment.get_or_insert_with(SentimentEntity::default)
    }

    pub fn set_sentiment(&mut self, sentiment: Option<SentimentEntity>) {
        self.sentiment = sentiment;
    }
}

impl Entity for KeywordEntity {
    const NAME: &'static str = "keyword";

    fn score(&self) -> Option<f64> {
        Some(self.score.value())
    }

    fn summary(&self) -> String {
        let keyword = self.keyword().unwrap_or_default();
        match &self.sentiment {
            Some(sentiment) => format!("{} [{}]", keyword, sentiment.summary()),
            None => keyword.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::SentimentPolarity;

    #[test]
    fn test_clone_does_not_share_sentiment() {
        let mut original = KeywordEntity::with("tax reform", 0.94);
        original.sentiment_mut().set_polarity(Some(SentimentPolarity::Negative));

        let mut copy = original.clone();
        copy.sentiment_mut().set_polarity(Some(SentimentPolarity::Positive));
        copy.set_keyword(Some("budget"));

        assert_eq!(
            original.sentiment().map(|s| s.polarity()),
            Some(SentimentPolarity::Negative)
        );
        assert_eq!(original.keyword(), Some("tax reform"));
    }

    #[test]
    fn test_sentiment_participates_in_equality() {
        let plain = KeywordEntity::with("rates", 0.5);
        let mut with_sentiment = plain.clone();
        with_sentiment.sentiment_mut();
        assert_ne!(plain, with_sentiment);
    }
}
