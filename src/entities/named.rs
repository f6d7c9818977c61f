use super::{QuotationEntity, SentimentEntity};
use crate::disambiguation::Disambiguation;
use crate::entity::Entity;
use crate::field::{parse_count, NormalizedField};
use crate::score::Score;
use serde::{Deserialize, Serialize};

/// A person, place, organization or other named entity found in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedEntity {
    #[serde(rename = "type")]
    entity_type: NormalizedField,
    text: NormalizedField,
    count: i64,
    score: Score,
    sentiment: Option<SentimentEntity>,
    disambiguation: Disambiguation,
    quotations: Vec<QuotationEntity>,
}

crate::forward_disambiguation!(NamedEntity);

impl NamedEntity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(entity_type: &str, text: &str, score: f64) -> Self {
        let mut entity = Self::new();
        entity.set_entity_type(Some(entity_type));
        entity.set_text(Some(text));
        entity.set_score(Some(score));
        entity
    }

    pub fn entity_type(&self) -> Option<&str> {
        self.entity_type.get()
    }

    pub fn set_entity_type(&mut self, entity_type: Option<&str>) {
        self.entity_type.set(entity_type);
    }

    pub fn text(&self) -> Option<&str> {
        self.text.get()
    }

    pub fn set_text(&mut self, text: Option<&str>) {
        self.text.set(text);
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn set_count(&mut self, count: i64) {
        self.count = count;
    }

    /// `None` clears the count to zero; malformed text is ignored.
    pub fn set_count_str(&mut self, raw: Option<&str>) {
        match raw {
            None => self.count = 0,
            Some(_) => {
                if let Some(count) = parse_count(raw) {
                    self.count = count;
                }
            }
        }
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

    pub fn add_quotation(&mut self, quotation: QuotationEntity) {
        self.quotations.push(quotation);
    }

    pub fn quotations(&self) -> &[QuotationEntity] {
        &self.quotations
    }
}

impl Entity for NamedEntity {
    const NAME: &'static str = "entity";

    fn score(&self) -> Option<f64> {
        Some(self.score.value())
    }

    fn summary(&self) -> String {
        let mut out = format!(
            "{} [{}]",
            self.text().unwrap_or_default(),
            self.entity_type().unwrap_or_default()
        );
        if self.count > 0 {
            out.push_str(&format!(" x{}", self.count));
        }
        if let Some(name) = self.disambiguated_name().filter(|n| !n.is_empty()) {
            out.push_str(&format!(" -> {}", name));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forwarded_accessors() {
        let mut entity = NamedEntity::with("Country", "Israel", 0.88);
        entity.set_disambiguated_name(Some(" Israel "));
        entity.set_dbpedia(Some("http://dbpedia.org/resource/Israel"));
        entity.set_geo(Some("31.0 35.0"));
        entity.add_subtype(Some("Location"));
        entity.add_subtype(Some("Location"));
        entity.add_subtype(None);

        assert_eq!(entity.disambiguated_name(), Some("Israel"));
        assert_eq!(entity.disambiguation().dbpedia(), Some("http://dbpedia.org/resource/Israel"));
        assert_eq!(entity.latitude(), 31.0);
        assert_eq!(entity.longitude(), 35.0);
        assert_eq!(entity.subtypes().collect::<Vec<_>>(), vec!["Location"]);
        assert_eq!(entity.summary(), "Israel [Country] -> Israel");
    }

    #[test]
    fn test_count_from_text() {
        let mut entity = NamedEntity::new();
        entity.set_count_str(Some("3"));
        assert_eq!(entity.count(), 3);
        entity.set_count_str(Some("three"));
        assert_eq!(entity.count(), 3);
        entity.set_count_str(None);
        assert_eq!(entity.count(), 0);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = NamedEntity::with("Person", "Ada Lovelace", 0.9);
        original.add_subtype(Some("Scientist"));
        original.add_quotation(QuotationEntity::with("The Analytical Engine weaves"));
        original.sentiment_mut().set_score(Some(0.4));

        let mut copy = original.clone();
        copy.add_subtype(Some("Writer"));
        copy.add_quotation(QuotationEntity::with("another"));
        copy.sentiment_mut().set_score(Some(-0.4));
        copy.set_geo(Some("51.5 -0.12"));

        assert_eq!(original.subtypes().count(), 1);
        assert_eq!(original.quotations().len(), 1);
        assert_eq!(original.sentiment().map(|s| s.score()), Some(0.4));
        assert_eq!(original.geo(), None);
    }
}
