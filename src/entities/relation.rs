//! Subject / action / object triples.

use super::{KeywordEntity, NamedEntity, SentimentEntity};
use crate::entity::Entity;
use crate::field::{parse_flag, NormalizedField};
use crate::vocab::{StringEnum, Tense};
use serde::{Deserialize, Serialize};

/// Main verb of a relation action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verb {
    text: NormalizedField,
    tense: Tense,
    negated: bool,
}

impl Verb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.get()
    }

    pub fn set_text(&mut self, text: Option<&str>) {
        self.text.set(text);
    }

    pub fn tense(&self) -> Tense {
        self.tense
    }

    pub fn set_tense(&mut self, tense: Option<Tense>) {
        self.tense = Tense::or_unset(tense);
    }

    pub fn set_tense_str(&mut self, raw: Option<&str>) {
        self.tense = Tense::parse_or(raw, self.tense);
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn set_negated(&mut self, negated: bool) {
        self.negated = negated;
    }

    pub fn set_negated_str(&mut self, raw: Option<&str>) {
        if let Some(negated) = parse_flag(raw) {
            self.negated = negated;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationAction {
    text: NormalizedField,
    lemmatized: NormalizedField,
    verb: Option<Verb>,
}

impl RelationAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.get()
    }

    pub fn set_text(&mut self, text: Option<&str>) {
        self.text.set(text);
    }

    pub fn lemmatized(&self) -> Option<&str> {
        self.lemmatized.get()
    }

    pub fn set_lemmatized(&mut self, lemmatized: Option<&str>) {
        self.lemmatized.set(lemmatized);
    }

    pub fn verb(&self) -> Option<&Verb> {
        self.verb.as_ref()
    }

    pub fn verb_mut(&mut self) -> &mut Verb {
        self.verb.get_or_insert_with(Verb::default)
    }

    pub fn set_verb(&mut self, verb: Option<Verb>) {
        self.verb = verb;
    }
}

/// Subject or object of a relation.
///
/// `sentiment_from_subject` is only reported for objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationArgument {
    text: NormalizedField,
    sentiment: Option<SentimentEntity>,
    sentiment_from_subject: Option<SentimentEntity>,
    entity: Option<NamedEntity>,
    keywords: Vec<KeywordEntity>,
}

impl RelationArgument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let mut argument = Self::new();
        argument.set_text(Some(text));
        argument
    }

    pub fn text(&self) -> Option<&str> {
        self.text.get()
    }

    pub fn set_text(&mut self, text: Option<&str>) {
        self.text.set(text);
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

    pub fn sentiment_from_subject(&self) -> Option<&SentimentEntity> {
        self.sentiment_from_subject.as_ref()
    }

    pub fn set_sentiment_from_subject(&mut self, sentiment: Option<SentimentEntity>) {
        self.sentiment_from_subject = sentiment;
    }

    pub fn entity(&self) -> Option<&NamedEntity> {
        self.entity.as_ref()
    }

    pub fn entity_mut(&mut self) -> &mut NamedEntity {
        self.entity.get_or_insert_with(NamedEntity::default)
    }

    pub fn set_entity(&mut self, entity: Option<NamedEntity>) {
        self.entity = entity;
    }

    pub fn add_keyword(&mut self, keyword: KeywordEntity) {
        self.keywords.push(keyword);
    }

    pub fn keywords(&self) -> &[KeywordEntity] {
        &self.keywords
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationEntity {
    subject: Option<RelationArgument>,
    action: Option<RelationAction>,
    object: Option<RelationArgument>,
}

impl RelationEntity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subject(&self) -> Option<&RelationArgument> {
        self.subject.as_ref()
    }

    pub fn subject_mut(&mut self) -> &mut RelationArgument {
        self.subject.get_or_insert_with(RelationArgument::default)
    }

    pub fn set_subject(&mut self, subject: Option<RelationArgument>) {
        self.subject = subject;
    }

    pub fn action(&self) -> Option<&RelationAction> {
        self.action.as_ref()
    }

    pub fn action_mut(&mut self) -> &mut RelationAction {
        self.action.get_or_insert_with(RelationAction::default)
    }

    pub fn set_action(&mut self, action: Option<RelationAction>) {
        self.action = action;
    }

    pub fn object(&self) -> Option<&RelationArgument> {
        self.object.as_ref()
    }

    pub fn object_mut(&mut self) -> &mut RelationArgument {
        self.object.get_or_insert_with(RelationArgument::default)
    }

    pub fn set_object(&mut self, object: Option<RelationArgument>) {
        self.object = object;
    }
}

impl Entity for RelationEntity {
    const NAME: &'static str = "relation";

    fn summary(&self) -> String {
        let subject = self.subject().and_then(|s| s.text()).unwrap_or("?");
        let object = self.object().and_then(|o| o.text()).unwrap_or("?");
        let action = self.action();
        let verb = action.and_then(|a| a.text()).unwrap_or("?");
        let negated = action.and_then(|a| a.verb()).map_or(false, Verb::is_negated);
        if negated {
            format!("{} -not- {} -> {}", subject, verb, object)
        } else {
            format!("{} -{}-> {}", subject, verb, object)
        }
    }
}
