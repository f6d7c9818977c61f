//! Raw-record intake: turns decoder output into typed entities.
//!
//! The decoder hands over `serde_json::Value` trees whose leaves may be
//! strings, numbers, booleans or null. [`RawRecord`] reads those leaves by
//! dotted [`FieldPath`] as loose text, and every [`FromRawRecord`] impl
//! feeds that text through the entity's normalizing setters.

use crate::entities::{
    AuthorEntity, CategoryEntity, ConceptEntity, HeaderEntity, ImageEntity, KeywordEntity,
    LanguageEntity, MicroformatEntity, NamedEntity, QuotationEntity, RelationAction,
    RelationArgument, RelationEntity, SentimentEntity, TaxonomyEntity, TitleEntity, Verb,
};
use crate::disambiguation::Disambiguation;
use crate::entity::Entity;
use crate::response::Response;
use serde_json::{Map, Value};
use std::fmt;

/// Error type for intake operations
#[derive(Debug)]
pub enum IntakeError {
    NotAnObject { context: String },
    NotAnArray { field: String },
    MissingField { field: String },
    Json(serde_json::Error),
}

impl fmt::Display for IntakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeError::NotAnObject { context } => write!(f, "Expected a JSON object for {}", context),
            IntakeError::NotAnArray { field } => write!(f, "Field '{}' is not an array", field),
            IntakeError::MissingField { field } => write!(f, "Required field '{}' is missing", field),
            IntakeError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for IntakeError {}

impl From<serde_json::Error> for IntakeError {
    fn from(err: serde_json::Error) -> Self {
        IntakeError::Json(err)
    }
}

/// Represents a path to a field in a raw record
///
/// # Examples
///
/// - `text` - top-level field
/// - `disambiguated.geo` - nested field
/// - `quotations.[0].quotation` - array element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    /// The raw path string
    pub raw: String,
    /// Parsed path segments
    pub segments: Vec<PathSegment>,
}

/// A segment in a field path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A named field (e.g., "sentiment", "score")
    Field(String),
    /// An array index (e.g., [0], [5])
    Index(usize),
}

impl FieldPath {
    /// Parse a field path with a given delimiter
    pub fn parse(path: &str, delimiter: &str) -> Self {
        let segments = path
            .split(delimiter)
            .filter(|s| !s.is_empty())
            .map(|s| {
                if s.starts_with('[') && s.ends_with(']') {
                    if let Ok(index) = s[1..s.len() - 1].parse::<usize>() {
                        return PathSegment::Index(index);
                    }
                }
                PathSegment::Field(s.to_string())
            })
            .collect();

        Self {
            raw: path.to_string(),
            segments,
        }
    }

    /// Create a field path from a dotted string (common format)
    pub fn from_dotted(path: &str) -> Self {
        Self::parse(path, ".")
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Trait for types that can extract loose text values by field path
pub trait Extractor {
    /// Extract the value at the given path as text. Absent paths and JSON
    /// `null` both yield `None`.
    fn extract(&self, path: &FieldPath) -> Option<String>;

    /// Extract a value and parse it to a specific type
    fn extract_as<T>(&self, path: &FieldPath) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.extract(path).and_then(|s| s.trim().parse().ok())
    }
}

/// One JSON object from the decoder.
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    object: &'a Map<String, Value>,
}

impl<'a> RawRecord<'a> {
    pub fn new(value: &'a Value) -> Result<Self, IntakeError> {
        value
            .as_object()
            .map(|object| Self { object })
            .ok_or_else(|| IntakeError::NotAnObject {
                context: "raw record".to_string(),
            })
    }

    fn resolve(&self, path: &FieldPath) -> Option<&'a Value> {
        let mut segments = path.segments.iter();
        let mut current = match segments.next()? {
            PathSegment::Field(name) => self.object.get(name)?,
            PathSegment::Index(_) => return None,
        };
        for segment in segments {
            current = match segment {
                PathSegment::Field(name) => current.get(name.as_str())?,
                PathSegment::Index(index) => current.get(*index)?,
            };
        }
        Some(current)
    }

    /// Loose text at a dotted path.
    pub fn text(&self, path: &str) -> Option<String> {
        self.extract(&FieldPath::from_dotted(path))
    }

    /// Nested object at a dotted path.
    pub fn child(&self, path: &str) -> Option<RawRecord<'a>> {
        self.resolve(&FieldPath::from_dotted(path))
            .and_then(Value::as_object)
            .map(|object| RawRecord { object })
    }

    /// Objects of the array at a dotted path. Non-object elements are
    /// skipped; a missing field yields an empty list.
    pub fn children(&self, path: &str) -> Result<Vec<RawRecord<'a>>, IntakeError> {
        match self.resolve(&FieldPath::from_dotted(path)) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items
                .iter()
                .filter_map(Value::as_object)
                .map(|object| RawRecord { object })
                .collect()),
            Some(_) => Err(IntakeError::NotAnArray {
                field: path.to_string(),
            }),
        }
    }

    /// Text values of the array at a dotted path.
    pub fn texts(&self, path: &str) -> Vec<String> {
        match self.resolve(&FieldPath::from_dotted(path)) {
            Some(Value::Array(items)) => items.iter().filter_map(value_text).collect(),
            Some(other) => value_text(other).into_iter().collect(),
            None => Vec::new(),
        }
    }

    pub fn has(&self, path: &str) -> bool {
        self.resolve(&FieldPath::from_dotted(path)).is_some()
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

impl Extractor for RawRecord<'_> {
    fn extract(&self, path: &FieldPath) -> Option<String> {
        self.resolve(path).and_then(value_text)
    }
}

/// Build an entity from one raw record through its normalizing setters.
pub trait FromRawRecord: Sized {
    fn from_raw(record: &RawRecord<'_>) -> Result<Self, IntakeError>;

    fn from_value(value: &Value) -> Result<Self, IntakeError> {
        Self::from_raw(&RawRecord::new(value)?)
    }
}

impl FromRawRecord for SentimentEntity {
    fn from_raw(record: &RawRecord<'_>) -> Result<Self, IntakeError> {
        let mut sentiment = SentimentEntity::new();
        sentiment.set_polarity_str(record.text("type").as_deref());
        sentiment.set_score_str(record.text("score").as_deref());
        sentiment.set_mixed_str(record.text("mixed").as_deref());
        Ok(sentiment)
    }
}

fn sentiment_at(record: &RawRecord<'_>, path: &str) -> Result<Option<SentimentEntity>, IntakeError> {
    record.child(path).map(|r| SentimentEntity::from_raw(&r)).transpose()
}

impl FromRawRecord for CategoryEntity {
    fn from_raw(record: &RawRecord<'_>) -> Result<Self, IntakeError> {
        let mut category = CategoryEntity::new();
        category.set_category(record.text("category").as_deref());
        category.set_score_str(record.text("score").as_deref());
        Ok(category)
    }
}

impl FromRawRecord for KeywordEntity {
    fn from_raw(record: &RawRecord<'_>) -> Result<Self, IntakeError> {
        let mut keyword = KeywordEntity::new();
        keyword.set_keyword(record.text("text").as_deref());
        keyword.set_score_str(record.text("relevance").as_deref());
        keyword.set_sentiment(sentiment_at(record, "sentiment")?);
        Ok(keyword)
    }
}

impl FromRawRecord for TaxonomyEntity {
    fn from_raw(record: &RawRecord<'_>) -> Result<Self, IntakeError> {
        let mut taxonomy = TaxonomyEntity::new();
        taxonomy.set_label(record.text("label").as_deref());
        taxonomy.set_score_str(record.text("score").as_deref());
        taxonomy.set_confident_str(record.text("confident").as_deref());
        Ok(taxonomy)
    }
}

impl FromRawRecord for LanguageEntity {
    fn from_raw(record: &RawRecord<'_>) -> Result<Self, IntakeError> {
        let mut language = LanguageEntity::new();
        language.set_language(record.text("language").as_deref());
        language.set_iso_639_1(record.text("iso-639-1").as_deref());
        language.set_iso_639_2(record.text("iso-639-2").as_deref());
        language.set_iso_639_3(record.text("iso-639-3").as_deref());
        language.set_ethnologue(record.text("ethnologue").as_deref());
        language.set_wikipedia(record.text("wikipedia").as_deref());
        language.set_native_speakers(record.text("native-speakers").as_deref());
        Ok(language)
    }
}

impl FromRawRecord for AuthorEntity {
    fn from_raw(record: &RawRecord<'_>) -> Result<Self, IntakeError> {
        let mut author = AuthorEntity::new();
        author.set_author(record.text("author").as_deref());
        Ok(author)
    }
}

impl FromRawRecord for TitleEntity {
    fn from_raw(record: &RawRecord<'_>) -> Result<Self, IntakeError> {
        let mut title = TitleEntity::new();
        title.set_title(record.text("title").as_deref());
        Ok(title)
    }
}

impl FromRawRecord for ImageEntity {
    fn from_raw(record: &RawRecord<'_>) -> Result<Self, IntakeError> {
        let mut image = ImageEntity::new();
        image.set_image(record.text("image").as_deref());
        Ok(image)
    }
}

impl FromRawRecord for QuotationEntity {
    fn from_raw(record: &RawRecord<'_>) -> Result<Self, IntakeError> {
        let mut quotation = QuotationEntity::new();
        quotation.set_quotation(record.text("quotation").as_deref());
        Ok(quotation)
    }
}

impl FromRawRecord for MicroformatEntity {
    fn from_raw(record: &RawRecord<'_>) -> Result<Self, IntakeError> {
        let mut microformat = MicroformatEntity::new();
        microformat.set_field(record.text("field").as_deref());
        microformat.set_data(record.text("data").as_deref());
        Ok(microformat)
    }
}

impl FromRawRecord for Disambiguation {
    fn from_raw(record: &RawRecord<'_>) -> Result<Self, IntakeError> {
        let mut d = Disambiguation::new();
        d.set_name(record.text("name").as_deref());
        d.set_census(record.text("census").as_deref());
        d.set_cia_factbook(record.text("ciaFactbook").as_deref());
        d.set_crunchbase(record.text("crunchbase").as_deref());
        d.set_dbpedia(record.text("dbpedia").as_deref());
        d.set_freebase(record.text("freebase").as_deref());
        d.set_geonames(record.text("geonames").as_deref());
        d.set_music_brainz(record.text("musicBrainz").as_deref());
        d.set_opencyc(record.text("opencyc").as_deref());
        d.set_semantic_crunchbase(record.text("semanticCrunchbase").as_deref());
        d.set_umbel(record.text("umbel").as_deref());
        d.set_website(record.text("website").as_deref());
        d.set_yago(record.text("yago").as_deref());
        if record.has("geo") {
            d.geo_point_mut().set_geo(record.text("geo").as_deref());
        }
        d.geo_point_mut().set_latitude(record.text("latitude").as_deref());
        d.geo_point_mut().set_longitude(record.text("longitude").as_deref());
        for label in record.texts("subType") {
            d.add_subtype(Some(label.as_str()));
        }
        Ok(d)
    }
}

fn disambiguation_at(record: &RawRecord<'_>) -> Result<Option<Disambiguation>, IntakeError> {
    record
        .child("disambiguated")
        .map(|r| Disambiguation::from_raw(&r))
        .transpose()
}

impl FromRawRecord for ConceptEntity {
    fn from_raw(record: &RawRecord<'_>) -> Result<Self, IntakeError> {
        let mut concept = ConceptEntity::new();
        concept.set_concept(record.text("text").as_deref());
        concept.set_score_str(record.text("relevance").as_deref());
        // concepts carry their links at top level
        let links = Disambiguation::from_raw(record)?;
        concept.copy_disambiguation_from(&links);
        Ok(concept)
    }
}

impl FromRawRecord for NamedEntity {
    fn from_raw(record: &RawRecord<'_>) -> Result<Self, IntakeError> {
        let mut entity = NamedEntity::new();
        entity.set_entity_type(record.text("type").as_deref());
        entity.set_text(record.text("text").as_deref());
        entity.set_score_str(record.text("relevance").as_deref());
        if let Some(count) = record.text("count") {
            entity.set_count_str(Some(count.as_str()));
        }
        entity.set_sentiment(sentiment_at(record, "sentiment")?);
        if let Some(links) = disambiguation_at(record)? {
            entity.copy_disambiguation_from(&links);
        }
        for quotation in record.children("quotations")? {
            entity.add_quotation(QuotationEntity::from_raw(&quotation)?);
        }
        Ok(entity)
    }
}

impl FromRawRecord for Verb {
    fn from_raw(record: &RawRecord<'_>) -> Result<Self, IntakeError> {
        let mut verb = Verb::new();
        verb.set_text(record.text("text").as_deref());
        verb.set_tense_str(record.text("tense").as_deref());
        verb.set_negated_str(record.text("negated").as_deref());
        Ok(verb)
    }
}

impl FromRawRecord for RelationAction {
    fn from_raw(record: &RawRecord<'_>) -> Result<Self, IntakeError> {
        let mut action = RelationAction::new();
        action.set_text(record.text("text").as_deref());
        action.set_lemmatized(record.text("lemmatized").as_deref());
        action.set_verb(record.child("verb").map(|r| Verb::from_raw(&r)).transpose()?);
        Ok(action)
    }
}

impl FromRawRecord for RelationArgument {
    fn from_raw(record: &RawRecord<'_>) -> Result<Self, IntakeError> {
        let mut argument = RelationArgument::new();
        argument.set_text(record.text("text").as_deref());
        argument.set_sentiment(sentiment_at(record, "sentiment")?);
        argument.set_sentiment_from_subject(sentiment_at(record, "sentimentFromSubject")?);
        argument.set_entity(
            record
                .child("entities.[0]")
                .or_else(|| record.child("entity"))
                .map(|r| NamedEntity::from_raw(&r))
                .transpose()?,
        );
        for keyword in record.children("keywords")? {
            argument.add_keyword(KeywordEntity::from_raw(&keyword)?);
        }
        Ok(argument)
    }
}

impl FromRawRecord for RelationEntity {
    fn from_raw(record: &RawRecord<'_>) -> Result<Self, IntakeError> {
        let mut relation = RelationEntity::new();
        relation.set_subject(record.child("subject").map(|r| RelationArgument::from_raw(&r)).transpose()?);
        relation.set_action(record.child("action").map(|r| RelationAction::from_raw(&r)).transpose()?);
        relation.set_object(record.child("object").map(|r| RelationArgument::from_raw(&r)).transpose()?);
        Ok(relation)
    }
}

impl FromRawRecord for HeaderEntity {
    fn from_raw(record: &RawRecord<'_>) -> Result<Self, IntakeError> {
        let mut header = HeaderEntity::new();
        let status = record.text("status");
        if status.is_none() {
            return Err(IntakeError::MissingField {
                field: "status".to_string(),
            });
        }
        header.set_status_str(status.as_deref());
        header.set_status_info(record.text("statusInfo").as_deref());
        header.set_language(record.text("language").as_deref());
        header.set_text(record.text("text").as_deref());
        header.set_url(record.text("url").as_deref());
        header.set_usage(record.text("usage").as_deref());
        Ok(header)
    }
}

/// Build a whole response from a decoded document.
///
/// Header fields are read from the top level. With `list_key` the entities
/// come from that array; without it the document itself is the single
/// entity.
pub fn response_from_value<T>(value: &Value, list_key: Option<&str>) -> Result<Response<T>, IntakeError>
where
    T: Entity + FromRawRecord,
{
    let record = RawRecord::new(value)?;
    let mut response = Response::with_header(HeaderEntity::from_raw(&record)?);

    match list_key {
        Some(key) => {
            for item in record.children(key)? {
                response.add(T::from_raw(&item)?);
            }
        }
        None => {
            response.add(T::from_raw(&record)?);
        }
    }

    tracing::debug!(
        kind = T::NAME,
        status = %response.status(),
        entities = response.len(),
        "built response"
    );
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{ResponseStatus, SentimentPolarity, Tense};
    use serde_json::json;

    #[test]
    fn test_field_path_parse() {
        let path = FieldPath::from_dotted("disambiguated.subType.[1]");
        assert_eq!(path.segments.len(), 3);
        assert_eq!(path.segments[0], PathSegment::Field("disambiguated".to_string()));
        assert_eq!(path.segments[2], PathSegment::Index(1));
        assert_eq!(path.to_string(), "disambiguated.subType.[1]");
    }

    #[test]
    fn test_record_coerces_scalars_to_text() {
        let value = json!({"a": 1.5, "b": true, "c": null, "d": " x ", "n": {"m": 7}});
        let record = RawRecord::new(&value).unwrap();
        assert_eq!(record.text("a"), Some("1.5".to_string()));
        assert_eq!(record.text("b"), Some("true".to_string()));
        assert_eq!(record.text("c"), None);
        assert_eq!(record.text("d"), Some(" x ".to_string()));
        assert_eq!(record.text("n.m"), Some("7".to_string()));
        assert_eq!(record.extract_as::<i64>(&FieldPath::from_dotted("n.m")), Some(7));
        assert_eq!(record.text("missing"), None);
    }

    #[test]
    fn test_not_an_object() {
        assert!(matches!(
            RawRecord::new(&json!([1, 2])),
            Err(IntakeError::NotAnObject { .. })
        ));
    }

    #[test]
    fn test_named_entity_intake() {
        let value = json!({
            "type": "Country",
            "relevance": "0.88",
            "count": "4",
            "text": " Israel ",
            "sentiment": {"type": "negative", "score": "-0.31"},
            "disambiguated": {
                "name": "Israel",
                "subType": ["Location", "Country", "Location"],
                "geo": "31.0 35.0",
                "dbpedia": "http://dbpedia.org/resource/Israel"
            },
            "quotations": [{"quotation": "Shalom"}]
        });
        let entity = NamedEntity::from_value(&value).unwrap();

        assert_eq!(entity.text(), Some("Israel"));
        assert_eq!(entity.score(), 0.88);
        assert_eq!(entity.count(), 4);
        assert_eq!(
            entity.sentiment().map(|s| s.polarity()),
            Some(SentimentPolarity::Negative)
        );
        assert_eq!(entity.latitude(), 31.0);
        assert_eq!(entity.subtypes().collect::<Vec<_>>(), vec!["Location", "Country"]);
        assert_eq!(entity.quotations().len(), 1);
    }

    #[test]
    fn test_relation_intake() {
        let value = json!({
            "subject": {"text": "The senator"},
            "action": {
                "text": "opposed",
                "lemmatized": "oppose",
                "verb": {"text": "oppose", "tense": "past", "negated": "1"}
            },
            "object": {
                "text": "the bill",
                "sentimentFromSubject": {"type": "negative", "score": "-0.5"},
                "keywords": [{"text": "bill", "relevance": "0.9"}]
            }
        });
        let relation = RelationEntity::from_value(&value).unwrap();
        let verb = relation.action().and_then(|a| a.verb()).unwrap();
        assert_eq!(verb.tense(), Tense::Past);
        assert!(verb.is_negated());
        let object = relation.object().unwrap();
        assert!(object.sentiment().is_none());
        assert!(object.sentiment_from_subject().is_some());
        assert_eq!(object.keywords().len(), 1);
    }

    #[test]
    fn test_keywords_must_be_an_array() {
        let value = json!({"subject": {"text": "x", "keywords": "oops"}});
        assert!(matches!(
            RelationEntity::from_value(&value),
            Err(IntakeError::NotAnArray { .. })
        ));
    }

    #[test]
    fn test_response_from_value() {
        let document = json!({
            "status": "OK",
            "usage": "By accessing this service you agree to the terms",
            "language": "english",
            "url": "http://example.com/story",
            "keywords": [
                {"text": "rates", "relevance": "0.80"},
                {"text": "inflation", "relevance": "0.97"},
                {"text": "rates", "relevance": "0.80"},
                {"text": "bank", "relevance": "0.77"}
            ]
        });
        let mut response: Response<KeywordEntity> =
            response_from_value(&document, Some("keywords")).unwrap();

        assert_eq!(response.status(), ResponseStatus::Ok);
        assert_eq!(response.header().language(), Some("english"));
        assert_eq!(response.len(), 3);
        let scores: Vec<f64> = response.iter().map(|k| k.score()).collect();
        assert_eq!(scores, vec![0.97, 0.80, 0.77]);
    }

    #[test]
    fn test_single_entity_document() {
        let document = json!({
            "status": "OK",
            "language": "english",
            "iso-639-1": "en",
            "native-speakers": "309-400 million"
        });
        let response: Response<LanguageEntity> = response_from_value(&document, None).unwrap();
        assert_eq!(response.len(), 1);
        assert_eq!(response.entities()[0].native_speakers_min(), 309_000_000);
    }

    #[test]
    fn test_missing_status() {
        let document = json!({"keywords": []});
        let result: Result<Response<KeywordEntity>, _> = response_from_value(&document, Some("keywords"));
        assert!(matches!(result, Err(IntakeError::MissingField { .. })));
    }
}
