//! # Textfacets: Normalized Data Model for Text-Analysis Results
//!
//! Textfacets turns loosely-typed text-analysis output (categories,
//! keywords, entities, concepts, relations, sentiment, taxonomy, language,
//! images, titles) into consistent typed records.
//!
//! ## Features
//!
//! - **Trim-on-set fields**: every text attribute is trimmed on the way in;
//!   absent stays absent
//! - **Tolerant coercion**: malformed enum strings, coordinates, scores and
//!   population ranges never fail, they leave the previous value in place
//! - **Owned disambiguation**: concepts and named entities each own their
//!   linked-data record and expose it through pass-through accessors
//! - **Score-ordered responses**: [`Response`] deduplicates on add and
//!   stable-sorts by descending score on every read
//!
//! ## Example
//!
//! ```
//! use textfacets::{KeywordEntity, Response};
//!
//! let mut response: Response<KeywordEntity> = Response::new();
//! response.header_mut().set_status_str(Some("OK"));
//! response.add(KeywordEntity::with("rates", 0.80));
//! response.add(KeywordEntity::with("inflation", 0.97));
//! response.add(KeywordEntity::with("rates", 0.80));
//!
//! assert_eq!(response.len(), 2);
//! let first = response.iter().next().unwrap();
//! assert_eq!(first.keyword(), Some("inflation"));
//! ```

// Normalization primitives
pub mod field;
pub mod score;
pub mod vocab;
pub mod geo;
pub mod speakers;
pub mod disambiguation;

// Entities and the aggregator
pub mod entity;
pub mod entities;
pub mod response;

// Edges: intake from decoder output, rendering, configuration
pub mod intake;
pub mod serialization;
pub mod config;

// Re-export key types
pub use entity::{Entity, FieldValue};
pub use field::NormalizedField;
pub use score::{Score, DEFAULT_SCORE};
pub use vocab::{ResponseStatus, SentimentPolarity, StringEnum, Tense};
pub use geo::{GeoPoint, COORDINATE_UNSET};
pub use speakers::NativeSpeakers;
pub use disambiguation::Disambiguation;
pub use entities::{
    AuthorEntity, CategoryEntity, ConceptEntity, HeaderEntity, ImageEntity, KeywordEntity,
    LanguageEntity, MicroformatEntity, NamedEntity, QuotationEntity, RelationAction,
    RelationArgument, RelationEntity, SentimentEntity, TaxonomyEntity, TitleEntity, Verb,
};
pub use response::Response;
pub use intake::{response_from_value, FieldPath, FromRawRecord, IntakeError, RawRecord};
pub use serialization::{write_response, NdjsonWriter, SerializationError};
pub use config::{ConfigError, OutputFormat, ReportConfig};
