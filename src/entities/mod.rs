//! Typed records produced from text-analysis results.
//!
//! Every record trims its text on the way in, owns its nested records
//! outright and compares field by field.

pub mod category;
pub mod concept;
pub mod header;
pub mod keyword;
pub mod language;
pub mod named;
pub mod relation;
pub mod sentiment;
pub mod simple;
pub mod taxonomy;

pub use category::CategoryEntity;
pub use concept::ConceptEntity;
pub use header::HeaderEntity;
pub use keyword::KeywordEntity;
pub use language::LanguageEntity;
pub use named::NamedEntity;
pub use relation::{RelationAction, RelationArgument, RelationEntity, Verb};
pub use sentiment::SentimentEntity;
pub use simple::{AuthorEntity, ImageEntity, MicroformatEntity, QuotationEntity, TitleEntity};
pub use taxonomy::TaxonomyEntity;
