//! Score-ordered collection of one entity kind plus response metadata.
//!
//! The parsing layer fills a [`Response`] through [`Response::add`]; readers
//! then walk it with [`Response::iter`], which re-sorts the backing list by
//! descending score first. The sort is stable, so entities with equal
//! scores keep their insertion order. Because reading sorts in place, a
//! response must not be read and written concurrently.

use crate::config::ReportConfig;
use crate::entities::HeaderEntity;
use crate::entity::Entity;
use crate::score;
use crate::vocab::ResponseStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    from = "ResponseRecord<T>",
    bound(deserialize = "T: Entity + Deserialize<'de>")
)]
pub struct Response<T: Entity> {
    header: HeaderEntity,
    entities: Vec<T>,
    #[serde(skip_serializing)]
    needs_sort: bool,
}

/// Loaded form of a [`Response`]. Entities are replayed through
/// [`Response::add`], so duplicates are dropped and the list re-sorts on
/// first read.
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Entity + Deserialize<'de>"))]
struct ResponseRecord<T: Entity> {
    #[serde(default)]
    header: HeaderEntity,
    #[serde(default)]
    entities: Vec<T>,
}

impl<T: Entity> From<ResponseRecord<T>> for Response<T> {
    fn from(record: ResponseRecord<T>) -> Self {
        let mut response = Response::with_header(record.header);
        for entity in record.entities {
            response.add(entity);
        }
        response
    }
}

impl<T: Entity> Default for Response<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> PartialEq for Response<T> {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header && self.entities == other.entities
    }
}

impl<T: Entity> Response<T> {
    pub fn new() -> Self {
        Self {
            header: HeaderEntity::default(),
            entities: Vec::new(),
            needs_sort: false,
        }
    }

    pub fn with_header(header: HeaderEntity) -> Self {
        Self {
            header,
            ..Self::new()
        }
    }

    pub fn header(&self) -> &HeaderEntity {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut HeaderEntity {
        &mut self.header
    }

    pub fn status(&self) -> ResponseStatus {
        self.header.status()
    }

    pub fn status_info(&self) -> Option<&str> {
        self.header.status_info()
    }

    pub fn is_ok(&self) -> bool {
        self.header.is_ok()
    }

    /// Append an entity unless it is absent or an equal entity is already
    /// present. Returns whether it was stored.
    pub fn add(&mut self, entity: impl Into<Option<T>>) -> bool {
        let Some(entity) = entity.into() else {
            return false;
        };
        if self.entities.contains(&entity) {
            tracing::trace!(kind = T::NAME, entity = %entity.summary(), "skipping duplicate");
            return false;
        }
        self.entities.push(entity);
        self.needs_sort = true;
        true
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities in their current backing order, without sorting.
    pub fn entities(&self) -> &[T] {
        &self.entities
    }

    /// Stable sort by descending score; unscored entities go last.
    pub fn sort(&mut self) {
        if self.needs_sort {
            self.entities
                .sort_by(|a, b| score::descending(a.score(), b.score()));
            self.needs_sort = false;
        }
    }

    /// Sort, then iterate from the highest score down.
    pub fn iter(&mut self) -> std::slice::Iter<'_, T> {
        self.sort();
        self.entities.iter()
    }

    /// The `n` highest-scored entities.
    pub fn top(&mut self, n: usize) -> &[T] {
        self.sort();
        let end = n.min(self.entities.len());
        &self.entities[..end]
    }

    /// Entities in score order without touching the backing list.
    fn ranked(&self) -> Vec<&T> {
        let mut ranked: Vec<&T> = self.entities.iter().collect();
        ranked.sort_by(|a, b| score::descending(a.score(), b.score()));
        ranked
    }

    /// Sort, then render the full structured dump.
    pub fn dump(&mut self) -> String {
        self.sort();
        self.to_string()
    }

    /// Structured text dump honoring the report settings.
    pub fn render_text(&mut self, config: &ReportConfig) -> String {
        self.sort();
        TextReport {
            header: config.include_header.then_some(&self.header),
            entities: config.select(self.entities.iter()),
        }
        .to_string()
    }
}

impl<'a, T: Entity> IntoIterator for &'a mut Response<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn write_header<W: fmt::Write>(out: &mut W, header: &HeaderEntity) -> fmt::Result {
    writeln!(out, "status: {}", header.summary())?;
    if let Some(language) = header.language() {
        writeln!(out, "language: {}", language)?;
    }
    if let Some(url) = header.url().filter(|u| !u.is_empty()) {
        writeln!(out, "url: {}", url)?;
    }
    if let Some(usage) = header.usage().filter(|u| !u.is_empty()) {
        writeln!(out, "usage: {}", usage)?;
    }
    Ok(())
}

fn write_entities<'a, T, W>(out: &mut W, entities: impl IntoIterator<Item = &'a T>) -> fmt::Result
where
    T: Entity,
    W: fmt::Write,
{
    for (rank, entity) in entities.into_iter().enumerate() {
        match entity.score() {
            Some(score) => writeln!(out, "{:>3}. {:<8.4} {}", rank + 1, score, entity.summary())?,
            None => writeln!(out, "{:>3}. {}", rank + 1, entity.summary())?,
        }
    }
    Ok(())
}

/// Already-selected entities plus an optional header, rendered as text.
struct TextReport<'a, T> {
    header: Option<&'a HeaderEntity>,
    entities: Vec<&'a T>,
}

impl<T: Entity> fmt::Display for TextReport<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(header) = self.header {
            write_header(f, header)?;
        }
        write_entities(f, self.entities.iter().copied())
    }
}

/// Header, entity count and entities in descending score order.
///
/// Formatting only borrows the response, so it ranks a copy of the entity
/// references and leaves [`Response::entities`] in its current order. Use
/// [`Response::dump`] to sort the backing list and render in one step.
impl<T: Entity> fmt::Display for Response<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, &self.header)?;
        writeln!(f, "{} x{}", T::NAME, self.entities.len())?;
        write_entities(f, self.ranked())
    }
}
