//! Book model and related request/query types

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};

/// Book record as stored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Opaque identifier assigned at creation
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Total number of pages
    pub page_count: u32,
    /// Pages read so far
    pub read_page: u32,
    /// Whether `read_page` reached `page_count` at the last write
    pub finished: bool,
    /// Whether the book is currently being read
    pub reading: bool,
    #[serde(serialize_with = "iso8601")]
    #[schema(value_type = String, format = DateTime)]
    pub inserted_at: DateTime<Utc>,
    #[serde(serialize_with = "iso8601")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

/// Short book representation for lists
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BookShort {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl From<&Book> for BookShort {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// Create/update book request.
///
/// Every field is optional on the wire; `name` presence and the page
/// relationship are checked by [`BookPayload::validate`].
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub read_page: u32,
    #[serde(default)]
    pub reading: bool,
}

/// Reason a book payload was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookRejection {
    #[error("Please provide the book name")]
    NameRequired,
    #[error("readPage must not be greater than pageCount")]
    ReadPageExceedsPageCount,
}

/// Mutable fields of a book that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct BookFields {
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

impl BookPayload {
    /// Check the payload, name first, then the page relationship.
    pub fn validate(self) -> Result<BookFields, BookRejection> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(BookRejection::NameRequired),
        };

        if self.read_page > self.page_count {
            return Err(BookRejection::ReadPageExceedsPageCount);
        }

        Ok(BookFields {
            name,
            year: self.year,
            author: self.author,
            summary: self.summary,
            publisher: self.publisher,
            page_count: self.page_count,
            read_page: self.read_page,
            reading: self.reading,
        })
    }
}

impl BookFields {
    pub fn finished(&self) -> bool {
        self.page_count == self.read_page
    }
}

impl Book {
    /// Build a new record; both timestamps are set to `now`.
    pub fn new(id: String, fields: BookFields, now: DateTime<Utc>) -> Self {
        let finished = fields.finished();
        Self {
            id,
            name: fields.name,
            year: fields.year,
            author: fields.author,
            summary: fields.summary,
            publisher: fields.publisher,
            page_count: fields.page_count,
            read_page: fields.read_page,
            finished,
            reading: fields.reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field. `id` and `inserted_at` are kept.
    pub fn apply(&mut self, fields: BookFields, now: DateTime<Utc>) {
        self.finished = fields.finished();
        self.name = fields.name;
        self.year = fields.year;
        self.author = fields.author;
        self.summary = fields.summary;
        self.publisher = fields.publisher;
        self.page_count = fields.page_count;
        self.read_page = fields.read_page;
        self.reading = fields.reading;
        self.updated_at = now;
    }
}

/// Book list query parameters
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
pub struct BookQuery {
    /// Case-insensitive substring of the book name
    pub name: Option<String>,
    /// `1` for books being read, anything else for the others
    pub reading: Option<String>,
    /// `1` for finished books, anything else for the others
    pub finished: Option<String>,
}

/// Single filter applied when listing books
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFilter {
    All,
    /// Lowercased needle
    Name(String),
    Reading(bool),
    Finished(bool),
}

impl BookQuery {
    /// Only the first non-empty parameter, in `name`, `reading`, `finished`
    /// order, is honored.
    pub fn filter(&self) -> BookFilter {
        fn present(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.is_empty())
        }

        if let Some(name) = present(&self.name) {
            BookFilter::Name(name.to_lowercase())
        } else if let Some(reading) = present(&self.reading) {
            BookFilter::Reading(reading == "1")
        } else if let Some(finished) = present(&self.finished) {
            BookFilter::Finished(finished == "1")
        } else {
            BookFilter::All
        }
    }
}

impl FromIterator<(String, String)> for BookQuery {
    /// Raw query pairs; the first value of a repeated key wins and unknown
    /// keys are ignored.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = BookQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut query.name,
                "reading" => &mut query.reading,
                "finished" => &mut query.finished,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            BookFilter::All => true,
            BookFilter::Name(needle) => book.name.to_lowercase().contains(needle.as_str()),
            BookFilter::Reading(reading) => book.reading == *reading,
            BookFilter::Finished(finished) => book.finished == *finished,
        }
    }
}

fn iso8601<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}
