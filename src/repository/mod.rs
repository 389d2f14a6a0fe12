//! Repository layer for book storage

pub mod books;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    error::AppResult,
    models::book::{Book, BookFields, BookFilter, BookShort},
};

pub use books::InMemoryBookRepository;

/// Storage for book records, kept in insertion order.
///
/// Each call is atomic with respect to the others.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Append a record at the end of the collection
    async fn insert(&self, book: Book) -> AppResult<()>;

    /// Whether a record with this id is stored
    async fn contains(&self, id: &str) -> AppResult<bool>;

    /// Projections of the records matching `filter`, in collection order
    async fn list(&self, filter: &BookFilter) -> AppResult<Vec<BookShort>>;

    /// Full record by id
    async fn get(&self, id: &str) -> AppResult<Option<Book>>;

    /// Replace the mutable fields of a record in place, stamping `now` as the
    /// update time. Returns false if the id is unknown.
    async fn update(&self, id: &str, fields: BookFields, now: DateTime<Utc>) -> AppResult<bool>;

    /// Remove a record, keeping the order of the rest. Returns false if the id is unknown.
    async fn delete(&self, id: &str) -> AppResult<bool>;

    /// Number of stored records
    async fn count(&self) -> AppResult<usize>;
}
