//! In-memory book storage

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::BookRepository;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFields, BookFilter, BookShort},
};

/// Books keyed by id, iterated in insertion order
#[derive(Default)]
pub struct InMemoryBookRepository {
    books: RwLock<IndexMap<String, Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn insert(&self, book: Book) -> AppResult<()> {
        let mut books = self.books.write().await;
        if books.contains_key(&book.id) {
            return Err(AppError::internal(format!("Duplicate book id {}", book.id)));
        }
        books.insert(book.id.clone(), book);
        Ok(())
    }

    async fn contains(&self, id: &str) -> AppResult<bool> {
        Ok(self.books.read().await.contains_key(id))
    }

    async fn list(&self, filter: &BookFilter) -> AppResult<Vec<BookShort>> {
        let books = self.books.read().await;
        Ok(books
            .values()
            .filter(|book| filter.matches(book))
            .map(BookShort::from)
            .collect())
    }

    async fn get(&self, id: &str) -> AppResult<Option<Book>> {
        Ok(self.books.read().await.get(id).cloned())
    }

    async fn update(&self, id: &str, fields: BookFields, now: DateTime<Utc>) -> AppResult<bool> {
        let mut books = self.books.write().await;
        match books.get_mut(id) {
            Some(book) => {
                book.apply(fields, now);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        Ok(self.books.write().await.shift_remove(id).is_some())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.books.read().await.len())
    }
}
