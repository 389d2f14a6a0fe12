//! Catalog management service

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload, BookQuery, BookShort},
    repository::BookRepository,
};

use super::{clock::Clock, ids::IdGenerator};

const ADD_FAILED: &str = "Failed to add book";

#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn BookRepository>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    /// Serializes create/update/delete
    writes: Arc<Mutex<()>>,
}

impl CatalogService {
    pub fn new(
        repository: Arc<dyn BookRepository>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            ids,
            clock,
            writes: Arc::new(Mutex::new(())),
        }
    }

    /// Add a book and return its generated id
    pub async fn create_book(&self, payload: BookPayload) -> AppResult<String> {
        let fields = payload
            .validate()
            .map_err(|reason| AppError::Validation(format!("Failed to add book. {}", reason)))?;

        let _guard = self.writes.lock().await;
        let id = self.ids.generate();
        let book = Book::new(id.clone(), fields, self.clock.now());
        if let Err(e) = self.repository.insert(book).await {
            return Err(AppError::Internal {
                public: ADD_FAILED,
                detail: format!("insert of book {} failed: {}", id, e),
            });
        }

        if !self.repository.contains(&id).await? {
            return Err(AppError::Internal {
                public: ADD_FAILED,
                detail: format!("book {} missing after insert", id),
            });
        }

        tracing::info!("Catalog create: added book id={}", id);
        Ok(id)
    }

    /// List books, honoring only the first filter present in the query
    pub async fn list_books(&self, query: &BookQuery) -> AppResult<Vec<BookShort>> {
        let filter = query.filter();
        tracing::debug!("Catalog list: filter={:?}", filter);
        self.repository.list(&filter).await
    }

    /// Get book by ID with full details
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Replace every mutable field of an existing book
    pub async fn update_book(&self, id: &str, payload: BookPayload) -> AppResult<()> {
        let fields = payload
            .validate()
            .map_err(|reason| AppError::Validation(format!("Failed to update book. {}", reason)))?;

        let _guard = self.writes.lock().await;
        if !self.repository.update(id, fields, self.clock.now()).await? {
            return Err(AppError::NotFound(
                "Failed to update book. Id not found".to_string(),
            ));
        }

        tracing::info!("Catalog update: updated book id={}", id);
        Ok(())
    }

    /// Delete a book
    pub async fn delete_book(&self, id: &str) -> AppResult<()> {
        let _guard = self.writes.lock().await;
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound(
                "Failed to delete book. Id not found".to_string(),
            ));
        }

        tracing::info!("Catalog delete: deleted book id={}", id);
        Ok(())
    }
}
