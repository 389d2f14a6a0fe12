//! Bookshelf
//!
//! An in-memory book catalog exposed as a REST JSON API: add, list (with
//! optional filters), fetch, update and delete book records.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::{BookRepository, InMemoryBookRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: Arc<dyn BookRepository>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// State over an empty in-memory catalog
    pub fn new(config: AppConfig) -> Self {
        let repository: Arc<dyn BookRepository> = Arc::new(InMemoryBookRepository::new());
        let services = services::Services::new(repository.clone(), &config.catalog);
        Self {
            config: Arc::new(config),
            repository,
            services: Arc::new(services),
        }
    }
}
