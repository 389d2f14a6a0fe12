//! Business logic services

pub mod catalog;
pub mod clock;
pub mod ids;

use std::sync::Arc;

use crate::{config::CatalogConfig, repository::BookRepository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
}

impl Services {
    /// Create all services over the given repository, with the wall clock and
    /// random identifiers of the configured length
    pub fn new(repository: Arc<dyn BookRepository>, catalog_config: &CatalogConfig) -> Self {
        Self {
            catalog: catalog::CatalogService::new(
                repository,
                Arc::new(ids::NanoIdGenerator::new(catalog_config.id_length)),
                Arc::new(clock::SystemClock),
            ),
        }
    }
}
