//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::domain::repositories::MappingStore;

/// Application state shared across all HTTP handlers.
///
/// The store is kept behind a trait object so tests can substitute an
/// in-memory implementation without a live backend.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub store: Arc<dyn MappingStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn MappingStore>, alloc_max_attempts: u32) -> Self {
        Self {
            shortener: Arc::new(ShortenerService::new(store.clone(), alloc_max_attempts)),
            store,
        }
    }
}
