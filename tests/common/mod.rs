#![allow(dead_code)]

use std::sync::Arc;

use shorturl::domain::repositories::MappingStore;
use shorturl::infrastructure::persistence::MemoryStore;
use shorturl::state::AppState;

/// Builds an [`AppState`] over an in-memory store, returning the store as
/// well so tests can seed and inspect it directly.
pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), 100);
    (state, store)
}

/// Seeds a fully consistent mapping (entry plus index membership).
pub async fn seed_mapping(store: &MemoryStore, code: &str, url: &str) {
    assert!(store.put_if_absent(code, url).await.unwrap());
    store.add_to_index(code).await.unwrap();
}
