//! In-process mapping store for tests and local development.

use std::collections::{HashMap, HashSet, hash_map::Entry};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::repositories::MappingStore;
use crate::error::AppError;

#[derive(Default)]
struct Tables {
    entries: HashMap<String, String>,
    index: HashSet<String>,
}

/// A mapping store that keeps everything in process memory.
///
/// Preserves the same atomicity contract as the Redis backend: each operation
/// runs under a single mutex, so concurrent `put_if_absent` calls on the same
/// code see exactly one winner. Nothing is persisted across restarts.
///
/// # Use Cases
///
/// - Integration tests without a live Redis instance
/// - Local development
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MappingStore for MemoryStore {
    async fn put_if_absent(&self, code: &str, url: &str) -> Result<bool, AppError> {
        let mut tables = self.inner.lock().await;

        match tables.entries.entry(code.to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(url.to_string());
                Ok(true)
            }
        }
    }

    async fn add_to_index(&self, code: &str) -> Result<(), AppError> {
        let mut tables = self.inner.lock().await;
        tables.index.insert(code.to_string());
        Ok(())
    }

    async fn get(&self, code: &str) -> Result<Option<String>, AppError> {
        let tables = self.inner.lock().await;
        Ok(tables.entries.get(code).cloned())
    }

    async fn list_index(&self) -> Result<HashSet<String>, AppError> {
        let tables = self.inner.lock().await;
        Ok(tables.index.clone())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
