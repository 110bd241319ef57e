//! Store trait for short URL mappings and the code index.

use std::collections::HashSet;

use crate::error::AppError;
use async_trait::async_trait;

/// Interface to the shared key-value store holding code→URL entries and the
/// index of all issued codes.
///
/// All shared mutable state lives behind this trait; handlers carry no
/// in-process coordination state, so correctness under concurrent requests
/// rests entirely on [`put_if_absent`](MappingStore::put_if_absent) being a
/// single atomic operation at the store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::RedisStore`] - Redis (production)
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-process (tests)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Atomically creates the code→URL entry iff no entry exists for `code`.
    ///
    /// Returns `true` when the entry was created, `false` when an entry
    /// already existed (the store is left unchanged). Two callers racing on
    /// the same code must observe exactly one `true`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the backend is unreachable or errors.
    async fn put_if_absent(&self, code: &str, url: &str) -> Result<bool, AppError>;

    /// Records `code` as a member of the enumerable index. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on backend errors.
    async fn add_to_index(&self, code: &str) -> Result<(), AppError>;

    /// Point lookup of the URL stored for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on backend errors.
    async fn get(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Returns every known code. Order is not significant.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on backend errors.
    async fn list_index(&self) -> Result<HashSet<String>, AppError>;

    /// Checks if the store backend is reachable.
    ///
    /// Used by the health check endpoint to report store status.
    async fn health_check(&self) -> bool;
}
