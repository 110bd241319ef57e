//! Redis-backed mapping store.

use std::collections::HashSet;

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// Key prefix for code→URL entries: `shorturl:<code>`.
const ENTRY_PREFIX: &str = "shorturl:";

/// Set key holding every issued code.
const INDEX_KEY: &str = "shorturl:index";

/// Shared Redis store for URL mappings and the code index.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse. The atomic create-if-absent contract of
/// [`MappingStore::put_if_absent`] is provided by Redis `SET NX`.
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the URL is invalid, the connection
    /// cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> Result<Self, AppError> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url)
            .map_err(|e| AppError::store(format!("Failed to create Redis client: {}", e)))?;

        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| AppError::store(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = conn.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| AppError::store(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self { conn })
    }

    /// Constructs the entry key for a short code.
    fn entry_key(code: &str) -> String {
        format!("{}{}", ENTRY_PREFIX, code)
    }
}

#[async_trait]
impl MappingStore for RedisStore {
    async fn put_if_absent(&self, code: &str, url: &str) -> Result<bool, AppError> {
        let key = Self::entry_key(code);
        let mut conn = self.conn.clone();

        let created: bool = conn.set_nx(&key, url).await?;
        if !created {
            debug!("SET NX lost: {} already reserved", code);
        }

        Ok(created)
    }

    async fn add_to_index(&self, code: &str) -> Result<(), AppError> {
        let mut conn = self.conn.clone();
        conn.sadd::<_, _, ()>(INDEX_KEY, code).await?;
        Ok(())
    }

    async fn get(&self, code: &str) -> Result<Option<String>, AppError> {
        let key = Self::entry_key(code);
        let mut conn = self.conn.clone();

        let url: Option<String> = conn.get(&key).await?;
        Ok(url)
    }

    async fn list_index(&self) -> Result<HashSet<String>, AppError> {
        let mut conn = self.conn.clone();

        let codes: HashSet<String> = conn.smembers(INDEX_KEY).await?;
        Ok(codes)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }
}
