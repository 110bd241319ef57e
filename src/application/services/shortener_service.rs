//! Short code allocation, resolution, and listing.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::Mapping;
use crate::domain::repositories::MappingStore;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::normalize_url;

/// Service for allocating short codes and resolving them back to URLs.
///
/// Allocation draws random candidate codes and publishes each with an atomic
/// create-if-absent store write, retrying on collision up to a configured cap.
/// The same long URL may be shortened any number of times; each call yields
/// its own code.
pub struct ShortenerService {
    store: Arc<dyn MappingStore>,
    max_attempts: u32,
}

impl ShortenerService {
    pub fn new(store: Arc<dyn MappingStore>, max_attempts: u32) -> Self {
        Self {
            store,
            max_attempts,
        }
    }

    /// Allocates a short code for `long_url` and publishes the mapping.
    ///
    /// The URL is normalized first: inputs without an `http://` or `https://`
    /// prefix get `http://` prepended. On a successful reservation the code is
    /// also added to the enumerable index.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AllocationExhausted`] if every candidate within the
    /// retry cap collided, and [`AppError::Store`] on backend errors. A failed
    /// candidate leaves the store unchanged.
    pub async fn shorten(&self, long_url: &str) -> Result<Mapping, AppError> {
        let normalized = normalize_url(long_url);

        for attempt in 0..self.max_attempts {
            let code = generate_code();

            if self.store.put_if_absent(&code, &normalized).await? {
                self.store.add_to_index(&code).await?;
                if attempt > 0 {
                    debug!(attempt, %code, "allocated short code after collision retries");
                }
                return Ok(Mapping::new(code, normalized));
            }

            debug!(%code, "short code collision, drawing a new candidate");
        }

        Err(AppError::AllocationExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Resolves a short code to its stored URL. Pure read, no side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists for `code`.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        self.store
            .get(code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))
    }

    /// Enumerates the code index and resolves every code to its URL.
    ///
    /// Index entries with no corresponding store value are skipped with a
    /// warning rather than failing the whole listing. Pairs are returned
    /// sorted by code so repeated calls produce identical output.
    pub async fn list_all(&self) -> Result<Vec<Mapping>, AppError> {
        let codes = self.store.list_index().await?;

        let mut mappings = Vec::with_capacity(codes.len());
        for code in codes {
            match self.store.get(&code).await? {
                Some(url) => mappings.push(Mapping::new(code, url)),
                None => warn!(%code, "index entry has no mapping, skipping"),
            }
        }

        mappings.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(mappings)
    }
}
