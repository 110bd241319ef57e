//! Handler for the URL listing endpoint.

use axum::{Json, extract::State, http::HeaderMap};

use crate::api::dto::urls::{UrlEntry, UrlListResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_base::request_base_url;

/// Lists every known mapping.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// # Response
///
/// ```json
/// {
///   "urls": [
///     {
///       "short_url": "http://localhost:3000/aB3xY9",
///       "long_url": "https://example.com"
///     }
///   ]
/// }
/// ```
///
/// Enumerates the code index and resolves each code through the store. Index
/// entries without a backing mapping are skipped, so the listing never fails
/// on index/entry divergence.
pub async fn list_urls_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UrlListResponse>, AppError> {
    let base_url = request_base_url(&headers)?;

    let mappings = state.shortener.list_all().await?;

    let urls = mappings
        .into_iter()
        .map(|mapping| UrlEntry {
            short_url: mapping.short_url(&base_url),
            long_url: mapping.long_url,
        })
        .collect();

    Ok(Json(UrlListResponse { urls }))
}
