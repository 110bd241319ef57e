//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, http::HeaderMap};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_base::request_base_url;

/// Creates a shortened URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:3000/aB3xY9",
///   "long_url": "https://example.com"
/// }
/// ```
///
/// URLs without an `http://` or `https://` prefix are stored with `http://`
/// prepended and echoed back in that form. Shortening the same URL twice
/// yields two distinct codes.
///
/// # Errors
///
/// Returns 400 with `{"error": "URL is required"}` if `url` is missing or
/// empty. Returns 500 if the store is unreachable or the allocator exhausts
/// its retry cap.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let long_url = match payload.url {
        Some(url) if !url.is_empty() => url,
        _ => return Err(AppError::bad_request("URL is required")),
    };

    let base_url = request_base_url(&headers)?;

    let mapping = state.shortener.shorten(&long_url).await?;

    Ok(Json(ShortenResponse {
        short_url: mapping.short_url(&base_url),
        long_url: mapping.long_url,
    }))
}
