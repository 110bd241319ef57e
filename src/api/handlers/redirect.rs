//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_valid_code;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// A pure read against the store: no mutation, no side effects. Paths that
/// cannot be issued codes (wrong length or foreign symbols) are rejected
/// before touching the store.
///
/// # Errors
///
/// Returns 404 with a plain-text `URL not found` body if the code does not
/// resolve.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if !is_valid_code(&code) {
        return Err(AppError::not_found("URL not found"));
    }

    let long_url = state.shortener.resolve(&code).await?;

    debug!(%code, %long_url, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]).into_response())
}
