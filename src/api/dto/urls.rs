//! DTOs for the URL listing endpoint.

use serde::Serialize;

/// One known mapping, rendered with the request host root.
#[derive(Debug, Serialize)]
pub struct UrlEntry {
    pub short_url: String,
    pub long_url: String,
}

/// Response listing every known mapping.
#[derive(Debug, Serialize)]
pub struct UrlListResponse {
    pub urls: Vec<UrlEntry>,
}
