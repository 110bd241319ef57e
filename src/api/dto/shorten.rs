//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// `url` is optional at the deserialization level so an empty body object
/// still parses; presence is enforced by the handler, which owns the exact
/// error message of the contract.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: Option<String>,
}

/// Response for a successfully shortened URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// Request host root plus the allocated code.
    pub short_url: String,
    /// The stored (normalized) long URL.
    pub long_url: String,
}
