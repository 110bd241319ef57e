//! Request base URL derivation from HTTP headers.

use crate::AppError;
use axum::http::{HeaderMap, header};

/// Builds the request host root (`http://<host>/`) from the `Host` header.
///
/// Short URLs returned by the API are formed by appending the code to this
/// base, so whatever authority the client used to reach the service (including
/// any port) is echoed back.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The `Host` header is missing
/// - The header value contains invalid UTF-8
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "localhost:3000".parse().unwrap());
///
/// let base = request_base_url(&headers).unwrap();
/// assert_eq!(base, "http://localhost:3000/");
/// ```
pub fn request_base_url(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header"))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header"))?;

    Ok(format!("http://{}/", host))
}
