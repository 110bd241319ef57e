//! Mapping entity representing a shortened URL.

/// A persisted association of a short code to a long URL.
///
/// Created once when the allocator wins its create-if-absent write; immutable
/// afterwards. There is no deletion path and no expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub code: String,
    pub long_url: String,
}

impl Mapping {
    pub fn new(code: String, long_url: String) -> Self {
        Self { code, long_url }
    }

    /// Builds the public short URL for this mapping.
    ///
    /// `base_url` is the request host root and must end with `/`
    /// (e.g. `http://localhost:3000/`).
    pub fn short_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.code)
    }
}
