//! Short code generation and shape validation.

use rand::Rng;

/// Length of every short code.
pub const CODE_LENGTH: usize = 6;

/// The 62-symbol code alphabet. 62^6 ≈ 5.7e10 possible codes.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random candidate short code.
///
/// Each of the 6 symbols is sampled independently and uniformly from the
/// alphabet. The result is only a candidate: uniqueness is established by the
/// store's create-if-absent write, not here.
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns whether `code` has the shape of an issued short code.
///
/// Codes that fail this check can be rejected without a store round trip.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
}
