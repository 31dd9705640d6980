//! Short code generation.
//!
//! Codes are drawn from the ASCII alphanumeric alphabet (`[A-Za-z0-9]`), which
//! is URL-safe without escaping. The goal is uniqueness, not secrecy: the
//! thread-local RNG is enough, and the store's unique constraint remains the
//! final arbiter (see `LinkService` for the collision retry).

use rand::{Rng, distr::Alphanumeric};

/// Codes that would shadow a fixed route segment.
///
/// `GET /ping` is matched before `GET /{code}`, so a link with this code
/// could never be resolved.
pub const RESERVED_CODES: &[&str] = &["ping"];

/// Generates a random short code of exactly `length` characters.
///
/// Never returns a code listed in [`RESERVED_CODES`].
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(8);
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    loop {
        let code: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect();

        if !is_reserved(&code) {
            return code;
        }
    }
}

/// Returns true if `code` collides with a route segment.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}
