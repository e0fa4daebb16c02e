//! Random alias generation and client alias checks.
//!
//! Aliases are drawn uniformly from the 62-symbol alphabet `[A-Za-z0-9]`.
//! Generation is not cryptographically secure; a collision surfaces as a
//! duplicate-alias error from storage rather than overwriting a mapping.

use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Aliases that would be shadowed by service routes.
const RESERVED_ALIASES: &[&str] = &["save"];

/// Generates a random alias of exactly `length` characters.
///
/// The generator is freshly seeded from OS entropy on every call.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias(10);
/// assert_eq!(alias.len(), 10);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias(length: usize) -> String {
    StdRng::from_os_rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns true if a client-supplied alias collides with a service route.
pub fn is_reserved(alias: &str) -> bool {
    RESERVED_ALIASES.contains(&alias)
}
