//! Alias generation and validation utilities.
//!
//! Random aliases are drawn from a fixed alphanumeric alphabet. Caller-supplied
//! aliases are checked for shape only and are never rewritten: no trimming and
//! no case folding.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Symbols used for generated aliases.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Longest alias accepted from a caller.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Aliases that would shadow a route of the service itself.
const RESERVED_ALIASES: &[&str] = &["health", "login", "register", "url"];

/// Generates a random alias of exactly `length` characters.
///
/// Each position is drawn independently and uniformly from [`ALPHABET`].
/// Uniqueness is not guaranteed; the store detects collisions.
///
/// `length` must be greater than zero; configuration validation enforces it.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alias(length: usize) -> String {
    debug_assert!(length > 0, "alias length must be positive");

    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

/// Validates a user-provided alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters (either case), digits, `-` and `_`
/// - Cannot be a reserved route name (exact match)
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || alias.len() > MAX_ALIAS_LENGTH {
        return Err(AppError::bad_request(
            format!("alias must be 1-{MAX_ALIAS_LENGTH} characters"),
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "alias can only contain letters, digits, hyphens and underscores",
            json!({ "alias": alias }),
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::bad_request(
            "this alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}
