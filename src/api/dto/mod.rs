//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod auth;
pub mod health;
pub mod url;

/// Value of the `status` field on every successful JSON response.
pub const STATUS_OK: &str = "OK";
