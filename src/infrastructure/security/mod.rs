//! Credential primitives: password hashing and bearer token signing.
//!
//! - [`PasswordHasher`] - bcrypt digests computed on the blocking pool
//! - [`TokenIssuer`] - HS256 JWTs carrying the caller identity

pub mod jwt;
pub mod password;

pub use jwt::{Claims, TokenIssuer};
pub use password::PasswordHasher;
