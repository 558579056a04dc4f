//! Core domain entities.
//!
//! Entities are plain data structures. Creation inputs live next to the
//! stored shape:
//!
//! - [`ShortUrl`] / [`NewShortUrl`] - alias mappings
//! - [`User`] / [`NewUser`] - registered accounts
//! - [`AuthenticatedUser`] - identity recovered from a bearer token

pub mod short_url;
pub mod user;

pub use short_url::{NewShortUrl, ShortUrl};
pub use user::{AuthenticatedUser, NewUser, User};
