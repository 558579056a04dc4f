//! Capability traits for short URL storage.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;

/// Persists new alias mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlSaver: Send + Sync {
    /// Inserts a mapping and returns the new record id.
    ///
    /// Uniqueness is enforced by the store itself, so two concurrent saves of
    /// the same alias produce exactly one success.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasExists`] if the alias is already taken.
    /// Returns [`AppError::Internal`] on any other database error.
    async fn save(&self, new_url: NewShortUrl) -> Result<Uuid, AppError>;
}

/// Looks up alias mappings by exact alias.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlGetter: Send + Sync {
    /// Returns the target URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UrlNotFound`] if no record has exactly this alias.
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_url(&self, alias: &str) -> Result<String, AppError>;

    /// Returns the full record stored under `alias`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_alias(&self, alias: &str) -> Result<Option<ShortUrl>, AppError>;
}

/// Deletes alias mappings on behalf of their creator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRemover: Send + Sync {
    /// Deletes the record with exactly `alias` if it belongs to `creator`.
    ///
    /// The exact-case check runs before the delete so that a casing mistake
    /// is reported separately from a missing or foreign alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CaseMismatch`] if only a different-case variant exists.
    /// Returns [`AppError::AliasNotFound`] if no record matches alias and creator.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_url(&self, alias: &str, creator: Uuid) -> Result<bool, AppError>;
}
