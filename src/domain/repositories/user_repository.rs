//! Capability traits for user account storage.

use async_trait::async_trait;

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;

/// Creates user accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistrar: Send + Sync {
    /// Inserts a user, generating an id when `new_user.id` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UsernameTaken`] if the username already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create_user(&self, new_user: NewUser) -> Result<User, AppError>;
}

/// Looks up user accounts for login.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserFinder: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::UserNotFound`] if no user has this username.
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_user_by_username(&self, username: &str) -> Result<User, AppError>;
}
