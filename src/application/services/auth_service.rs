//! Registration, login and bearer token authentication.

use std::sync::Arc;

use crate::domain::entities::{AuthenticatedUser, NewUser, User};
use crate::domain::repositories::{UserFinder, UserRegistrar};
use crate::error::AppError;
use crate::infrastructure::security::{PasswordHasher, TokenIssuer};

/// Service for user registration and authentication.
///
/// Login failures never reveal whether the username exists: an unknown user
/// and a wrong password both produce [`AppError::InvalidCredentials`] after the
/// same amount of bcrypt work.
pub struct AuthService {
    registrar: Arc<dyn UserRegistrar>,
    finder: Arc<dyn UserFinder>,
    hasher: PasswordHasher,
    tokens: TokenIssuer,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(
        registrar: Arc<dyn UserRegistrar>,
        finder: Arc<dyn UserFinder>,
        hasher: PasswordHasher,
        tokens: TokenIssuer,
    ) -> Self {
        Self {
            registrar,
            finder,
            hasher,
            tokens,
        }
    }

    /// Hashes `password` and creates the user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UsernameTaken`] if the username is already registered.
    /// Returns [`AppError::Internal`] on hashing or database errors.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        let password_digest = self.hasher.hash(password).await?;

        let user = self
            .registrar
            .create_user(NewUser {
                id: None,
                username: username.to_string(),
                password_digest,
            })
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "user registered");
        Ok(user)
    }

    /// Verifies credentials and issues a signed bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCredentials`] if the user is unknown or the
    /// password does not match.
    /// Returns [`AppError::Internal`] on hashing, signing or database errors.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let user = match self.finder.get_user_by_username(username).await {
            Ok(user) => user,
            Err(AppError::UserNotFound { .. }) => {
                self.hasher.verify_dummy(password).await;
                tracing::info!(username = %username, "login failed: unknown user");
                return Err(AppError::InvalidCredentials);
            }
            Err(e) => return Err(e),
        };

        if !self.hasher.verify(password, &user.password_digest).await? {
            tracing::info!(username = %username, "login failed: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id, &user.username)?;

        tracing::info!(user_id = %user.id, "token issued");
        Ok(token)
    }

    /// Validates a bearer token and returns the caller identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is invalid, expired or malformed.
    pub fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        self.tokens.verify(token).map(AuthenticatedUser::from)
    }
}
