//! bcrypt password hashing.

use serde_json::json;
use std::sync::Arc;

use crate::error::AppError;

/// Hashes and verifies passwords with bcrypt.
///
/// Every bcrypt call runs on tokio's blocking pool.
#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
    /// Digest verified against when the user does not exist, so a failed
    /// login costs the same whether or not the username is known.
    dummy_digest: Arc<str>,
}

impl PasswordHasher {
    /// Creates a hasher using the given bcrypt cost (4-31).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if bcrypt rejects the cost.
    pub fn new(cost: u32) -> Result<Self, AppError> {
        let dummy_digest = bcrypt::hash("not-a-real-password", cost).map_err(bcrypt_error)?;

        Ok(Self {
            cost,
            dummy_digest: dummy_digest.into(),
        })
    }

    /// Produces a salted bcrypt digest of `password`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if hashing fails or the blocking task panics.
    pub async fn hash(&self, password: &str) -> Result<String, AppError> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(join_error)?
            .map_err(bcrypt_error)
    }

    /// Checks `password` against a stored digest.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the digest is malformed.
    pub async fn verify(&self, password: &str, digest: &str) -> Result<bool, AppError> {
        let password = password.to_owned();
        let digest = digest.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &digest))
            .await
            .map_err(join_error)?
            .map_err(bcrypt_error)
    }

    /// Runs a verification that always fails, spending the same time as a real one.
    pub async fn verify_dummy(&self, password: &str) {
        let digest = self.dummy_digest.clone();
        let _ = self.verify(password, &digest).await;
    }
}

fn bcrypt_error(e: bcrypt::BcryptError) -> AppError {
    AppError::internal("password hashing failed", json!({ "source": e.to_string() }))
}

fn join_error(e: tokio::task::JoinError) -> AppError {
    AppError::internal("password hashing task failed", json!({ "source": e.to_string() }))
}
