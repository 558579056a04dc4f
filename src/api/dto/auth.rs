//! DTOs for registration and login.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// bcrypt ignores password bytes past this length.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Credentials accepted by `POST /register`.
///
/// The password limit matches bcrypt, which ignores input past 72 bytes.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,

    #[validate(length(min = 1), custom(function = "validate_password_bytes"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,

    #[validate(length(min = 1), custom(function = "validate_password_bytes"))]
    pub password: String,
}

/// Length limits on `length` count characters; bcrypt counts bytes.
fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("password_too_long"));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub status: String,
    pub user_id: Uuid,
    pub username: String,
}

/// Bearer token returned by `POST /login`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
