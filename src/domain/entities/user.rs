//! User account entities.

use uuid::Uuid;

/// A registered user.
///
/// `password_digest` holds a bcrypt hash, never the raw password.
#[derive(Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[sqlx(rename = "password")]
    pub password_digest: String,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_digest", &"<redacted>")
            .finish()
    }
}

/// Input data for creating a user. A missing `id` is generated on insert.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Option<Uuid>,
    pub username: String,
    pub password_digest: String,
}

impl NewUser {
    /// Returns the caller-supplied id or a fresh v4 UUID.
    pub fn id_or_generate(&self) -> Uuid {
        self.id.unwrap_or_else(Uuid::new_v4)
    }
}

/// Identity recovered from a valid bearer token.
///
/// Inserted into request extensions by the auth middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
}
