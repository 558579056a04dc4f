//! PostgreSQL implementation of the user store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::{UserFinder, UserRegistrar};
use crate::error::AppError;
use crate::utils::db_error::{USERS_USERNAME_CONSTRAINT, is_unique_violation_on};

/// PostgreSQL repository for user accounts.
///
/// Stores bcrypt digests only. Raw passwords never reach this layer.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRegistrar for PgUserRepository {
    async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let id = new_user.id_or_generate();

        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, password)
            VALUES ($1, $2, $3)
            RETURNING id, username, password
            "#,
        )
        .bind(id)
        .bind(&new_user.username)
        .bind(&new_user.password_digest)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(e) if is_unique_violation_on(&e, USERS_USERNAME_CONSTRAINT) => {
                Err(AppError::UsernameTaken {
                    username: new_user.username,
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl UserFinder for PgUserRepository {
    async fn get_user_by_username(&self, username: &str) -> Result<User, AppError> {
        sqlx::query_as::<_, User>("SELECT id, username, password FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| AppError::UserNotFound {
                username: username.to_string(),
            })
    }
}
