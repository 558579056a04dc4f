//! PostgreSQL implementation of the short URL store.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::{UrlGetter, UrlRemover, UrlSaver};
use crate::error::AppError;
use crate::utils::db_error::{URL_ALIAS_CONSTRAINT, is_unique_violation_on};

/// PostgreSQL repository for alias mappings.
///
/// Implements all three URL capabilities; callers only see the trait they
/// were handed. Alias comparisons are plain `=` on `TEXT`, which is
/// byte-exact.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Returns every stored alias equal to `alias` ignoring case.
    async fn case_variants(&self, alias: &str) -> Result<Vec<String>, AppError> {
        let variants = sqlx::query_scalar::<_, String>(
            r#"
            SELECT alias
            FROM url
            WHERE lower(alias) = lower($1)
            "#,
        )
        .bind(alias)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(variants)
    }
}

#[async_trait]
impl UrlSaver for PgUrlRepository {
    async fn save(&self, new_url: NewShortUrl) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();

        let result = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO url (id, alias, url, creator)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(&new_url.alias)
        .bind(&new_url.target)
        .bind(new_url.creator)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(id) => Ok(id),
            Err(e) if is_unique_violation_on(&e, URL_ALIAS_CONSTRAINT) => {
                Err(AppError::AliasExists {
                    alias: new_url.alias,
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl UrlGetter for PgUrlRepository {
    async fn get_url(&self, alias: &str) -> Result<String, AppError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = $1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| AppError::UrlNotFound {
                alias: alias.to_string(),
            })
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrl>(
            r#"
            SELECT id, alias, url, creator, created_at
            FROM url
            WHERE alias = $1
            "#,
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }
}

#[async_trait]
impl UrlRemover for PgUrlRepository {
    async fn delete_url(&self, alias: &str, creator: Uuid) -> Result<bool, AppError> {
        let variants = self.case_variants(alias).await?;

        if !variants.is_empty() && !variants.iter().any(|v| v == alias) {
            return Err(AppError::CaseMismatch {
                alias: alias.to_string(),
            });
        }

        let result = sqlx::query("DELETE FROM url WHERE alias = $1 AND creator = $2")
            .bind(alias)
            .bind(creator)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                AppError::internal(
                    "failed to execute delete statement",
                    json!({ "source": e.to_string(), "alias": alias }),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::AliasNotFound {
                alias: alias.to_string(),
            });
        }

        Ok(true)
    }
}
