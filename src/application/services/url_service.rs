//! Alias allocation, resolution and creator-scoped removal.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::NewShortUrl;
use crate::domain::repositories::{UrlGetter, UrlRemover, UrlSaver};
use crate::error::AppError;
use crate::utils::alias_generator::{generate_alias, validate_alias};
use crate::utils::target_url::validate_target_url;

/// Alias generation parameters, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasSettings {
    /// Length of generated aliases.
    pub length: usize,
    /// Generate-and-save attempts before giving up on a generated alias.
    pub max_attempts: usize,
}

impl Default for AliasSettings {
    fn default() -> Self {
        Self {
            length: 6,
            max_attempts: 5,
        }
    }
}

/// Service for creating, resolving and deleting short URLs.
///
/// Coordination happens in the store: uniqueness comes from the alias
/// constraint, so this service holds no locks.
pub struct UrlService {
    saver: Arc<dyn UrlSaver>,
    getter: Arc<dyn UrlGetter>,
    remover: Arc<dyn UrlRemover>,
    settings: AliasSettings,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(
        saver: Arc<dyn UrlSaver>,
        getter: Arc<dyn UrlGetter>,
        remover: Arc<dyn UrlRemover>,
        settings: AliasSettings,
    ) -> Self {
        Self {
            saver,
            getter,
            remover,
            settings,
        }
    }

    /// Stores `target` under an alias owned by `creator` and returns the alias.
    ///
    /// # Alias selection
    ///
    /// - `requested_alias` present and non-empty: validated and saved once.
    ///   A taken alias is reported, never silently replaced.
    /// - Otherwise: a random alias of the configured length is generated and
    ///   saved, regenerating on collision up to `max_attempts` times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the target or requested alias is malformed.
    /// Returns [`AppError::AliasExists`] if the requested alias is taken.
    /// Returns [`AppError::Internal`] if every generated alias collided, or on
    /// database errors.
    pub async fn shorten(
        &self,
        target: &str,
        requested_alias: Option<String>,
        creator: Uuid,
    ) -> Result<String, AppError> {
        validate_target_url(target).map_err(|e| {
            AppError::bad_request("field URL is not a valid URL", json!({ "reason": e.to_string() }))
        })?;

        match requested_alias.filter(|alias| !alias.is_empty()) {
            Some(alias) => self.save_requested(target, alias, creator).await,
            None => self.save_generated(target, creator).await,
        }
    }

    async fn save_requested(
        &self,
        target: &str,
        alias: String,
        creator: Uuid,
    ) -> Result<String, AppError> {
        validate_alias(&alias)?;

        let id = self
            .saver
            .save(NewShortUrl::new(target, alias.clone(), creator))
            .await?;

        tracing::info!(%id, alias = %alias, "url added");
        Ok(alias)
    }

    async fn save_generated(&self, target: &str, creator: Uuid) -> Result<String, AppError> {
        for attempt in 1..=self.settings.max_attempts {
            let alias = generate_alias(self.settings.length);

            match self
                .saver
                .save(NewShortUrl::new(target, alias.clone(), creator))
                .await
            {
                Ok(id) => {
                    tracing::info!(%id, alias = %alias, attempt, "url added");
                    return Ok(alias);
                }
                Err(AppError::AliasExists { .. }) => {
                    tracing::warn!(alias = %alias, attempt, "generated alias collided, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique alias",
            json!({
                "reason": "Too many collisions",
                "attempts": self.settings.max_attempts,
                "length": self.settings.length,
            }),
        ))
    }

    /// Returns the target stored under exactly `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UrlNotFound`] if the alias was never saved.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        self.getter.get_url(alias).await
    }

    /// Deletes `alias` if `creator` owns it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CaseMismatch`] if only a different-case variant exists.
    /// Returns [`AppError::AliasNotFound`] if the alias does not exist or belongs
    /// to someone else.
    pub async fn remove(&self, alias: &str, creator: Uuid) -> Result<(), AppError> {
        if self.remover.delete_url(alias, creator).await? {
            tracing::info!(alias = %alias, %creator, "url deleted");
            Ok(())
        } else {
            Err(AppError::CaseMismatch {
                alias: alias.to_string(),
            })
        }
    }
}
