//! Handlers for creating and deleting short URLs.

use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::STATUS_OK;
use crate::api::dto::url::{DeleteUrlResponse, SaveUrlRequest, SaveUrlResponse};
use crate::domain::entities::AuthenticatedUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL owned by the caller.
///
/// # Endpoint
///
/// `POST /url` (Bearer token required)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/very/long", "alias": "docs" }
/// ```
///
/// `alias` is optional; when omitted or empty a random one is generated.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL or alias is invalid.
/// Returns 409 Conflict if the requested alias already exists.
pub async fn save_url_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    payload: Result<Json<SaveUrlRequest>, JsonRejection>,
) -> Result<Json<SaveUrlResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let alias = state
        .url_service
        .shorten(&payload.url, payload.alias, user.user_id)
        .await?;

    Ok(Json(SaveUrlResponse {
        status: STATUS_OK.to_string(),
        alias,
    }))
}

/// Deletes a short URL. Only its creator may do so, and the alias must match
/// the stored one exactly, including case.
///
/// # Endpoint
///
/// `DELETE /url/{alias}` (Bearer token required)
///
/// # Errors
///
/// Returns 409 Conflict with code `case_mismatch` if the alias exists only
/// with different letter case.
/// Returns 404 Not Found with code `alias_not_found` if there is nothing to
/// delete for this caller.
pub async fn delete_url_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(alias): Path<String>,
) -> Result<Json<DeleteUrlResponse>, AppError> {
    state.url_service.remove(&alias, user.user_id).await?;

    Ok(Json(DeleteUrlResponse {
        status: STATUS_OK.to_string(),
        alias,
        info: "Deleted".to_string(),
    }))
}
