//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its target URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Lookup is exact: `Docs` does not resolve `docs`.
///
/// # Response
///
/// `302 Found` with the target in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.url_service.resolve(&alias).await?;

    tracing::debug!(alias = %alias, target = %target, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, target)]))
}
