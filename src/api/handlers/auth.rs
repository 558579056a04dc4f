//! Handlers for account registration and login.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::STATUS_OK;
use crate::api::dto::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a user account.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "correct horse" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "status": "OK", "user_id": "6f1c...", "username": "alice" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or a field is out of range.
/// Returns 409 Conflict if the username is taken.
pub async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let user = state
        .auth_service
        .register(&payload.username, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            status: STATUS_OK.to_string(),
            user_id: user.id,
            username: user.username,
        }),
    ))
}

/// Exchanges credentials for a bearer token.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Errors
///
/// Returns 401 Unauthorized with code `invalid_credentials` for an unknown
/// user or a wrong password. The two cases are indistinguishable.
pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let token = state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(LoginResponse { token }))
}
