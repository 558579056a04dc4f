//! Application error type and its HTTP mapping.
//!
//! Every layer returns [`AppError`]. Domain outcomes (alias taken, alias not
//! found, bad credentials, ...) are ordinary variants; storage faults collapse
//! into [`AppError::Internal`], whose details are logged but never sent to the
//! client.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub code: &'static str,
    pub error: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("alias already exists")]
    AliasExists { alias: String },

    #[error("url not found")]
    UrlNotFound { alias: String },

    #[error("case sensitivity problem")]
    CaseMismatch { alias: String },

    #[error("alias not found")]
    AliasNotFound { alias: String },

    #[error("username already taken")]
    UsernameTaken { username: String },

    #[error("user not found")]
    UserNotFound { username: String },

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("unauthorized")]
    Unauthorized { reason: String },

    #[error("internal error")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self::Unauthorized {
            reason: reason.into(),
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::AliasExists { .. } => "alias_exists",
            AppError::UrlNotFound { .. } => "url_not_found",
            AppError::CaseMismatch { .. } => "case_mismatch",
            AppError::AliasNotFound { .. } => "alias_not_found",
            AppError::UsernameTaken { .. } => "username_taken",
            AppError::UserNotFound { .. } => "user_not_found",
            AppError::InvalidCredentials => "invalid_credentials",
            AppError::Unauthorized { .. } => "unauthorized",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::AliasExists { .. }
            | AppError::CaseMismatch { .. }
            | AppError::UsernameTaken { .. } => StatusCode::CONFLICT,
            AppError::UrlNotFound { .. }
            | AppError::AliasNotFound { .. }
            | AppError::UserNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials | AppError::Unauthorized { .. } => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the client-facing body. Internal details are dropped here.
    pub fn to_error_body(&self) -> ErrorBody {
        let details = match self {
            AppError::Validation { details, .. } => details.clone(),
            _ => Value::Null,
        };

        ErrorBody {
            status: "Error",
            code: self.code(),
            error: self.to_string(),
            details,
        }
    }

    fn log(&self) {
        match self {
            AppError::Internal { message, details } => {
                tracing::error!(code = self.code(), %details, "{message}");
            }
            AppError::Unauthorized { reason } => {
                tracing::info!(code = self.code(), reason = %reason, "request rejected");
            }
            AppError::Validation { message, .. } => {
                tracing::info!(code = self.code(), "invalid request: {message}");
            }
            other => {
                tracing::info!(code = other.code(), "{other}");
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let body = Json(self.to_error_body());

        if matches!(self, AppError::Unauthorized { .. }) {
            return (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response();
        }

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        let constraint = e
            .as_database_error()
            .and_then(|db| db.constraint().map(str::to_owned));

        AppError::internal(
            "Database error",
            json!({ "source": e.to_string(), "constraint": constraint }),
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
        fields.sort();

        let message = match fields.as_slice() {
            [field] => format!("field {field} is not valid"),
            _ => format!("fields {} are not valid", fields.join(", ")),
        };

        AppError::bad_request(message, json!(errors))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "failed to decode request",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
