//! API route configuration.

use crate::api::handlers::{
    delete_url_handler, health_handler, login_handler, redirect_handler, register_handler,
    save_url_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Routes reachable without a token.
///
/// - `GET  /{alias}`   - Redirect to the target URL
/// - `GET  /health`    - Database health check
/// - `POST /register`  - Create an account
/// - `POST /login`     - Obtain a bearer token
///
/// Static segments take priority over `/{alias}`, which is why those words
/// cannot be used as aliases.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/{alias}", get(redirect_handler))
}

/// Routes that require Bearer token authentication.
///
/// - `POST   /url`          - Create a short URL
/// - `DELETE /url/{alias}`  - Delete one of the caller's short URLs
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_url_handler))
        .route("/url/{alias}", delete(delete_url_handler))
}
