//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`      - Short URL redirect (public)
//! - `GET    /health`       - Health check (public)
//! - `POST   /register`     - Account creation (public)
//! - `POST   /login`        - Token issue (public)
//! - `POST   /url`          - Create short URL (Bearer token required)
//! - `DELETE /url/{alias}`  - Delete short URL (Bearer token required)
//!
//! # Middleware (outermost first)
//!
//! - **Request id** - assigns and echoes `x-request-id`
//! - **Tracing** - structured request/response logging
//! - **Timeout** - aborts requests running past the configured limit
//! - **Authentication** - Bearer token, protected routes only

use std::time::Duration;

use crate::api;
use crate::api::middleware::{auth, request_id, tracing};
use crate::state::AppState;
use axum::{Router, http::StatusCode, middleware};
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - per-request limit; slower requests get `408`
pub fn app_router(state: AppState, request_timeout: Duration) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .merge(api::routes::public_routes())
        .merge(protected)
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(tracing::layer())
        .layer(request_id::propagate_layer())
        .layer(request_id::set_layer())
}
