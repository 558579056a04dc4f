//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, UrlService};
use crate::domain::repositories::HealthCheck;

/// Cloned per request; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub auth_service: Arc<AuthService>,
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    pub fn new(
        url_service: Arc<UrlService>,
        auth_service: Arc<AuthService>,
        health: Arc<dyn HealthCheck>,
    ) -> Self {
        Self {
            url_service,
            auth_service,
            health,
        }
    }
}
