//! Application layer services implementing business logic.
//!
//! Services consume domain capability traits and provide a clean API for
//! HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Alias allocation, redirects and deletion
//! - [`services::auth_service::AuthService`] - Registration, login and token validation

pub mod services;
