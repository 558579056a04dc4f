//! HTTP middleware for request processing and protection.
//!
//! Provides bearer authentication, request ids, timeouts and request tracing.

pub mod auth;
pub mod request_id;
pub mod tracing;
