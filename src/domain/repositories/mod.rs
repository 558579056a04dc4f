//! Store capability traits for the domain layer.
//!
//! Each trait covers one slice of store behaviour so that services and
//! handlers depend only on what they use. Implementations live in
//! `crate::infrastructure::persistence`; `mockall` mocks are generated for
//! unit tests.
//!
//! # Capabilities
//!
//! - [`UrlSaver`], [`UrlGetter`], [`UrlRemover`] - alias mappings
//! - [`UserRegistrar`], [`UserFinder`] - user accounts
//! - [`HealthCheck`] - store liveness check
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod health_check;
pub mod url_repository;
pub mod user_repository;

pub use health_check::HealthCheck;
pub use url_repository::{UrlGetter, UrlRemover, UrlSaver};
pub use user_repository::{UserFinder, UserRegistrar};

#[cfg(test)]
pub use health_check::MockHealthCheck;
#[cfg(test)]
pub use url_repository::{MockUrlGetter, MockUrlRemover, MockUrlSaver};
#[cfg(test)]
pub use user_repository::{MockUserFinder, MockUserRegistrar};
