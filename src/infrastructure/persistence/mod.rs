//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain capability traits using SQLx
//! prepared statements.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - Alias mappings (save, lookup, creator-scoped delete)
//! - [`PgUserRepository`] - User accounts
//! - [`PgHealthCheck`] - Connectivity check for `/health`

pub mod pg_health_check;
pub mod pg_url_repository;
pub mod pg_user_repository;

pub use pg_health_check::PgHealthCheck;
pub use pg_url_repository::PgUrlRepository;
pub use pg_user_repository::PgUserRepository;
