//! Liveness check for the backing store.

use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Returns `Ok(())` if the store answers a trivial query.
    async fn ping(&self) -> Result<(), String>;
}
