pub mod in_memory;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("value for key {key} changed since it was read")]
    Conflict { key: String },

    #[error("cache unavailable: {0}")]
    Unavailable(String),
}

/// Key-value cache whose entries read as absent once their time-to-live elapses.
#[async_trait]
pub trait ExpiringCache<Value: Clone + PartialEq + Send + Sync + 'static>: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, CacheError>;

    async fn set(&self, key: &str, value: Value, ttl: Duration) -> Result<(), CacheError>;

    /// Writes `value` only if the live entry still equals `expected`
    /// (`None` meaning absent or expired). Fails with `CacheError::Conflict` otherwise.
    async fn compare_and_swap(
        &self,
        key: &str,
        expected: Option<Value>,
        value: Value,
        ttl: Duration,
    ) -> Result<(), CacheError>;
}
