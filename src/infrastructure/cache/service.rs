//! Cache store trait and error types.

use async_trait::async_trait;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The backend could not be reached or refused the connection.
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    /// The backend rejected or failed a command.
    #[error("Cache operation error: {0}")]
    OperationError(String),

    /// A value could not be encoded, or a stored payload could not be decoded.
    #[error("Cache serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Raw string key/value backend with expiring keys.
///
/// Keys passed here are already namespaced; category handling and
/// serialization live in [`crate::infrastructure::cache::TypedCache`].
/// Implementations report failures as errors and leave the fail-open policy to
/// the caller. Each call must be atomic at the backend; no client-side locking
/// is expected.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisStore`] - Redis-backed store
/// - [`crate::infrastructure::cache::NullStore`] - No-op store for bypass mode
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Retrieves the raw payload stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(payload))` on hit
    /// - `Ok(None)` on miss
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the backend call fails.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key`.
    ///
    /// # Arguments
    ///
    /// - `key` - Fully namespaced key
    /// - `value` - Serialized payload
    /// - `ttl_seconds` - Expiration in seconds, or `None` to keep the key until deleted
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the backend call fails.
    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()>;

    /// Removes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the backend call fails.
    async fn delete(&self, key: &str) -> CacheResult<()>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
