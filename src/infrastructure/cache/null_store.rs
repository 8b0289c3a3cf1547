//! No-op cache store for bypass mode.

use super::service::{CacheResult, CacheStore};
use async_trait::async_trait;
use tracing::debug;

/// A cache store that stores nothing.
///
/// Backs [`crate::infrastructure::cache::TypedCache`] in bypass mode: when
/// caching is disabled by configuration or Redis was unreachable at startup.
/// Every read misses and every write succeeds without effect.
pub struct NullStore;

impl NullStore {
    /// Creates a new NullStore instance.
    pub fn new() -> Self {
        debug!("Using NullStore (caching disabled)");
        Self
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for NullStore {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str, _ttl_seconds: Option<u64>) -> CacheResult<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
