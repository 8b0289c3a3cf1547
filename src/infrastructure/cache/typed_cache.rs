//! Category-aware cache facade.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use super::category::CacheCategory;
use super::null_store::NullStore;
use super::redis_store::RedisStore;
use super::service::{CacheResult, CacheStore};
use crate::config::Config;

/// Typed cache in front of expensive upstream lookups.
///
/// Values are stored as JSON under `prefix(category) + key` with the
/// category's default TTL unless the caller overrides it.
///
/// The cache is advisory. [`get`](Self::get), [`set`](Self::set) and
/// [`delete`](Self::delete) never fail: backend errors and undecodable
/// payloads are logged and degrade the call to a miss or no-op. The `try_*`
/// variants return the underlying [`CacheResult`] instead.
///
/// # Bypass Mode
///
/// A disabled cache never touches a backend: reads always miss and writes do
/// nothing. It is used when caching is turned off in configuration, and for
/// the rest of the process lifetime when Redis is unreachable at startup.
pub struct TypedCache {
    store: Arc<dyn CacheStore>,
    enabled: bool,
}

impl TypedCache {
    /// Creates an enabled cache on top of `store`.
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self {
            store,
            enabled: true,
        }
    }

    /// Creates a cache in bypass mode.
    pub fn disabled() -> Self {
        Self {
            store: Arc::new(NullStore::new()),
            enabled: false,
        }
    }

    /// Builds the cache described by `config`.
    ///
    /// Falls back to bypass mode when caching is disabled or the Redis
    /// connection or PING fails. There is no reconnect loop.
    pub async fn connect(config: &Config) -> Self {
        if !config.is_cache_enabled() {
            info!("Cache disabled (bypass mode)");
            return Self::disabled();
        }

        match RedisStore::connect(&config.redis_url).await {
            Ok(redis) => {
                info!("Cache enabled (Redis)");
                Self::new(Arc::new(redis))
            }
            Err(e) => {
                warn!("Failed to connect to Redis: {}. Caching disabled.", e);
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Looks up and decodes the value cached under `key` in `category`.
    ///
    /// # Errors
    ///
    /// Returns the backend error, or
    /// [`CacheError::SerializationError`](super::CacheError::SerializationError)
    /// if the stored payload does not decode as `T`.
    pub async fn try_get<T: DeserializeOwned>(
        &self,
        key: &str,
        category: CacheCategory,
    ) -> CacheResult<Option<T>> {
        if !self.enabled {
            return Ok(None);
        }

        let payload = self.store.get(&category.key(key)).await?;
        match payload {
            Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }

    /// Encodes `value` and stores it under `key` in `category`.
    ///
    /// `ttl_override` replaces the category default. A TTL of `0` stores the
    /// key without expiration.
    ///
    /// # Errors
    ///
    /// Returns the backend error, or a serialization error if `value` cannot
    /// be encoded.
    pub async fn try_set<T: Serialize + Sync + ?Sized>(
        &self,
        key: &str,
        category: CacheCategory,
        value: &T,
        ttl_override: Option<u64>,
    ) -> CacheResult<()> {
        if !self.enabled {
            return Ok(());
        }

        let payload = serde_json::to_string(value)?;
        let ttl = ttl_override.unwrap_or(category.default_ttl());
        let ttl = (ttl > 0).then_some(ttl);

        self.store.set(&category.key(key), &payload, ttl).await
    }

    /// Removes `key` from `category`.
    ///
    /// # Errors
    ///
    /// Returns the backend error.
    pub async fn try_delete(&self, key: &str, category: CacheCategory) -> CacheResult<()> {
        if !self.enabled {
            return Ok(());
        }

        self.store.delete(&category.key(key)).await
    }

    /// Looks up `key` in `category`, returning `None` on miss or any failure.
    pub async fn get<T: DeserializeOwned>(&self, key: &str, category: CacheCategory) -> Option<T> {
        match self.try_get(key, category).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Cache get failed: key={}, category={}, error={}", key, category, e);
                None
            }
        }
    }

    /// Stores `value` under `key` in `category`, logging any failure.
    pub async fn set<T: Serialize + Sync + ?Sized>(
        &self,
        key: &str,
        category: CacheCategory,
        value: &T,
        ttl_override: Option<u64>,
    ) {
        if let Err(e) = self.try_set(key, category, value, ttl_override).await {
            warn!("Cache set failed: key={}, category={}, error={}", key, category, e);
        }
    }

    /// Removes `key` from `category`, logging any failure.
    pub async fn delete(&self, key: &str, category: CacheCategory) {
        if let Err(e) = self.try_delete(key, category).await {
            warn!("Cache delete failed: key={}, category={}, error={}", key, category, e);
        }
    }

    /// Checks the backend. Always `false` in bypass mode.
    pub async fn health_check(&self) -> bool {
        self.enabled && self.store.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cache::{CacheError, MockCacheStore};
    use serde_json::json;

    #[tokio::test]
    async fn test_set_applies_category_default_ttl() {
        let mut store = MockCacheStore::new();
        store
            .expect_set()
            .withf(|key, value, ttl| {
                key == "av-abc-001" && value == "{\"n\":1}" && *ttl == Some(2_592_000)
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let cache = TypedCache::new(Arc::new(store));

        cache
            .try_set("abc-001", CacheCategory::Title, &json!({ "n": 1 }), None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_set_override_replaces_default_ttl() {
        let mut store = MockCacheStore::new();
        store
            .expect_set()
            .withf(|key, _, ttl| key == "magnet-abc" && *ttl == Some(60))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let cache = TypedCache::new(Arc::new(store));

        cache.set("abc", CacheCategory::Magnet, &vec!["m1"], Some(60)).await;
    }

    #[tokio::test]
    async fn test_zero_ttl_stores_without_expiration() {
        let mut store = MockCacheStore::new();
        store
            .expect_set()
            .withf(|_, _, ttl| ttl.is_none())
            .times(2)
            .returning(|_, _, _| Ok(()));

        let cache = TypedCache::new(Arc::new(store));

        cache.set("s1", CacheCategory::Actor, "Name", None).await;
        cache.set("abc", CacheCategory::Rank, "x", Some(0)).await;
    }

    #[tokio::test]
    async fn test_get_decodes_payload() {
        let mut store = MockCacheStore::new();
        store
            .expect_get()
            .withf(|key| key == "comment-abc")
            .times(1)
            .returning(|_| Ok(Some("[\"nice\",\"ok\"]".to_string())));

        let cache = TypedCache::new(Arc::new(store));
        let comments: Option<Vec<String>> = cache.get("abc", CacheCategory::Comment).await;

        assert_eq!(comments, Some(vec!["nice".to_string(), "ok".to_string()]));
    }

    #[tokio::test]
    async fn test_malformed_payload_is_a_miss() {
        let mut store = MockCacheStore::new();
        store
            .expect_get()
            .times(2)
            .returning(|_| Ok(Some("{truncated".to_string())));

        let cache = TypedCache::new(Arc::new(store));

        let value: Option<serde_json::Value> = cache.get("abc", CacheCategory::Title).await;
        assert!(value.is_none());

        let err = cache
            .try_get::<serde_json::Value>("abc", CacheCategory::Title)
            .await
            .unwrap_err();
        assert!(matches!(err, CacheError::SerializationError(_)));
    }

    #[tokio::test]
    async fn test_backend_errors_degrade_to_miss_and_noop() {
        let mut store = MockCacheStore::new();
        store
            .expect_get()
            .returning(|_| Err(CacheError::OperationError("connection reset".into())));
        store
            .expect_set()
            .returning(|_, _, _| Err(CacheError::OperationError("connection reset".into())));
        store
            .expect_delete()
            .returning(|_| Err(CacheError::OperationError("connection reset".into())));

        let cache = TypedCache::new(Arc::new(store));

        let value: Option<String> = cache.get("abc", CacheCategory::Sample).await;
        assert!(value.is_none());
        cache.set("abc", CacheCategory::Sample, "x", None).await;
        cache.delete("abc", CacheCategory::Sample).await;
        assert!(cache.try_delete("abc", CacheCategory::Sample).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_uses_category_key() {
        let mut store = MockCacheStore::new();
        store
            .expect_delete()
            .withf(|key| key == "new-avs-of-star-s1")
            .times(1)
            .returning(|_| Ok(()));

        let cache = TypedCache::new(Arc::new(store));

        cache.delete("s1", CacheCategory::NewTitlesOfActor).await;
    }

    #[tokio::test]
    async fn test_disabled_cache_never_calls_store() {
        let cache = TypedCache::disabled();

        assert!(!cache.is_enabled());
        cache.set("k", CacheCategory::Pv, &1u32, None).await;
        cache.delete("k", CacheCategory::Pv).await;
        let value: Option<u32> = cache.get("k", CacheCategory::Pv).await;
        assert!(value.is_none());
        assert!(!cache.health_check().await);
    }
}
