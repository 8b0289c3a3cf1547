//! Typed cache for expensive upstream lookups.
//!
//! [`TypedCache`] maps each [`CacheCategory`] to a key prefix and default TTL
//! and stores JSON payloads through a [`CacheStore`] backend:
//! - [`RedisStore`] - Production Redis-backed store
//! - [`NullStore`] - No-op store used in bypass mode

mod category;
mod null_store;
mod redis_store;
mod service;
mod typed_cache;

pub use category::{CacheCategory, UnknownCategory};
pub use null_store::NullStore;
pub use redis_store::RedisStore;
pub use service::{CacheError, CacheResult, CacheStore};
pub use typed_cache::TypedCache;

#[cfg(test)]
pub use service::MockCacheStore;
