//! Infrastructure layer for external integrations.
//!
//! This layer implements the storage interfaces defined by the domain layer
//! and the cache backend.
//!
//! # Modules
//!
//! - [`cache`] - Typed cache with Redis and no-op stores
//! - [`persistence`] - JSON file repository for the record document

pub mod cache;
pub mod persistence;
