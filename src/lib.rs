//! # favstore
//!
//! Persistence core for a Telegram bot's favorites feature.
//!
//! ## Architecture
//!
//! The crate keeps the layer split of a clean-architecture service:
//!
//! - **Domain Layer** ([`domain`]) - Record entities and the repository trait
//! - **Application Layer** ([`application`]) - [`FavoritesService`], the record store API
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file repository and the
//!   Redis-backed [`TypedCache`]
//!
//! The two tiers are independent. The record file is the only durable truth;
//! the cache is a disposable accelerator and every cache miss must be
//! recomputable by the caller. Neither tier raises faults to command handlers:
//! they are logged and reported through return values.
//!
//! ## Quick Start
//!
//! ```bash
//! export RECORD_FILE="data/record.json"
//! export USE_CACHE=1
//! export REDIS_URL="redis://localhost:6379/0"
//!
//! cargo run --bin favctl -- stars list
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! Handlers receive everything through a [`BotContext`] built once at startup.
//!
//! [`FavoritesService`]: application::services::FavoritesService
//! [`TypedCache`]: infrastructure::cache::TypedCache

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod telemetry;

pub use error::{StoreError, StoreResult};
pub use state::BotContext;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{FavoritesService, RecordSnapshot};
    pub use crate::domain::entities::{FavoriteActor, FavoriteTitle, Group, Record};
    pub use crate::error::{StoreError, StoreResult};
    pub use crate::infrastructure::cache::{CacheCategory, CacheError, TypedCache};
    pub use crate::state::BotContext;
}
