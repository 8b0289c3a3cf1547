use std::sync::Arc;

use crate::application::services::FavoritesService;
use crate::config::Config;
use crate::infrastructure::cache::TypedCache;
use crate::infrastructure::persistence::JsonRecordRepository;

/// Shared handles passed to every command handler.
///
/// Built once at startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct BotContext {
    pub favorites: Arc<FavoritesService<JsonRecordRepository>>,
    pub cache: Arc<TypedCache>,
}

impl BotContext {
    pub fn new(
        favorites: Arc<FavoritesService<JsonRecordRepository>>,
        cache: Arc<TypedCache>,
    ) -> Self {
        Self { favorites, cache }
    }

    /// Opens the record store at `config.record_file` and connects the cache.
    ///
    /// Never fails: an unreachable Redis leaves the cache in bypass mode.
    pub async fn from_config(config: &Config) -> Self {
        let repository = Arc::new(JsonRecordRepository::new(config.record_file.clone()));
        let favorites = Arc::new(FavoritesService::new(repository));
        let cache = Arc::new(TypedCache::connect(config).await);

        Self::new(favorites, cache)
    }
}
