#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use favstore::application::services::FavoritesService;
use favstore::infrastructure::cache::{CacheResult, CacheStore};
use favstore::infrastructure::persistence::JsonRecordRepository;

/// A favorites service over a record file inside a fresh temporary directory.
///
/// The directory is deleted when the returned guard is dropped.
pub fn temp_favorites() -> (TempDir, FavoritesService<JsonRecordRepository>) {
    let dir = TempDir::new().unwrap();
    let repository = JsonRecordRepository::new(dir.path().join("record.json"));
    (dir, FavoritesService::new(Arc::new(repository)))
}

pub fn record_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("record.json")
}

/// In-memory cache store that remembers the TTL of every key.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, (String, Option<u64>)>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).map(|(v, _)| v.clone())
    }

    pub fn ttl(&self, key: &str) -> Option<Option<u64>> {
        self.entries.lock().unwrap().get(key).map(|(_, ttl)| *ttl)
    }

    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), None));
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), ttl_seconds));
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
