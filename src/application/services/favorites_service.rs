//! Favorites and group membership service backed by the record document.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::domain::entities::{FavoriteActor, FavoriteTitle, Group, Record};
use crate::domain::repositories::RecordRepository;
use crate::error::StoreResult;

/// Result of [`FavoritesService::load_record`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSnapshot {
    /// The stored document, or `None` when nothing is stored or it could not be read.
    pub record: Option<Record>,
    /// Whether the document has at least one favorited actor.
    pub has_stars: bool,
    /// Whether the document has at least one favorited title.
    pub has_titles: bool,
}

impl RecordSnapshot {
    fn from_record(record: Option<Record>) -> Self {
        let has_stars = record.as_ref().is_some_and(Record::has_stars);
        let has_titles = record.as_ref().is_some_and(Record::has_titles);
        Self {
            record,
            has_stars,
            has_titles,
        }
    }
}

/// Service for querying and mutating favorites and groups.
///
/// Every mutation loads the whole document, changes one collection and writes
/// the whole document back. A single write lock is held for the duration of
/// that read-modify-write, so concurrent mutations within the process are
/// serialized and cannot drop each other's changes. Reads take no lock.
///
/// # Failure Handling
///
/// Repository errors never escape this service. They are logged and reported
/// as `false`, an empty collection or an absent record; callers must check the
/// returned value. A mutation that finds the document unreadable or malformed
/// treats it as empty and replaces it with the mutated document.
pub struct FavoritesService<R: RecordRepository> {
    repository: Arc<R>,
    write_lock: Mutex<()>,
}

impl<R: RecordRepository> FavoritesService<R> {
    /// Creates a new favorites service.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    /// Loads the document, reporting repository errors to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError::Read`] or
    /// [`crate::error::StoreError::Parse`] when the document exists but
    /// cannot be used.
    pub async fn try_load_record(&self) -> StoreResult<Option<Record>> {
        self.repository.load().await
    }

    /// Loads the document along with whether it holds actors and titles.
    ///
    /// An unreadable document is logged and returned the same way as a
    /// missing one; use [`Self::try_load_record`] to tell them apart.
    pub async fn load_record(&self) -> RecordSnapshot {
        match self.repository.load().await {
            Ok(record) => RecordSnapshot::from_record(record),
            Err(e) => {
                error!("Failed to load record: {}", e);
                RecordSnapshot::default()
            }
        }
    }

    /// Returns whether the actor id is favorited, ignoring case.
    ///
    /// Returns `false` when nothing is stored or the document cannot be read.
    pub async fn contains_actor(&self, actor_id: &str) -> bool {
        self.load_record()
            .await
            .record
            .is_some_and(|record| record.contains_actor(actor_id))
    }

    /// Returns whether the title id is favorited, ignoring case.
    ///
    /// Returns `false` when nothing is stored or the document cannot be read.
    pub async fn contains_title(&self, title_id: &str) -> bool {
        self.load_record()
            .await
            .record
            .is_some_and(|record| record.contains_title(title_id))
    }

    pub async fn list_favorite_actors(&self) -> Vec<FavoriteActor> {
        self.load_record()
            .await
            .record
            .map(|record| record.stars)
            .unwrap_or_default()
    }

    pub async fn list_favorite_titles(&self) -> Vec<FavoriteTitle> {
        self.load_record()
            .await
            .record
            .map(|record| record.avs)
            .unwrap_or_default()
    }

    pub async fn list_groups(&self) -> Vec<Group> {
        self.load_record()
            .await
            .record
            .map(|record| record.groups)
            .unwrap_or_default()
    }

    /// Persists `record` as the whole document.
    ///
    /// Returns `false` if it could not be written.
    pub async fn replace_record(&self, record: &Record) -> bool {
        let _guard = self.write_lock.lock().await;
        self.persist(record).await
    }

    /// Registers a group, or updates its title if the id is already known.
    ///
    /// The document is always rewritten. Returns `false` if that fails.
    pub async fn upsert_group(&self, group_id: i64, title: &str) -> bool {
        self.mutate("upsert group", |record| {
            record.upsert_group(group_id, title);
            true
        })
        .await
    }

    /// Removes a group by id.
    ///
    /// The document is only rewritten if the group was present. Returns
    /// `false` only if that rewrite fails.
    pub async fn remove_group(&self, group_id: i64) -> bool {
        self.mutate("remove group", |record| record.remove_group(group_id))
            .await
    }

    /// Favorites an actor. The id is stored lower-cased.
    ///
    /// Returns `true` without writing if the id is already favorited in any
    /// casing. Returns `false` only if persisting fails.
    pub async fn add_favorite_actor(&self, name: &str, actor_id: &str) -> bool {
        self.mutate("add favorite actor", |record| {
            record.insert_actor(name, actor_id)
        })
        .await
    }

    /// Favorites a title with the ids of its actors. The id is stored lower-cased.
    ///
    /// Returns `true` without writing if the id is already favorited in any
    /// casing. Returns `false` only if persisting fails.
    pub async fn add_favorite_title(&self, title_id: &str, actor_ids: Vec<String>) -> bool {
        self.mutate("add favorite title", |record| {
            record.insert_title(title_id, actor_ids)
        })
        .await
    }

    /// Removes the first favorited actor matching `actor_id`, ignoring case.
    ///
    /// Returns `true` when nothing matched. Returns `false` only if persisting
    /// the removal fails.
    pub async fn remove_favorite_actor(&self, actor_id: &str) -> bool {
        self.mutate("remove favorite actor", |record| {
            record.remove_actor(actor_id)
        })
        .await
    }

    /// Removes the first favorited title matching `title_id`, ignoring case.
    ///
    /// Returns `true` when nothing matched. Returns `false` only if persisting
    /// the removal fails.
    pub async fn remove_favorite_title(&self, title_id: &str) -> bool {
        self.mutate("remove favorite title", |record| {
            record.remove_title(title_id)
        })
        .await
    }

    /// Runs one read-modify-write cycle under the write lock.
    ///
    /// `apply` returns whether it changed the record; unchanged records are not
    /// written back.
    async fn mutate<F>(&self, operation: &'static str, apply: F) -> bool
    where
        F: FnOnce(&mut Record) -> bool,
    {
        let _guard = self.write_lock.lock().await;

        let mut record = match self.repository.load().await {
            Ok(record) => record.unwrap_or_default(),
            Err(e) if e.is_read_error() => {
                warn!("{}: record is unreadable, starting from empty: {}", operation, e);
                Record::default()
            }
            Err(e) => {
                error!("Cannot {}: {}", operation, e);
                return false;
            }
        };

        if !apply(&mut record) {
            debug!("{}: record unchanged", operation);
            return true;
        }

        let persisted = self.persist(&record).await;
        if persisted {
            info!("Record updated: {}", operation);
        }
        persisted
    }

    async fn persist(&self, record: &Record) -> bool {
        match self.repository.save(record).await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to write record: {}", e);
                false
            }
        }
    }
}
