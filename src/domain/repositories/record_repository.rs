//! Repository trait for the record document.

use crate::domain::entities::Record;
use crate::error::StoreResult;
use async_trait::async_trait;

/// Raw storage for the record document.
///
/// Implementations only move whole documents in and out of storage; they do
/// not lock and they report every failure through [`StoreResult`]. Write
/// serialization and fail-soft behavior live in
/// [`crate::application::services::FavoritesService`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonRecordRepository`] - JSON file on disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Loads the whole document.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if a non-empty document is stored
    /// - `Ok(None)` if nothing is stored yet (missing file, blank file, `{}` or `null`)
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError::Read`] if the storage exists but cannot be read,
    /// and [`crate::error::StoreError::Parse`] if it does not hold a valid document.
    async fn load(&self) -> StoreResult<Option<Record>>;

    /// Replaces the whole document.
    ///
    /// Implementations must make the replacement atomic with respect to
    /// concurrent [`RecordRepository::load`] calls.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError::Write`] or
    /// [`crate::error::StoreError::Encode`] if the document could not be stored.
    async fn save(&self, record: &Record) -> StoreResult<()>;
}
