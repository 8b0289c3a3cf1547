//! Repository trait definitions for the domain layer.
//!
//! Traits abstract data access so the favorites service can be tested against
//! mocks. Implementations live in `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`RecordRepository`] - Whole-document load and save for the record file
//!
//! # Testing
//!
//! See integration tests in `tests/favorites_store.rs` for usage examples.

pub mod record_repository;

pub use record_repository::RecordRepository;

#[cfg(test)]
pub use record_repository::MockRecordRepository;
