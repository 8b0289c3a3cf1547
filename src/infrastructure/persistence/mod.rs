//! File-based repository implementations.
//!
//! # Repositories
//!
//! - [`JsonRecordRepository`] - Record document stored as one JSON file

pub mod json_record_repository;

pub use json_record_repository::JsonRecordRepository;
