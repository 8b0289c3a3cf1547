//! Business logic services for the application layer.

pub mod favorites_service;

pub use favorites_service::{FavoritesService, RecordSnapshot};
