//! Domain layer containing the favorites data model.
//!
//! Independent of infrastructure: entities describe the record document and
//! its mutation rules, repository traits describe how it is stored.
//!
//! # Architecture
//!
//! - [`entities`] - Record, favorite and group data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Locking and failure policy live in [`crate::application::services`]

pub mod entities;
pub mod repositories;
