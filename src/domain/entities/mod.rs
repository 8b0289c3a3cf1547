//! Core domain entities representing the favorites data model.
//!
//! Entities are plain serde data structures mirroring the on-disk record
//! document. [`Record`] also carries the mutation rules (id normalization and
//! uniqueness) shared by every caller.
//!
//! # Entity Types
//!
//! - [`Record`] - The whole persisted document
//! - [`FavoriteActor`] - A favorited actor (`stars` collection)
//! - [`FavoriteTitle`] - A favorited title (`avs` collection)
//! - [`Group`] - A chat group the bot is active in (`groups` collection)

pub mod favorite;
pub mod group;
pub mod record;

pub use favorite::{FavoriteActor, FavoriteTitle};
pub use group::Group;
pub use record::Record;
