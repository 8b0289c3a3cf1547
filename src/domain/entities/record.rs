//! The record document: every favorite and group the bot knows about.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::favorite::{FavoriteActor, FavoriteTitle};
use super::group::Group;

/// The single JSON document persisted by the record store.
///
/// Missing keys deserialize as empty collections, and empty collections are
/// omitted when serializing. Top-level keys this type does not know about are
/// carried through in `extra` so a rewrite never drops them.
///
/// Id uniqueness is maintained by the mutating methods below, not by the
/// collection types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stars: Vec<FavoriteActor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub avs: Vec<FavoriteTitle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Group>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    /// Returns true when the document holds no data at all.
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
            && self.avs.is_empty()
            && self.groups.is_empty()
            && self.extra.is_empty()
    }

    pub fn has_stars(&self) -> bool {
        !self.stars.is_empty()
    }

    pub fn has_titles(&self) -> bool {
        !self.avs.is_empty()
    }

    pub fn contains_actor(&self, id: &str) -> bool {
        self.stars.iter().any(|star| star.matches(id))
    }

    pub fn contains_title(&self, id: &str) -> bool {
        self.avs.iter().any(|av| av.matches(id))
    }

    /// Appends an actor unless one with the same id is already present.
    ///
    /// Returns whether the record changed.
    pub fn insert_actor(&mut self, name: &str, id: &str) -> bool {
        if self.contains_actor(id) {
            return false;
        }
        self.stars.push(FavoriteActor::new(name, id));
        true
    }

    /// Appends a title unless one with the same id is already present.
    ///
    /// Returns whether the record changed.
    pub fn insert_title(&mut self, id: &str, stars: Vec<String>) -> bool {
        if self.contains_title(id) {
            return false;
        }
        self.avs.push(FavoriteTitle::new(id, stars));
        true
    }

    /// Removes the first actor matching `id`. Returns whether one was removed.
    pub fn remove_actor(&mut self, id: &str) -> bool {
        match self.stars.iter().position(|star| star.matches(id)) {
            Some(index) => {
                self.stars.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes the first title matching `id`. Returns whether one was removed.
    pub fn remove_title(&mut self, id: &str) -> bool {
        match self.avs.iter().position(|av| av.matches(id)) {
            Some(index) => {
                self.avs.remove(index);
                true
            }
            None => false,
        }
    }

    /// Inserts a group or updates the title of the group with the same id.
    pub fn upsert_group(&mut self, id: i64, title: &str) {
        match self.groups.iter_mut().find(|group| group.id == id) {
            Some(group) => group.title = title.to_string(),
            None => self.groups.push(Group::new(id, title)),
        }
    }

    /// Removes the group with the given id. Returns whether one was removed.
    pub fn remove_group(&mut self, id: i64) -> bool {
        let before = self.groups.len();
        self.groups.retain(|group| group.id != id);
        self.groups.len() < before
    }
}
