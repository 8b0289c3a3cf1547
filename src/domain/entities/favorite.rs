//! Favorited actors and titles.

use serde::{Deserialize, Serialize};

/// Compares two ids the way the record document does: case-insensitively.
pub fn same_id(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// An actor the user has favorited.
///
/// Stored in the record's `stars` collection. The `id` is kept lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteActor {
    pub name: String,
    pub id: String,
}

impl FavoriteActor {
    /// Creates an entry, normalizing the id to lower case.
    pub fn new(name: impl Into<String>, id: &str) -> Self {
        Self {
            name: name.into(),
            id: id.to_lowercase(),
        }
    }

    /// Returns whether this entry has the given id, ignoring case.
    pub fn matches(&self, id: &str) -> bool {
        same_id(&self.id, id)
    }
}

/// A title the user has favorited, with the ids of the actors appearing in it.
///
/// Stored in the record's `avs` collection. The `id` is kept lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteTitle {
    pub id: String,
    #[serde(default)]
    pub stars: Vec<String>,
}

impl FavoriteTitle {
    /// Creates an entry, normalizing the id to lower case.
    pub fn new(id: &str, stars: Vec<String>) -> Self {
        Self {
            id: id.to_lowercase(),
            stars,
        }
    }

    /// Returns whether this entry has the given id, ignoring case.
    pub fn matches(&self, id: &str) -> bool {
        same_id(&self.id, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_id_is_lowercased() {
        let actor = FavoriteActor::new("Name", "AbC123");

        assert_eq!(actor.id, "abc123");
        assert_eq!(actor.name, "Name");
    }

    #[test]
    fn test_actor_matches_any_casing() {
        let actor = FavoriteActor::new("Name", "abc123");

        assert!(actor.matches("ABC123"));
        assert!(actor.matches("abc123"));
        assert!(!actor.matches("abc124"));
    }

    #[test]
    fn test_title_keeps_actor_ids_verbatim() {
        let title = FavoriteTitle::new("ABC-001", vec!["Star1".to_string()]);

        assert_eq!(title.id, "abc-001");
        assert_eq!(title.stars, vec!["Star1".to_string()]);
        assert!(title.matches("abc-001"));
    }

    #[test]
    fn test_title_without_stars_deserializes() {
        let title: FavoriteTitle = serde_json::from_str(r#"{"id": "abc-001"}"#).unwrap();

        assert!(title.stars.is_empty());
    }
}
