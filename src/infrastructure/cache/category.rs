//! Cache categories: one per kind of upstream data.

use std::fmt;
use std::str::FromStr;

const HOUR: u64 = 3600;
const DAY: u64 = 24 * HOUR;

/// Kind of cached upstream data.
///
/// Each category owns a key prefix and a default expiration. Prefixes are
/// kept stable so entries written by earlier deployments stay readable.
///
/// `Actor` (`star-`) is a string prefix of `ActorNativeName` (`star-ja-name-`):
/// the `Actor` key `ja-name-x` and the `ActorNativeName` key `x` share one
/// backend key. Actor ids never start with `ja-name-`. No other pair of
/// prefixes overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheCategory {
    /// Title metadata.
    Title,
    /// Actor metadata.
    Actor,
    /// Ranking lists.
    Rank,
    /// Preview samples.
    Sample,
    /// Magnet links.
    Magnet,
    /// PV counter.
    Pv,
    /// FV counter.
    Fv,
    /// Rendered announcement message for a set of actors.
    StarsMessage,
    /// Title comments.
    Comment,
    /// Highly rated titles of an actor.
    NiceTitlesOfActor,
    /// One page of the highly rated titles listing.
    NiceTitlesPage,
    /// One page of the new titles listing.
    NewTitlesPage,
    /// Actor name in their native language.
    ActorNativeName,
    /// Recent titles of an actor.
    NewTitlesOfActor,
}

impl CacheCategory {
    pub const ALL: [CacheCategory; 14] = [
        Self::Title,
        Self::Actor,
        Self::Rank,
        Self::Sample,
        Self::Magnet,
        Self::Pv,
        Self::Fv,
        Self::StarsMessage,
        Self::Comment,
        Self::NiceTitlesOfActor,
        Self::NiceTitlesPage,
        Self::NewTitlesPage,
        Self::ActorNativeName,
        Self::NewTitlesOfActor,
    ];

    /// Key namespace prefix.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Title => "av-",
            Self::Actor => "star-",
            Self::Rank => "rank-",
            Self::Sample => "sample-",
            Self::Magnet => "magnet-",
            Self::Pv => "pv-",
            Self::Fv => "fv-",
            Self::StarsMessage => "stars-msg-",
            Self::Comment => "comment-",
            Self::NiceTitlesOfActor => "nice-avs-of-star-",
            Self::NiceTitlesPage => "jlib-page-nice-avs-",
            Self::NewTitlesPage => "jlib-page-new-avs-",
            Self::ActorNativeName => "star-ja-name-",
            Self::NewTitlesOfActor => "new-avs-of-star-",
        }
    }

    /// Default expiration in seconds. `0` means the key never expires.
    pub const fn default_ttl(self) -> u64 {
        match self {
            Self::Title => 30 * DAY,
            Self::Actor => 0,
            Self::Rank => 7 * DAY,
            Self::Sample => 30 * DAY,
            Self::Magnet => 5 * DAY,
            Self::Pv => 15 * DAY,
            Self::Fv => 15 * DAY,
            Self::StarsMessage => 5 * DAY,
            Self::Comment => 30 * DAY,
            Self::NiceTitlesOfActor => 15 * DAY,
            Self::NiceTitlesPage => 7 * DAY,
            Self::NewTitlesPage => 2 * DAY,
            Self::ActorNativeName => 180 * DAY,
            Self::NewTitlesOfActor => 12 * DAY,
        }
    }

    /// Name used on the command line and in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Actor => "actor",
            Self::Rank => "rank",
            Self::Sample => "sample",
            Self::Magnet => "magnet",
            Self::Pv => "pv",
            Self::Fv => "fv",
            Self::StarsMessage => "stars-msg",
            Self::Comment => "comment",
            Self::NiceTitlesOfActor => "nice-titles-of-actor",
            Self::NiceTitlesPage => "nice-titles-page",
            Self::NewTitlesPage => "new-titles-page",
            Self::ActorNativeName => "actor-native-name",
            Self::NewTitlesOfActor => "new-titles-of-actor",
        }
    }

    /// Builds the backend key for a logical key in this category.
    pub fn key(self, key: &str) -> String {
        format!("{}{}", self.prefix(), key)
    }
}

impl fmt::Display for CacheCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown category name.
#[derive(Debug, thiserror::Error)]
#[error("unknown cache category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for CacheCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_prefixes_and_names_are_unique() {
        let prefixes: HashSet<_> = CacheCategory::ALL.iter().map(|c| c.prefix()).collect();
        let names: HashSet<_> = CacheCategory::ALL.iter().map(|c| c.name()).collect();

        assert_eq!(prefixes.len(), CacheCategory::ALL.len());
        assert_eq!(names.len(), CacheCategory::ALL.len());
    }

    #[test]
    fn test_only_actor_prefix_overlaps_another_prefix() {
        let overlapping: Vec<_> = CacheCategory::ALL
            .iter()
            .flat_map(|a| CacheCategory::ALL.iter().map(move |b| (*a, *b)))
            .filter(|(a, b)| a != b && b.prefix().starts_with(a.prefix()))
            .collect();

        assert_eq!(
            overlapping,
            vec![(CacheCategory::Actor, CacheCategory::ActorNativeName)]
        );
        assert_eq!(
            CacheCategory::Actor.key("ja-name-x"),
            CacheCategory::ActorNativeName.key("x")
        );
    }

    #[test]
    fn test_default_ttls() {
        assert_eq!(CacheCategory::Title.default_ttl(), 2_592_000);
        assert_eq!(CacheCategory::Actor.default_ttl(), 0);
        assert_eq!(CacheCategory::NewTitlesPage.default_ttl(), 172_800);
        assert_eq!(CacheCategory::ActorNativeName.default_ttl(), 15_552_000);
    }

    #[test]
    fn test_key_applies_prefix() {
        assert_eq!(CacheCategory::Magnet.key("abc-001"), "magnet-abc-001");
        assert_eq!(CacheCategory::StarsMessage.key("1,2"), "stars-msg-1,2");
    }

    #[test]
    fn test_parse_round_trips_every_name() {
        for category in CacheCategory::ALL {
            assert_eq!(category.name().parse::<CacheCategory>().unwrap(), category);
        }
        assert_eq!("TITLE".parse::<CacheCategory>().unwrap(), CacheCategory::Title);
        assert!("nope".parse::<CacheCategory>().is_err());
    }
}
