//! Chat groups the bot is active in.

use serde::{Deserialize, Serialize};

/// A Telegram group registered with the bot.
///
/// Group ids are compared exactly; Telegram group ids are negative integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub title: String,
}

impl Group {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
