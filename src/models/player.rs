//! Player data structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = Uuid;

/// A registered player. Belongs to exactly one tournament; the score is derived from matches.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub nickname: String,
}

impl Player {
    /// Create a new player with a fresh id.
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            nickname: nickname.into(),
        }
    }
}
