use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

use crate::{authors::AuthorId, games::GameId};

#[derive(Debug, Display, PartialEq, Eq, Hash, Clone, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(pub String);

impl From<&str> for ReviewId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A review of a game by an author.
///
/// Neither key is checked against the catalog. A review may point at a
/// game that was deleted, or at an author that never existed.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub rating: i32,
    pub content: String,
    pub game_id: GameId,
    pub author_id: AuthorId,
}
