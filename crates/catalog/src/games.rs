use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, PartialEq, Eq, Hash, Clone, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub String);

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub title: String,
    /// The platforms the game was released on, in listing order.
    #[serde(default)]
    pub platform: Vec<String>,
}

/// The fields supplied when adding a game. The id is allocated by
/// the library.
#[derive(Debug, Clone, Default)]
pub struct NewGame {
    pub title: String,
    pub platform: Vec<String>,
}

/// A partial update to a game. Only the fields that are set are
/// written, the rest keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameEdit {
    pub title: Option<String>,
    pub platform: Option<Vec<String>>,
}

impl GameEdit {
    pub fn apply(self, game: &mut Game) {
        if let Some(title) = self.title {
            game.title = title;
        }
        if let Some(platform) = self.platform {
            game.platform = platform;
        }
    }
}
