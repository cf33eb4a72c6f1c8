//! dataset
//!
//! The collections a library is seeded with at startup, either the
//! built-in catalog or one read from a yaml file.

use std::{collections::HashSet, hash::Hash, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    authors::Author,
    games::{Game, GameId},
    reviews::Review,
};

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub authors: Vec<Author>,
}

/// Errors that may occur when loading a dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("could not read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed dataset: {0}")]
    Format(#[from] serde_yaml::Error),
    #[error("duplicate {collection} id {id}")]
    DuplicateId { collection: &'static str, id: String },
}

impl Dataset {
    /// The catalog the server ships with.
    pub fn seed() -> Self {
        let game = |id: &str, title: &str, platform: &[&str]| Game {
            id: id.into(),
            title: title.to_string(),
            platform: platform.iter().map(|p| p.to_string()).collect(),
        };
        let author = |id: &str, name: &str, verified| Author {
            id: id.into(),
            name: name.to_string(),
            verified,
        };
        let review = |id: &str, rating, content: &str, game_id: &str, author_id: &str| Review {
            id: id.into(),
            rating,
            content: content.to_string(),
            game_id: game_id.into(),
            author_id: author_id.into(),
        };

        Self {
            games: vec![
                game("1", "Zelda, Tears of the Kingdom", &["Switch"]),
                game("2", "Final Fantasy 7 Remake", &["PS5", "Xbox"]),
                game("3", "Elden Ring", &["PS5", "Xbox", "PC"]),
                game("4", "Mario Kart", &["Switch"]),
                game("5", "Pokemon Scarlet", &["PS5", "Xbox", "PC"]),
            ],
            reviews: vec![
                review("1", 9, "a gorgeous remake of a classic", "2", "1"),
                review("2", 10, "the sky islands alone are worth it", "1", "2"),
                review("3", 7, "brutal, but fair", "3", "3"),
                review("4", 5, "blue shells ruined friendships", "4", "2"),
                review("5", 8, "fun, despite the frame rate", "5", "2"),
                review("6", 7, "the combat grew on me", "2", "1"),
                review("7", 10, "best open world ever made", "1", "3"),
            ],
            authors: vec![
                author("1", "mario", true),
                author("2", "yoshi", false),
                author("3", "peach", true),
            ],
        }
    }

    /// Read a dataset from a yaml file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path)?;
        let dataset: Self = serde_yaml::from_reader(file)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Parse a dataset from a yaml string.
    pub fn from_yaml(yaml: &str) -> Result<Self, DatasetError> {
        let dataset: Self = serde_yaml::from_str(yaml)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Ids must be unique within each collection. Foreign keys are not
    /// checked.
    pub fn validate(&self) -> Result<(), DatasetError> {
        unique("game", self.games.iter().map(|g| &g.id))?;
        unique("review", self.reviews.iter().map(|r| &r.id))?;
        unique("author", self.authors.iter().map(|a| &a.id))?;
        Ok(())
    }

    /// The first free numeric game id, one past the largest numeric id
    /// in the dataset. `None` if the largest id is `u64::MAX`.
    pub(crate) fn first_free_game_id(&self) -> Option<u64> {
        self.games
            .iter()
            .filter_map(|g| g.id.0.parse::<u64>().ok())
            .max()
            .map_or(Some(1), |max| max.checked_add(1))
    }

    pub(crate) fn has_game(&self, id: &GameId) -> bool {
        self.games.iter().any(|g| &g.id == id)
    }
}

fn unique<'a, T, I>(collection: &'static str, ids: I) -> Result<(), DatasetError>
where
    T: 'a + Eq + Hash + ToString,
    I: Iterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DatasetError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
