use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument, trace};

use crate::{
    authors::Author,
    dataset::Dataset,
    games::{Game, GameEdit, GameId, NewGame},
    library::Library,
    reviews::Review,
};

#[derive(Debug)]
struct State {
    dataset: Dataset,
    /// The next numeric game id to try, `None` once the numeric range
    /// is used up.
    next_id: Option<u64>,
    /// Ids handed out after the numeric range ran out.
    spilled: u64,
}

impl State {
    fn allocate_id(&mut self) -> GameId {
        loop {
            let id = match self.next_id {
                Some(next) => {
                    self.next_id = next.checked_add(1);
                    GameId(next.to_string())
                }
                None => {
                    self.spilled = self.spilled.wrapping_add(1);
                    GameId(format!("n{}", self.spilled))
                }
            };
            if !self.dataset.has_game(&id) {
                return id;
            }
        }
    }
}

/// A library held entirely in memory.
///
/// Clones share the same catalog. Every operation takes the lock once,
/// so edits from concurrent requests never interleave.
#[derive(Debug, Clone)]
pub struct MemoryLibrary {
    state: Arc<RwLock<State>>,
}

impl MemoryLibrary {
    pub fn new(dataset: Dataset) -> Self {
        debug!(
            games = dataset.games.len(),
            reviews = dataset.reviews.len(),
            authors = dataset.authors.len(),
            "Starting library service"
        );
        let next_id = dataset.first_free_game_id();
        Self {
            state: Arc::new(RwLock::new(State {
                dataset,
                next_id,
                spilled: 0,
            })),
        }
    }
}

impl Default for MemoryLibrary {
    fn default() -> Self {
        Self::new(Dataset::seed())
    }
}

#[async_trait]
impl Library for MemoryLibrary {
    async fn games(&self) -> Vec<Game> {
        self.state.read().await.dataset.games.clone()
    }

    async fn reviews(&self) -> Vec<Review> {
        self.state.read().await.dataset.reviews.clone()
    }

    async fn authors(&self) -> Vec<Author> {
        self.state.read().await.dataset.authors.clone()
    }

    #[instrument(skip(self, games))]
    async fn replace_games(&self, games: Vec<Game>) {
        trace!("replacing {} games", games.len());
        self.state.write().await.dataset.games = games;
    }

    #[instrument(skip(self))]
    async fn append_game(&self, game: Game) {
        self.state.write().await.dataset.games.push(game);
    }

    #[instrument(skip(self))]
    async fn update_game_at(&self, id: &GameId, edits: GameEdit) -> Option<Game> {
        let mut state = self.state.write().await;
        let game = state.dataset.games.iter_mut().find(|g| &g.id == id)?;
        edits.apply(game);
        Some(game.clone())
    }

    async fn next_game_id(&self) -> GameId {
        self.state.write().await.allocate_id()
    }

    #[instrument(skip(self))]
    async fn add_game(&self, new: NewGame) -> Game {
        let mut state = self.state.write().await;
        let game = Game {
            id: state.allocate_id(),
            title: new.title,
            platform: new.platform,
        };
        debug!("adding game {}", game.id);
        state.dataset.games.push(game.clone());
        game
    }

    #[instrument(skip(self))]
    async fn delete_game(&self, id: &GameId) -> Vec<Game> {
        let mut state = self.state.write().await;
        state.dataset.games.retain(|g| &g.id != id);
        state.dataset.games.clone()
    }
}
