use async_trait::async_trait;

use crate::{
    authors::{Author, AuthorId},
    games::{Game, GameEdit, GameId, NewGame},
    reviews::{Review, ReviewId},
};

/// A library holds the catalog and handles all the lookups and edits
/// the api performs on it.
///
/// Implementors provide the raw collection access. The lookups are
/// linear scans built on top of it and may be overridden where the
/// store can do better, for example to make a read-modify-write
/// atomic.
#[async_trait]
pub trait Library: Send + Sync {
    /// All games, in insertion order.
    async fn games(&self) -> Vec<Game>;
    /// All reviews, in insertion order.
    async fn reviews(&self) -> Vec<Review>;
    /// All authors, in insertion order.
    async fn authors(&self) -> Vec<Author>;

    /// Swap the whole games collection for a new one.
    async fn replace_games(&self, games: Vec<Game>);
    async fn append_game(&self, game: Game);
    /// Merge the set fields of `edits` into the game with the given id,
    /// returning the result. Returns `None` and changes nothing if there
    /// is no such game.
    async fn update_game_at(&self, id: &GameId, edits: GameEdit) -> Option<Game>;

    /// Allocate an id that no game currently uses and that has not been
    /// handed out before.
    async fn next_game_id(&self) -> GameId;

    async fn game(&self, id: &GameId) -> Option<Game> {
        self.games().await.into_iter().find(|g| &g.id == id)
    }

    async fn review(&self, id: &ReviewId) -> Option<Review> {
        self.reviews().await.into_iter().find(|r| &r.id == id)
    }

    async fn author(&self, id: &AuthorId) -> Option<Author> {
        self.authors().await.into_iter().find(|a| &a.id == id)
    }

    /// The reviews written about a game.
    async fn game_reviews(&self, id: &GameId) -> Vec<Review> {
        self.reviews()
            .await
            .into_iter()
            .filter(|r| &r.game_id == id)
            .collect()
    }

    /// The reviews written by an author.
    async fn author_reviews(&self, id: &AuthorId) -> Vec<Review> {
        self.reviews()
            .await
            .into_iter()
            .filter(|r| &r.author_id == id)
            .collect()
    }

    async fn add_game(&self, new: NewGame) -> Game {
        let game = Game {
            id: self.next_game_id().await,
            title: new.title,
            platform: new.platform,
        };
        self.append_game(game.clone()).await;
        game
    }

    /// Remove the game with the given id, returning the games that
    /// remain. Reviews of the game are left in place.
    async fn delete_game(&self, id: &GameId) -> Vec<Game> {
        let games: Vec<_> = self
            .games()
            .await
            .into_iter()
            .filter(|g| &g.id != id)
            .collect();
        self.replace_games(games.clone()).await;
        games
    }

    async fn update_game(&self, id: &GameId, edits: GameEdit) -> Option<Game> {
        self.update_game_at(id, edits).await
    }
}
