mod author;
mod game;
mod review;

pub use author::Author;
pub use game::Game;
pub use review::Review;
