use std::marker::PhantomData;

use async_graphql::{Context, FieldResult, Object, ID};
use critic_catalog::{games, Library};

use super::Review;

pub struct Game<L>(pub games::Game, PhantomData<L>);

impl<L> From<games::Game> for Game<L> {
    fn from(game: games::Game) -> Self {
        Self(game, PhantomData)
    }
}

#[Object]
impl<L> Game<L>
where
    L: 'static + Library,
{
    async fn id(&self) -> ID {
        self.0.id.0.clone().into()
    }
    async fn title(&self) -> &str {
        &self.0.title
    }
    async fn platform(&self) -> &Vec<String> {
        &self.0.platform
    }

    /// Every review written about this game.
    async fn reviews(&self, ctx: &Context<'_>) -> FieldResult<Option<Vec<Review<L>>>> {
        let library = ctx.data::<L>()?;
        Ok(Some(
            library
                .game_reviews(&self.0.id)
                .await
                .into_iter()
                .map(Review::from)
                .collect(),
        ))
    }
}
