use std::marker::PhantomData;

use async_graphql::{Context, FieldResult, Object, ID};
use critic_catalog::{reviews, Library};

use super::{Author, Game};

pub struct Review<L>(pub reviews::Review, PhantomData<L>);

impl<L> From<reviews::Review> for Review<L> {
    fn from(review: reviews::Review) -> Self {
        Self(review, PhantomData)
    }
}

#[Object]
impl<L> Review<L>
where
    L: 'static + Library,
{
    async fn id(&self) -> ID {
        self.0.id.0.clone().into()
    }
    async fn rating(&self) -> i32 {
        self.0.rating
    }
    async fn content(&self) -> &str {
        &self.0.content
    }

    /// The reviewed game, or null if it has been deleted.
    async fn game(&self, ctx: &Context<'_>) -> FieldResult<Option<Game<L>>> {
        let library = ctx.data::<L>()?;
        Ok(library.game(&self.0.game_id).await.map(Game::from))
    }

    /// The author of the review, or null if they are unknown.
    async fn author(&self, ctx: &Context<'_>) -> FieldResult<Option<Author<L>>> {
        let library = ctx.data::<L>()?;
        Ok(library.author(&self.0.author_id).await.map(Author::from))
    }

    #[graphql(name = "game_id")]
    async fn game_id(&self) -> Option<ID> {
        Some(self.0.game_id.0.clone().into())
    }
    #[graphql(name = "author_id")]
    async fn author_id(&self) -> Option<ID> {
        Some(self.0.author_id.0.clone().into())
    }
}
