use std::marker::PhantomData;

use async_graphql::{Context, FieldResult, Object, ID};
use critic_catalog::{authors::AuthorId, games::GameId, reviews::ReviewId, Library};

use crate::models::{Author, Game, Review};

pub struct Query<L> {
    library: PhantomData<L>,
}

impl<L> Query<L> {
    pub fn new() -> Self {
        Self {
            library: PhantomData,
        }
    }
}

#[Object]
impl<L> Query<L>
where
    L: 'static + Library,
{
    async fn games(&self, ctx: &Context<'_>) -> FieldResult<Option<Vec<Option<Game<L>>>>> {
        let library = ctx.data::<L>()?;
        Ok(Some(
            library
                .games()
                .await
                .into_iter()
                .map(|g| Some(g.into()))
                .collect(),
        ))
    }

    async fn game(&self, ctx: &Context<'_>, id: ID) -> FieldResult<Option<Game<L>>> {
        let library = ctx.data::<L>()?;
        Ok(library.game(&GameId(id.0)).await.map(Game::from))
    }

    async fn reviews(&self, ctx: &Context<'_>) -> FieldResult<Option<Vec<Option<Review<L>>>>> {
        let library = ctx.data::<L>()?;
        Ok(Some(
            library
                .reviews()
                .await
                .into_iter()
                .map(|r| Some(r.into()))
                .collect(),
        ))
    }

    async fn review(&self, ctx: &Context<'_>, id: ID) -> FieldResult<Option<Review<L>>> {
        let library = ctx.data::<L>()?;
        Ok(library.review(&ReviewId(id.0)).await.map(Review::from))
    }

    async fn authors(&self, ctx: &Context<'_>) -> FieldResult<Option<Vec<Option<Author<L>>>>> {
        let library = ctx.data::<L>()?;
        Ok(Some(
            library
                .authors()
                .await
                .into_iter()
                .map(|a| Some(a.into()))
                .collect(),
        ))
    }

    async fn author(&self, ctx: &Context<'_>, id: ID) -> FieldResult<Option<Author<L>>> {
        let library = ctx.data::<L>()?;
        Ok(library.author(&AuthorId(id.0)).await.map(Author::from))
    }
}
