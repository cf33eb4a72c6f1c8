use std::marker::PhantomData;

use async_graphql::{Context, FieldResult, InputObject, Object, ID};
use critic_catalog::{
    games::{GameEdit, GameId, NewGame},
    Library,
};
use tracing::debug;

use crate::models::Game;

pub struct Mutation<L> {
    library: PhantomData<L>,
}

#[derive(InputObject, Debug)]
pub struct AddGameInput {
    title: String,
    platform: Option<Vec<String>>,
}

impl From<AddGameInput> for NewGame {
    fn from(input: AddGameInput) -> Self {
        Self {
            title: input.title,
            platform: input.platform.unwrap_or_default(),
        }
    }
}

/// Fields to overwrite on a game. Omitted fields are left as they are.
#[derive(InputObject, Debug)]
pub struct EditGameInput {
    title: Option<String>,
    platform: Option<Vec<String>>,
}

impl From<EditGameInput> for GameEdit {
    fn from(input: EditGameInput) -> Self {
        Self {
            title: input.title,
            platform: input.platform,
        }
    }
}

impl<L> Mutation<L> {
    pub fn new() -> Self {
        Self {
            library: PhantomData,
        }
    }
}

#[Object]
impl<L> Mutation<L>
where
    L: 'static + Library,
{
    /// Adds a game to the catalog.
    async fn add_game(
        &self,
        ctx: &Context<'_>,
        input: AddGameInput,
    ) -> FieldResult<Option<Game<L>>> {
        let library = ctx.data::<L>()?;
        let game = library.add_game(input.into()).await;
        debug!("added game {}", game.id);
        Ok(Some(game.into()))
    }

    /// Removes a game, returning the games that remain. Its reviews are kept.
    async fn delete_game(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> FieldResult<Option<Vec<Option<Game<L>>>>> {
        let library = ctx.data::<L>()?;
        Ok(Some(
            library
                .delete_game(&GameId(id.0))
                .await
                .into_iter()
                .map(|g| Some(g.into()))
                .collect(),
        ))
    }

    /// Overwrites the given fields of a game. Returns null if there is no such game.
    async fn update_game(
        &self,
        ctx: &Context<'_>,
        id: ID,
        edits: EditGameInput,
    ) -> FieldResult<Option<Game<L>>> {
        let library = ctx.data::<L>()?;
        Ok(library
            .update_game(&GameId(id.0), edits.into())
            .await
            .map(Game::from))
    }
}
