use std::marker::PhantomData;

use async_graphql::{Context, FieldResult, Object, ID};
use critic_catalog::{authors, Library};

use super::Review;

pub struct Author<L>(pub authors::Author, PhantomData<L>);

impl<L> From<authors::Author> for Author<L> {
    fn from(author: authors::Author) -> Self {
        Self(author, PhantomData)
    }
}

#[Object]
impl<L> Author<L>
where
    L: 'static + Library,
{
    async fn id(&self) -> ID {
        self.0.id.0.clone().into()
    }
    async fn name(&self) -> &str {
        &self.0.name
    }
    async fn verified(&self) -> bool {
        self.0.verified
    }
    async fn reviews(&self, ctx: &Context<'_>) -> FieldResult<Option<Vec<Review<L>>>> {
        let library = ctx.data::<L>()?;
        Ok(Some(
            library
                .author_reviews(&self.0.id)
                .await
                .into_iter()
                .map(Review::from)
                .collect(),
        ))
    }
}
