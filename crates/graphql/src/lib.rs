use async_graphql::{extensions::Tracing, EmptySubscription, Schema};
use critic_catalog::Library;
pub use schemas::{Mutation, Query};

mod models;
mod schemas;

pub type CriticSchema<L> = Schema<Query<L>, Mutation<L>, EmptySubscription>;

pub fn create_schema<L: 'static + Library>(library: L) -> CriticSchema<L> {
    Schema::build(Query::new(), Mutation::new(), EmptySubscription)
        .data(library)
        .extension(Tracing)
        .finish()
}

#[cfg(test)]
mod test {
    use async_graphql::{Request, Variables};
    use critic_catalog::{authors::Author, games::Game, reviews::Review, Dataset, MemoryLibrary};
    use serde_json::{json, Value};

    use super::{create_schema, CriticSchema};

    fn schema() -> CriticSchema<MemoryLibrary> {
        create_schema(MemoryLibrary::new(Dataset {
            games: vec![Game {
                id: "1".into(),
                title: "Zelda".into(),
                platform: vec!["Switch".into()],
            }],
            reviews: vec![
                Review {
                    id: "r1".into(),
                    rating: 9,
                    content: "great".into(),
                    game_id: "1".into(),
                    author_id: "a1".into(),
                },
                Review {
                    id: "r2".into(),
                    rating: 3,
                    content: "who wrote this".into(),
                    game_id: "404".into(),
                    author_id: "ghost".into(),
                },
            ],
            authors: vec![Author {
                id: "a1".into(),
                name: "mario".into(),
                verified: true,
            }],
        }))
    }

    async fn run(schema: &CriticSchema<MemoryLibrary>, request: impl Into<Request>) -> Value {
        let response = schema.execute(request).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        response.data.into_json().unwrap()
    }

    #[tokio::test]
    async fn list_games() {
        let schema = schema();
        assert_eq!(
            run(&schema, "{ games { id title platform } }").await,
            json!({ "games": [{ "id": "1", "title": "Zelda", "platform": ["Switch"] }] })
        );
    }

    #[tokio::test]
    async fn add_game_then_list() {
        let schema = schema();
        let added = run(
            &schema,
            r#"mutation { addGame(input: { title: "Pong", platform: ["Arcade"] }) { id title platform } }"#,
        )
        .await;

        let id = added["addGame"]["id"].as_str().unwrap().to_string();
        assert_ne!(id, "1");
        assert_eq!(added["addGame"]["title"], "Pong");
        assert_eq!(added["addGame"]["platform"], json!(["Arcade"]));

        let games = run(&schema, "{ games { id title } }").await;
        assert_eq!(
            games,
            json!({ "games": [{ "id": "1", "title": "Zelda" }, { "id": id.clone(), "title": "Pong" }] })
        );

        let found = run(&schema, format!(r#"{{ game(id: "{}") {{ id title platform }} }}"#, id)).await;
        assert_eq!(found["game"], added["addGame"]);
    }

    #[tokio::test]
    async fn add_game_with_variables() {
        let schema = schema();
        let request = Request::new(
            "mutation Add($input: AddGameInput!) { addGame(input: $input) { title platform } }",
        )
        .variables(Variables::from_json(json!({ "input": { "title": "Doom" } })));

        assert_eq!(
            run(&schema, request).await,
            json!({ "addGame": { "title": "Doom", "platform": [] } })
        );
    }

    #[tokio::test]
    async fn add_game_requires_title() {
        let schema = schema();
        let response = schema
            .execute(r#"mutation { addGame(input: { platform: ["PC"] }) { id } }"#)
            .await;
        assert!(!response.errors.is_empty());
        assert_eq!(run(&schema, "{ games { id } }").await, json!({ "games": [{ "id": "1" }] }));
    }

    #[tokio::test]
    async fn game_reviews() {
        let schema = schema();
        assert_eq!(
            run(&schema, r#"{ game(id: "1") { reviews { id } } }"#).await,
            json!({ "game": { "reviews": [{ "id": "r1" }] } })
        );
    }

    #[tokio::test]
    async fn author_reviews() {
        let schema = schema();
        assert_eq!(
            run(&schema, r#"{ author(id: "a1") { name verified reviews { id rating content } } }"#).await,
            json!({ "author": {
                "name": "mario",
                "verified": true,
                "reviews": [{ "id": "r1", "rating": 9, "content": "great" }]
            } })
        );
    }

    #[tokio::test]
    async fn review_relationships() {
        let schema = schema();
        assert_eq!(
            run(
                &schema,
                "{ reviews { id game_id author_id game { title } author { name } } }"
            )
            .await,
            json!({ "reviews": [
                { "id": "r1", "game_id": "1", "author_id": "a1", "game": { "title": "Zelda" }, "author": { "name": "mario" } },
                { "id": "r2", "game_id": "404", "author_id": "ghost", "game": null, "author": null }
            ] })
        );
    }

    #[tokio::test]
    async fn missing_entities_are_null() {
        let schema = schema();
        assert_eq!(
            run(&schema, r#"{ game(id: "9") { id } review(id: "9") { id } author(id: "9") { id } }"#).await,
            json!({ "game": null, "review": null, "author": null })
        );
    }

    #[tokio::test]
    async fn delete_game() {
        let schema = schema();
        assert_eq!(
            run(&schema, r#"mutation { deleteGame(id: "404") { id } }"#).await,
            json!({ "deleteGame": [{ "id": "1" }] })
        );
        assert_eq!(
            run(&schema, r#"mutation { deleteGame(id: "1") { id } }"#).await,
            json!({ "deleteGame": [] })
        );
        assert_eq!(
            run(&schema, r#"{ game(id: "1") { id } review(id: "r1") { game { id } } }"#).await,
            json!({ "game": null, "review": { "game": null } })
        );
    }

    #[tokio::test]
    async fn update_game() {
        let schema = schema();
        assert_eq!(
            run(
                &schema,
                r#"mutation { updateGame(id: "1", edits: { platform: ["Switch", "Wii U"] }) { id title platform } }"#
            )
            .await,
            json!({ "updateGame": { "id": "1", "title": "Zelda", "platform": ["Switch", "Wii U"] } })
        );
        assert_eq!(
            run(&schema, r#"mutation { updateGame(id: "2", edits: { title: "Metroid" }) { id } }"#).await,
            json!({ "updateGame": null })
        );
        assert_eq!(
            run(&schema, "{ games { id title platform } }").await,
            json!({ "games": [{ "id": "1", "title": "Zelda", "platform": ["Switch", "Wii U"] }] })
        );
    }

    #[test]
    fn sdl_declarations() {
        let sdl = schema().sdl();
        let lines: Vec<&str> = sdl.lines().map(str::trim).collect();
        for field in [
            // Query
            "games: [Game]",
            "game(id: ID!): Game",
            "reviews: [Review]",
            "review(id: ID!): Review",
            "authors: [Author]",
            "author(id: ID!): Author",
            // Mutation
            "addGame(input: AddGameInput!): Game",
            "deleteGame(id: ID!): [Game]",
            "updateGame(id: ID!, edits: EditGameInput!): Game",
            // Game, Author
            "id: ID!",
            "title: String!",
            "platform: [String!]!",
            "reviews: [Review!]",
            "name: String!",
            "verified: Boolean!",
            // Review
            "rating: Int!",
            "content: String!",
            "game: Game",
            "author: Author",
            "game_id: ID",
            "author_id: ID",
            // inputs
            "platform: [String!]",
            "title: String",
        ] {
            assert!(lines.contains(&field), "{} missing from\n{}", field, sdl);
        }
        for drift in ["games: [Game!]!", "deleteGame(id: ID!): [Game!]!", "reviews: [Review!]!"] {
            assert!(!lines.contains(&drift), "{} found in\n{}", drift, sdl);
        }
        assert!(!sdl.contains("gameId"));
    }
}
