use std::net::SocketAddr;

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::Extension,
    response::{self, IntoResponse},
    routing::{get, post},
    AddExtensionLayer, Router, Server,
};
use critic_catalog::Library;
use critic_graphql::{create_schema, CriticSchema};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("could not bind {0}: {1}")]
    Bind(SocketAddr, String),
    #[error("graphql server failed: {0}")]
    Serve(String),
}

async fn graphql_handler<L: 'static + Library>(
    schema: Extension<CriticSchema<L>>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphql_playground() -> impl IntoResponse {
    response::Html(playground_source(GraphQLPlaygroundConfig::new("/")))
}

/// Build the router serving the schema at `/`. A GET on the same path
/// serves the playground when it is enabled.
pub fn router<L: 'static + Library>(library: L, playground: bool) -> Router {
    let schema = create_schema(library);

    let route = if playground {
        get(graphql_playground).post(graphql_handler::<L>)
    } else {
        post(graphql_handler::<L>)
    };

    Router::new()
        .route("/", route)
        .layer(AddExtensionLayer::new(schema))
}

pub async fn api<L: 'static + Library>(
    listen_addr: &SocketAddr,
    library: L,
    playground: bool,
) -> Result<(), ApiError> {
    let app = router(library, playground);

    let server =
        Server::try_bind(listen_addr).map_err(|e| ApiError::Bind(*listen_addr, e.to_string()))?;

    info!("serving graphql on http://{}/", listen_addr);
    server
        .serve(app.into_make_service())
        .await
        .map_err(|e| ApiError::Serve(e.to_string()))?;

    Ok(())
}
