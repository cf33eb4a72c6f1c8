#![forbid(unsafe_code)]
#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    clippy::useless_conversion,
    clippy::unwrap_used,
    clippy::todo,
    clippy::unimplemented
)]

use std::net::SocketAddr;

use anyhow::Result;
use conf::ServerConfig;
use critic_axum::api;
use critic_graphql::create_schema;
use human_panic::setup_panic;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use crate::opt::{Opt, OptCommand};

mod conf;
mod opt;

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic!();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let opts = Opt::from_args();

    match opts.command {
        Some(OptCommand::Init) => {
            ServerConfig::default().write(&opts.config)?;
            println!("wrote config to {}", opts.config.display());
        }
        Some(OptCommand::Schema) => {
            let config = ServerConfig::load(&opts.config)?;
            println!("{}", create_schema(config.library()?).sdl());
        }
        None => start_server(ServerConfig::load(&opts.config)?).await?,
    };

    Ok(())
}

async fn start_server(config: ServerConfig) -> Result<()> {
    let library = config.library()?;
    let addr = SocketAddr::new(config.bind_address.into(), config.port);

    api(&addr, library, config.playground).await?;

    Ok(())
}
