use std::path::PathBuf;

use structopt::StructOpt;

/// A GraphQL api for browsing games and their reviews.
/// Run with no arguments to start the server.
#[derive(StructOpt, Debug)]
pub struct Opt {
    #[structopt(default_value = "config.yaml", parse(from_os_str))]
    pub config: PathBuf,

    #[structopt(subcommand)]
    pub command: Option<OptCommand>,
}

#[derive(StructOpt, Debug, Clone, Copy)]
pub enum OptCommand {
    /// Generate a new config file.
    Init,
    /// Print the schema definition language and exit.
    Schema,
}
