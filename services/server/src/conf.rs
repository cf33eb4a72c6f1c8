use std::{
    net::Ipv4Addr,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use critic_catalog::{Dataset, MemoryLibrary};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: Ipv4Addr,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Serve the graphql playground on GET requests.
    #[serde(default = "default_playground")]
    pub playground: bool,
    /// A yaml file to seed the catalog from instead of the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,
}

fn default_bind_address() -> Ipv4Addr {
    Ipv4Addr::UNSPECIFIED
}

fn default_port() -> u16 {
    4000
}

fn default_playground() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            playground: default_playground(),
            dataset: None,
        }
    }
}

impl ServerConfig {
    pub fn read(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        serde_yaml::from_reader(file).context("could not read yaml file")
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self).context("could not write yaml file")
    }

    /// Read the config at `path`, falling back to the defaults if there
    /// is no file there.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::read(path).with_context(|| format!("loading config {}", path.display()))
        } else {
            warn!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Build the library, seeded from the configured dataset.
    pub fn library(&self) -> Result<MemoryLibrary> {
        let dataset = match &self.dataset {
            Some(path) => {
                info!("seeding catalog from {}", path.display());
                Dataset::read(path)
                    .with_context(|| format!("loading dataset {}", path.display()))?
            }
            None => Dataset::seed(),
        };
        Ok(MemoryLibrary::new(dataset))
    }
}
