pub mod demo;
pub mod export;
pub mod list;
pub mod show;

use crate::config::Config;
use crate::data_provider::{JsonStore, MemorySource, RosterSource};
use crate::fixtures::create_mock_rosters;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Build the roster source for a CLI run
///
/// `--mock` serves the fixture rosters from memory; otherwise rosters are read
/// from the data directory given on the command line or in the config file.
pub fn open_source(config: &Config, data_dir: Option<PathBuf>, mock: bool) -> Result<Box<dyn RosterSource>> {
    if mock {
        let mut source = MemorySource::new();
        for (key, players) in create_mock_rosters() {
            source.insert(key, players);
        }
        return Ok(Box::new(source));
    }

    let dir = data_dir
        .or_else(|| config.data_dir())
        .context("Unable to determine the roster directory, pass --data-dir")?;
    tracing::debug!("Reading rosters from {}", dir.display());
    Ok(Box::new(JsonStore::new(dir)))
}
