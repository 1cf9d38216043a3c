/// Trait for providing roster data, abstracting over the JSON store and in-memory sources
use crate::types::Player;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Source of named rosters. Implemented by both `JsonStore` and `MemorySource`.
///
/// `get_set` must return a stable snapshot; callers fetch once per render.
pub trait RosterSource {
    /// Players of the roster `key` in roster order, empty when unknown
    fn get_set(&self, key: &str) -> Vec<Player>;

    /// All roster keys, sorted
    fn keys(&self) -> Vec<String>;
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read roster file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed roster file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write roster file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Rosters held in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    sets: HashMap<String, Vec<Player>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_set(mut self, key: impl Into<String>, players: Vec<Player>) -> Self {
        self.insert(key, players);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, players: Vec<Player>) {
        self.sets.insert(key.into(), players);
    }
}

impl RosterSource for MemorySource {
    fn get_set(&self, key: &str) -> Vec<Player> {
        self.sets.get(key).cloned().unwrap_or_default()
    }

    fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.sets.keys().cloned().collect();
        keys.sort();
        keys
    }
}

const ROSTER_EXTENSION: &str = "json";

/// Directory of `<key>.json` files, each a JSON array of players
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, ROSTER_EXTENSION))
    }

    /// Load one roster, reporting why it could not be read
    pub fn load(&self, key: &str) -> Result<Vec<Player>, StoreError> {
        let path = self.path_for(key);
        let content = fs::read_to_string(&path).map_err(|source| StoreError::Read {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| StoreError::Parse { path, source })
    }

    /// Write one roster, creating the directory when needed
    pub fn save(&self, key: &str, players: &[Player]) -> Result<PathBuf, StoreError> {
        let path = self.path_for(key);
        let write_err = |source| StoreError::Write {
            path: path.clone(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(write_err)?;
        let json = serde_json::to_string_pretty(players).map_err(|e| StoreError::Write {
            path: path.clone(),
            source: e.into(),
        })?;
        fs::write(&path, json).map_err(write_err)?;
        Ok(path)
    }
}

impl RosterSource for JsonStore {
    fn get_set(&self, key: &str) -> Vec<Player> {
        match self.load(key) {
            Ok(players) => {
                tracing::debug!("Loaded roster '{}' with {} players", key, players.len());
                players
            }
            Err(e) => {
                tracing::error!("{:#}", anyhow::Error::new(e));
                Vec::new()
            }
        }
    }

    fn keys(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Cannot list roster directory {}: {}", self.dir.display(), e);
                return Vec::new();
            }
        };

        let mut keys: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == ROSTER_EXTENSION))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        keys.sort();
        keys
    }
}
