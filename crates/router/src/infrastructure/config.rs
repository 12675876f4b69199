use std::{collections::HashMap, env, path::Path};

use dotenvy::{dotenv, from_filename, from_path_iter};
use tracing::warn;

use crate::core::domain::models::{RouterError, RouterResult};

pub const HASH_SEED_VAR: &str = "RING_HASH_SEED";
pub const NODES_VAR: &str = "RING_NODES";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouterConfig {
    pub hash_seed: u64,
    pub initial_nodes: Vec<String>,
}

/// The crate's own `.env`, for runs started outside its directory tree.
fn load_env_for_workspace() {
    let _ = from_filename(concat!(env!("CARGO_MANIFEST_DIR"), "/.env"));
}

impl RouterConfig {
    /// Loads the working directory's `.env` (searching upwards) and the
    /// crate's, then reads the process environment. Variables already set
    /// are never overridden.
    pub fn load() -> RouterResult<Self> {
        dotenv().ok();

        load_env_for_workspace();

        Self::from_env()
    }

    pub fn from_env() -> RouterResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads `path` as a `.env` file without touching the process
    /// environment. Process variables still win over the file, as in
    /// [`Self::load`].
    pub fn from_env_file(path: impl AsRef<Path>) -> RouterResult<Self> {
        let path = path.as_ref();
        let read_error =
            |e: dotenvy::Error| RouterError::Config(format!("{}: {e}", path.display()));

        let mut file_vars = HashMap::new();
        for item in from_path_iter(path).map_err(read_error)? {
            let (name, value) = item.map_err(read_error)?;
            file_vars.insert(name, value);
        }

        Self::from_lookup(|name| env::var(name).ok().or_else(|| file_vars.get(name).cloned()))
    }

    pub fn from_lookup<F>(lookup: F) -> RouterResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let hash_seed = match lookup(HASH_SEED_VAR) {
            Some(raw) if !raw.trim().is_empty() => raw.trim().parse::<u64>().map_err(|e| {
                RouterError::Config(format!("{HASH_SEED_VAR} must be an unsigned integer: {e}"))
            })?,
            _ => 0,
        };

        let initial_nodes = match lookup(NODES_VAR) {
            Some(raw) => {
                let mut nodes = Vec::new();
                for entry in raw.split(',').map(str::trim) {
                    if entry.is_empty() {
                        warn!("Ignoring empty entry in {NODES_VAR}");
                        continue;
                    }
                    nodes.push(entry.to_string());
                }
                nodes
            }
            None => Vec::new(),
        };

        Ok(Self {
            hash_seed,
            initial_nodes,
        })
    }
}
