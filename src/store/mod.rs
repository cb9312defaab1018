//! JSON-backed alias store.
//!
//! The store is a thin handle over a config file path. Callers load a
//! [`Config`], mutate it in memory and save it back; every save rewrites
//! the whole file.
//!
//! # Example
//!
//! ```ignore
//! use templater::store::{default_config_path, AliasStore};
//!
//! let store = AliasStore::new(default_config_path()?);
//! let mut config = store.load()?;
//! config.insert("site", "/home/me/templates/site");
//! store.save(&config)?;
//! ```

mod config;
mod paths;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{OperationError, Result};

pub use config::Config;
pub use paths::{config_path_in, default_config_path, CONFIG_DIR_NAME, CONFIG_FILENAME};

/// Handle to an alias store file.
#[derive(Debug, Clone)]
pub struct AliasStore {
    path: PathBuf,
}

impl AliasStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the store. A missing file is an empty store.
    pub fn load(&self) -> Result<Config> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Config::parse(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(OperationError::io(&self.path, "Failed to read config", e)),
        }
    }

    /// Overwrite the store with `config`.
    pub fn save(&self, config: &Config) -> Result<()> {
        let json = config.to_json()?;
        fs::write(&self.path, json)
            .map_err(|e| OperationError::io(&self.path, "Failed to write config", e))
    }
}
