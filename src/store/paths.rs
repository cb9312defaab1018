//! Per-user config location.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::EnvironmentError;

/// Hidden directory under the user's home that holds the store.
pub const CONFIG_DIR_NAME: &str = ".templater";

/// File name of the alias store.
pub const CONFIG_FILENAME: &str = "config.json";

/// Resolve `~/.templater/config.json`, creating `~/.templater` if needed.
pub fn default_config_path() -> Result<PathBuf, EnvironmentError> {
    let home = dirs::home_dir().ok_or(EnvironmentError::HomeDir)?;
    config_path_in(&home)
}

/// Resolve the store path under an explicit home directory.
pub fn config_path_in(home: &Path) -> Result<PathBuf, EnvironmentError> {
    let dir = home.join(CONFIG_DIR_NAME);
    fs::create_dir_all(&dir).map_err(|source| EnvironmentError::ConfigDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir.join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_path_creates_directory() {
        let home = tempdir().unwrap();
        let path = config_path_in(home.path()).unwrap();

        assert_eq!(path, home.path().join(".templater").join("config.json"));
        assert!(home.path().join(".templater").is_dir());
        assert!(!path.exists());
    }

    #[test]
    fn test_config_path_existing_directory() {
        let home = tempdir().unwrap();
        fs::create_dir_all(home.path().join(".templater")).unwrap();
        assert!(config_path_in(home.path()).is_ok());
    }

    #[test]
    fn test_config_path_home_is_file() {
        let dir = tempdir().unwrap();
        let home = dir.path().join("not-a-dir");
        fs::write(&home, "x").unwrap();

        let err = config_path_in(&home).unwrap_err();
        assert!(matches!(err, EnvironmentError::ConfigDir { .. }));
    }
}
