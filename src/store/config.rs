//! The persisted alias map.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{OperationError, Result};

/// Alias store contents, serialized as `{"aliases": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Alias name → absolute directory path.
    #[serde(default)]
    pub aliases: BTreeMap<String, PathBuf>,
}

impl Config {
    /// Parse a config document.
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| OperationError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Fix or remove the config file; it is recreated on the next save".to_string()),
        })
    }

    /// Render the config as two-space indented JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self).map_err(|e| OperationError::Parse {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })?;
        json.push('\n');
        Ok(json)
    }

    /// Bind `alias` to `path`, returning the previous path if any.
    pub fn insert(&mut self, alias: impl Into<String>, path: impl Into<PathBuf>) -> Option<PathBuf> {
        self.aliases.insert(alias.into(), path.into())
    }

    pub fn remove(&mut self, alias: &str) -> Option<PathBuf> {
        self.aliases.remove(alias)
    }

    pub fn get(&self, alias: &str) -> Option<&Path> {
        self.aliases.get(alias).map(PathBuf::as_path)
    }

    /// Look up `alias`, failing with a not-found error.
    pub fn resolve(&self, alias: &str) -> Result<&Path> {
        self.get(alias).ok_or_else(|| OperationError::AliasNotFound {
            alias: alias.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Aliases in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_aliases() {
        let config = Config::parse(r#"{"aliases": {"web": "/home/me/web"}}"#).unwrap();
        assert_eq!(config.len(), 1);
        assert_eq!(config.get("web"), Some(Path::new("/home/me/web")));
    }

    #[test]
    fn test_parse_missing_aliases_key() {
        let config = Config::parse("{}").unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_parse_null_aliases_is_error() {
        assert!(Config::parse(r#"{"aliases": null}"#).is_err());
    }

    #[test]
    fn test_parse_malformed() {
        let err = Config::parse("{\"aliases\": ").unwrap_err();
        assert!(matches!(err, OperationError::Parse { .. }));
    }

    #[test]
    fn test_to_json_is_indented() {
        let mut config = Config::default();
        config.insert("web", "/srv/web");
        let json = config.to_json().unwrap();
        assert_eq!(json, "{\n  \"aliases\": {\n    \"web\": \"/srv/web\"\n  }\n}\n");
    }

    #[test]
    fn test_insert_overwrites() {
        let mut config = Config::default();
        assert_eq!(config.insert("web", "/a"), None);
        assert_eq!(config.insert("web", "/b"), Some(PathBuf::from("/a")));
        assert_eq!(config.get("web"), Some(Path::new("/b")));
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn test_resolve_missing() {
        let config = Config::default();
        let err = config.resolve("nope").unwrap_err();
        assert_eq!(err.to_string(), "Alias not found: nope");
    }

    #[test]
    fn test_iter_sorted() {
        let mut config = Config::default();
        config.insert("zeta", "/z");
        config.insert("alpha", "/a");
        config.insert("mid", "/m");
        let names: Vec<&str> = config.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }
}
