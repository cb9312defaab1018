//! Delete command implementation.

use crate::error::{OperationError, Result};
use crate::output::Printer;

use super::Context;

/// Remove `alias` and persist. The store is left untouched when the alias
/// does not exist.
pub fn run(ctx: &Context, alias: &str, printer: &Printer) -> Result<()> {
    let mut config = ctx.store.load()?;
    config.remove(alias).ok_or_else(|| OperationError::AliasNotFound {
        alias: alias.to_string(),
    })?;
    ctx.store.save(&config)?;

    printer.success("Deleted", &format!("alias '{}'", alias));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{AliasStore, Config};
    use std::fs;
    use tempfile::tempdir;

    fn seeded(dir: &std::path::Path) -> Context {
        let store = AliasStore::new(dir.join("config.json"));
        let mut config = Config::default();
        config.insert("keep", "/keep");
        config.insert("drop", "/drop");
        store.save(&config).unwrap();
        Context::new(store, dir)
    }

    #[test]
    fn test_delete_removes_alias() {
        let dir = tempdir().unwrap();
        let ctx = seeded(dir.path());

        run(&ctx, "drop", &Printer::new()).unwrap();

        let config = ctx.store.load().unwrap();
        assert!(config.get("drop").is_none());
        assert!(config.get("keep").is_some());
    }

    #[test]
    fn test_delete_missing_leaves_file_identical() {
        let dir = tempdir().unwrap();
        let ctx = seeded(dir.path());
        let before = fs::read(ctx.store.path()).unwrap();

        let err = run(&ctx, "ghost", &Printer::new()).unwrap_err();

        assert!(matches!(err, OperationError::AliasNotFound { .. }));
        assert_eq!(fs::read(ctx.store.path()).unwrap(), before);
    }

    #[test]
    fn test_delete_on_fresh_store_writes_nothing() {
        let dir = tempdir().unwrap();
        let ctx = Context::new(AliasStore::new(dir.path().join("config.json")), dir.path());

        assert!(run(&ctx, "ghost", &Printer::new()).is_err());
        assert!(!ctx.store.path().exists());
    }
}
