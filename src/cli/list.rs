//! List command implementation.

use std::io::Write;

use crate::error::{OperationError, Result};
use crate::store::Config;

use super::Context;

/// Printed instead of rows when the store is empty.
pub const EMPTY_MESSAGE: &str = "No aliases found.";

pub fn run(ctx: &Context, out: &mut impl Write) -> Result<()> {
    let config = ctx.store.load()?;
    write_listing(&config, out).map_err(OperationError::from)
}

/// Write one `alias -> path` line per alias, sorted by alias.
pub fn write_listing(config: &Config, out: &mut impl Write) -> std::io::Result<()> {
    if config.is_empty() {
        return writeln!(out, "{}", EMPTY_MESSAGE);
    }

    for (alias, path) in config.iter() {
        writeln!(out, "{} -> {}", alias, path.display())?;
    }
    Ok(())
}
