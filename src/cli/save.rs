//! Save command implementation.

use crate::error::Result;
use crate::output::Printer;

use super::Context;

/// Bind `alias` to the working directory and persist the store.
pub fn run(ctx: &Context, alias: &str, printer: &Printer) -> Result<()> {
    let mut config = ctx.store.load()?;
    let previous = config.insert(alias, ctx.cwd.clone());
    ctx.store.save(&config)?;

    if let Some(old) = previous.filter(|old| *old != ctx.cwd) {
        printer.info("Replaced", &format!("'{}' (was {})", alias, old.display()));
    }
    printer.success("Saved", &format!("alias '{}' -> {}", alias, ctx.cwd.display()));

    Ok(())
}
