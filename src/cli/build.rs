//! Build and dump command implementation.
//!
//! Both copy the directory an alias points to into the working directory;
//! `build` namespaces the copy under `./<alias>`, `dump` does not.

use std::path::PathBuf;

use crate::copy::{copy_tree, CopyStats};
use crate::error::Result;
use crate::output::{display_path_from, plural, Printer};

use super::Context;

/// Where the template lands relative to the working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// `./<alias>`
    Subdirectory,
    /// `.`
    WorkingDirectory,
}

impl Placement {
    fn destination(self, ctx: &Context, alias: &str) -> PathBuf {
        match self {
            Placement::Subdirectory => ctx.cwd.join(alias),
            Placement::WorkingDirectory => ctx.cwd.clone(),
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Placement::Subdirectory => "Copied",
            Placement::WorkingDirectory => "Dumped",
        }
    }
}

/// Copy the template behind `alias`. Nothing is created when the alias is
/// unknown.
pub fn run(ctx: &Context, alias: &str, placement: Placement, printer: &Printer) -> Result<CopyStats> {
    let config = ctx.store.load()?;
    let source = config.resolve(alias)?;
    let destination = placement.destination(ctx, alias);

    let stats = copy_tree(source, &destination)?;

    printer.success(
        placement.verb(),
        &format!(
            "{} from {} to {}",
            plural(stats.files, "file", "files"),
            source.display(),
            display_path_from(&destination, &ctx.cwd)
        ),
    );
    printer.verbose(
        "Totals",
        &format!("{}, {} bytes", plural(stats.dirs, "directory", "directories"), stats.bytes),
    );

    Ok(stats)
}
