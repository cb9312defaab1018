//! Tile slicer implementation (`spritechopper`).
//!
//! Reads a PNG header, lays a uniform grid over it and writes the sprite
//! sheet metadata describing every whole tile.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::sheet::{probe_dimensions, write_sheet_json, Size, SpriteSheet, TileGrid};

/// Printed when required flags are missing or invalid.
pub const USAGE: &str = "Usage: -file tiles.png -tilewidth 64 -tileheight 64 [-output out.json]";

/// Long flags that may also be spelled with a single dash.
const LONG_FLAGS: &[&str] = &["file", "tilewidth", "tileheight", "output", "verbose", "help", "version"];

/// Describe a uniform tile grid of a PNG as sprite sheet JSON
#[derive(Parser, Debug)]
#[command(name = "spritechopper")]
#[command(version, about, long_about = None)]
pub struct ChopArgs {
    /// Path to the PNG tileset
    #[arg(long, value_parser = clap::builder::NonEmptyStringValueParser::new())]
    pub file: String,

    /// Width of each tile
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub tilewidth: u32,

    /// Height of each tile
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub tileheight: u32,

    /// Output JSON filename
    #[arg(long, default_value = "spritesheet.json")]
    pub output: PathBuf,

    /// Print grid details
    #[arg(long, short)]
    pub verbose: bool,
}

/// Outcome of a successful slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceSummary {
    pub output: PathBuf,
    pub tiles: usize,
}

/// Rewrite single-dash long flags (`-file x`, `-output=y`) to `--file`.
pub fn normalize_flags<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    argv.into_iter()
        .map(Into::<OsString>::into)
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 {
                return arg;
            }
            match arg.to_str() {
                Some(s) if is_single_dash_long(s) => OsString::from(format!("-{}", s)),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split('=').next().unwrap_or(rest);
    LONG_FLAGS.contains(&name)
}

pub fn run(args: &ChopArgs, printer: &Printer) -> Result<SliceSummary> {
    let path = Path::new(&args.file);
    let image = probe_dimensions(path)?;
    let grid = TileGrid::new(
        image,
        Size {
            w: args.tilewidth,
            h: args.tileheight,
        },
    )?;

    printer.verbose(
        "Analyzed",
        &format!("{}x{} image, {}x{} grid", image.w, image.h, grid.columns, grid.rows),
    );

    let (right, bottom) = grid.remainder();
    if right > 0 || bottom > 0 {
        printer.warning(
            "Warning",
            &format!(
                "{}x{} is not a multiple of {}x{}; dropping {}px right, {}px bottom",
                image.w, image.h, args.tilewidth, args.tileheight, right, bottom
            ),
        );
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.clone());
    let sheet = SpriteSheet::from_grid(name, &grid);
    write_sheet_json(&sheet, &args.output)?;

    printer.success(
        "Wrote",
        &format!("{} ({})", args.output.display(), plural(sheet.len(), "tile", "tiles")),
    );

    Ok(SliceSummary {
        output: args.output.clone(),
        tiles: sheet.len(),
    })
}
