//! templater - directory templates by alias, plus a sprite sheet tile slicer
//!
//! Two small tools share this library: `templater` saves directories
//! under short aliases and copies them back out, and `spritechopper`
//! describes the uniform tile grid of a PNG as sprite sheet JSON.

pub mod cli;
pub mod copy;
pub mod error;
pub mod output;
pub mod sheet;
pub mod store;

pub use copy::{copy_tree, CopyStats};
pub use error::{EnvironmentError, OperationError, Result};
pub use sheet::{
    probe_dimensions, write_sheet_json, FrameData, Meta, Rect, Size, SpriteSheet, Tile, TileGrid,
};
pub use store::{default_config_path, AliasStore, Config};
