//! Sprite sheet metadata for uniformly tiled images.
//!
//! Emits the TexturePacker "JSON hash" layout (`frames` keyed by name plus
//! a `meta` block) so game engines can load the tiles of an existing PNG
//! without re-packing it.

mod grid;
mod probe;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OperationError, Result};

pub use grid::{Tile, TileGrid};
pub use probe::probe_dimensions;

/// Pixel rectangle, origin at top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

/// One frame entry. Tiles are never rotated or trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameData {
    pub frame: Rect,
    pub rotated: bool,
    pub trimmed: bool,
    #[serde(rename = "spriteSourceSize")]
    pub sprite_source_size: Rect,
    #[serde(rename = "sourceSize")]
    pub source_size: Size,
}

impl FrameData {
    /// Untrimmed frame covering `rect`; source size is the tile's own size.
    pub fn untrimmed(rect: Rect) -> Self {
        FrameData {
            frame: rect,
            rotated: false,
            trimmed: false,
            sprite_source_size: Rect {
                x: 0,
                y: 0,
                w: rect.w,
                h: rect.h,
            },
            source_size: Size { w: rect.w, h: rect.h },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub image: String,
    pub size: Size,
    pub scale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSheet {
    pub frames: BTreeMap<String, FrameData>,
    pub meta: Meta,
}

impl SpriteSheet {
    /// Describe every tile of `grid` over the image named `image`.
    pub fn from_grid(image: impl Into<String>, grid: &TileGrid) -> Self {
        let frames = grid
            .tiles()
            .map(|tile| (tile.name(), FrameData::untrimmed(tile.rect)))
            .collect();

        SpriteSheet {
            frames,
            meta: Meta {
                image: image.into(),
                size: grid.image,
                scale: "1".to_string(),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Write the sheet as two-space indented JSON, replacing any existing file.
pub fn write_sheet_json(sheet: &SpriteSheet, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(sheet).map_err(|e| OperationError::Slice {
        message: format!("Failed to serialize sheet metadata: {}", e),
        help: None,
    })?;
    fs::write(path, json).map_err(|e| OperationError::io(path, "Failed to write sheet metadata", e))?;
    Ok(())
}
