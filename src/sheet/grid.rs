//! Fixed-stride grid partition of an image.

use crate::error::{OperationError, Result};

use super::{Rect, Size};

/// A uniform grid of tiles laid over an image.
///
/// Pixels past the last whole column or row are not covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    pub image: Size,
    pub tile: Size,
    pub columns: u32,
    pub rows: u32,
}

/// One cell of a [`TileGrid`], addressed by row-major index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub index: usize,
    pub row: u32,
    pub col: u32,
    pub rect: Rect,
}

impl Tile {
    /// Frame name used in the sheet, e.g. `tile_0.png`.
    pub fn name(&self) -> String {
        format!("tile_{}.png", self.index)
    }
}

impl TileGrid {
    /// Partition `image` into `tile`-sized cells.
    pub fn new(image: Size, tile: Size) -> Result<Self> {
        if tile.w == 0 || tile.h == 0 {
            return Err(OperationError::Slice {
                message: format!("Tile size must be non-zero, got {}x{}", tile.w, tile.h),
                help: Some("Both -tilewidth and -tileheight must be at least 1".to_string()),
            });
        }

        Ok(Self {
            image,
            tile,
            columns: image.w / tile.w,
            rows: image.h / tile.h,
        })
    }

    pub fn len(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pixels left uncovered at the right and bottom edges.
    pub fn remainder(&self) -> (u32, u32) {
        (self.image.w % self.tile.w, self.image.h % self.tile.h)
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.columns).map(move |col| (row, col)))
            .enumerate()
            .map(move |(index, (row, col))| Tile {
                index,
                row,
                col,
                rect: Rect {
                    x: col * self.tile.w,
                    y: row * self.tile.h,
                    w: self.tile.w,
                    h: self.tile.h,
                },
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid(w: u32, h: u32, tw: u32, th: u32) -> TileGrid {
        TileGrid::new(Size { w, h }, Size { w: tw, h: th }).unwrap()
    }

    #[test]
    fn test_grid_exact_fit() {
        let g = grid(64, 32, 16, 16);
        assert_eq!((g.columns, g.rows), (4, 2));
        assert_eq!(g.len(), 8);
        assert_eq!(g.remainder(), (0, 0));
    }

    #[test]
    fn test_grid_drops_remainder() {
        let g = grid(100, 100, 60, 60);
        assert_eq!(g.len(), 1);
        assert_eq!(g.remainder(), (40, 40));

        let tiles: Vec<Tile> = g.tiles().collect();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].name(), "tile_0.png");
        assert_eq!(tiles[0].rect, Rect { x: 0, y: 0, w: 60, h: 60 });
    }

    #[test]
    fn test_grid_row_major_positions() {
        let cases = [(64, 48, 16, 16), (100, 37, 30, 12), (7, 7, 1, 1), (90, 200, 45, 20)];

        for (w, h, tw, th) in cases {
            let g = grid(w, h, tw, th);
            let tiles: Vec<Tile> = g.tiles().collect();
            assert_eq!(tiles.len(), ((w / tw) * (h / th)) as usize);

            let columns = w / tw;
            for (i, tile) in tiles.iter().enumerate() {
                assert_eq!(tile.index, i);
                assert_eq!(tile.rect.x, (i as u32 % columns) * tw);
                assert_eq!(tile.rect.y, (i as u32 / columns) * th);
                assert_eq!((tile.rect.w, tile.rect.h), (tw, th));
                assert_eq!((tile.row, tile.col), (i as u32 / columns, i as u32 % columns));
            }
        }
    }

    #[test]
    fn test_grid_tile_larger_than_image() {
        let g = grid(10, 10, 16, 16);
        assert!(g.is_empty());
        assert_eq!(g.tiles().count(), 0);
    }

    #[test]
    fn test_grid_names() {
        let names: Vec<String> = grid(24, 16, 8, 8).tiles().map(|t| t.name()).collect();
        assert_eq!(
            names,
            vec!["tile_0.png", "tile_1.png", "tile_2.png", "tile_3.png", "tile_4.png", "tile_5.png"]
        );
    }

    #[test]
    fn test_grid_zero_tile_rejected() {
        assert!(TileGrid::new(Size { w: 10, h: 10 }, Size { w: 0, h: 4 }).is_err());
        assert!(TileGrid::new(Size { w: 10, h: 10 }, Size { w: 4, h: 0 }).is_err());
    }
}
