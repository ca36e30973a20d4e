//! Pixel geometry of the tile grid, shared by renderers and click routing.
//!
//! All coordinates are relative to the top-left corner of the grid area,
//! padding included.

use crate::config::{GRID_GAP, GRID_PADDING, LAYER_STEP, NUM_COLS, NUM_ROWS, TILE_SIZE};

/// Axis-aligned rectangle in grid-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl Bounds {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.size && py >= self.y && py < self.y + self.size
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.size / 2.0, self.y + self.size / 2.0)
    }
}

/// Width and height of the whole grid including padding.
pub fn grid_size() -> (f32, f32) {
    let span = |n: usize| 2.0 * GRID_PADDING + n as f32 * TILE_SIZE + (n - 1) as f32 * GRID_GAP;
    (span(NUM_COLS), span(NUM_ROWS))
}

pub fn tile_rect(row: usize, col: usize) -> Bounds {
    Bounds {
        x: GRID_PADDING + col as f32 * (TILE_SIZE + GRID_GAP),
        y: GRID_PADDING + row as f32 * (TILE_SIZE + GRID_GAP),
        size: TILE_SIZE,
    }
}

/// Side length of a layer; layer 0 fills the tile.
pub fn layer_size(layer: usize) -> f32 {
    TILE_SIZE - LAYER_STEP * layer as f32
}

/// Layer square centered inside `tile`.
pub fn layer_rect(tile: Bounds, layer: usize) -> Bounds {
    let size = layer_size(layer);
    let inset = (tile.size - size) / 2.0;
    Bounds {
        x: tile.x + inset,
        y: tile.y + inset,
        size,
    }
}

/// Tile under a point, or `None` for padding, gaps and anything outside.
pub fn tile_at(px: f32, py: f32) -> Option<(usize, usize)> {
    let pitch = TILE_SIZE + GRID_GAP;
    let lx = px - GRID_PADDING;
    let ly = py - GRID_PADDING;
    if lx < 0.0 || ly < 0.0 {
        return None;
    }
    let col = (lx / pitch) as usize;
    let row = (ly / pitch) as usize;
    if col >= NUM_COLS || row >= NUM_ROWS {
        return None;
    }
    tile_rect(row, col).contains(px, py).then_some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_size_counts_padding_and_gaps() {
        let (w, h) = grid_size();
        assert_eq!(w, 2.0 * 20.0 + 4.0 * 125.0 + 3.0 * 8.0);
        assert_eq!(h, 2.0 * 20.0 + 5.0 * 125.0 + 4.0 * 8.0);
    }

    #[test]
    fn every_tile_center_hits_its_tile() {
        for row in 0..NUM_ROWS {
            for col in 0..NUM_COLS {
                let (cx, cy) = tile_rect(row, col).center();
                assert_eq!(tile_at(cx, cy), Some((row, col)));
            }
        }
    }

    #[test]
    fn padding_and_gaps_miss() {
        assert_eq!(tile_at(5.0, 5.0), None);
        let first = tile_rect(0, 0);
        // inside the gap between column 0 and 1
        assert_eq!(tile_at(first.x + TILE_SIZE + GRID_GAP / 2.0, first.y + 10.0), None);
        let (w, h) = grid_size();
        assert_eq!(tile_at(w - 1.0, h - 1.0), None);
        assert_eq!(tile_at(-3.0, 40.0), None);
    }

    #[test]
    fn layers_shrink_and_stay_centered() {
        let tile = tile_rect(1, 2);
        assert_eq!(layer_size(0), 125.0);
        assert_eq!(layer_size(1), 93.0);
        assert_eq!(layer_size(2), 61.0);
        for layer in 0..3 {
            assert_eq!(layer_rect(tile, layer).center(), tile.center());
        }
    }
}
