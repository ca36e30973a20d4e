#![allow(dead_code)]

use matching_tiles::{Board, Rgb, Tile, NUM_TILES, PALETTE};

pub fn color(i: usize) -> Rgb {
    Rgb::from_hex(PALETTE[i]).unwrap()
}

/// Tiles 2k and 2k+1 (column-major) are identical on every layer.
pub fn pair_board() -> Board {
    Board::from_tiles(core::array::from_fn(|p| {
        let c = color(p / 2);
        Tile::new([c, c, c])
    }))
}

/// Like [`pair_board`] on layers 0 and 2, but layer 1 pairs tile 2k+1 with
/// tile 2k+2 (wrapping), so a match always leaves the second tile a layer
/// that matches its other neighbour.
pub fn chained_board() -> Board {
    Board::from_tiles(core::array::from_fn(|p| {
        let outer = color(p / 2);
        let middle = color(((p + NUM_TILES - 1) % NUM_TILES) / 2);
        Tile::new([outer, middle, outer])
    }))
}
