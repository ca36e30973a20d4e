//! Board state: a column-major grid of tiles and the pair-matching rule.

use core::fmt;
use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::{generate_colors, Rgb};
use crate::common::{BoardError, LayerMatch};
use crate::config::{NUM_COLS, NUM_LAYERS, NUM_ROWS, NUM_TILES};
use crate::tile::Tile;

/// Serializable board state for saving or replaying games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub tiles: [Tile; NUM_TILES],
}

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [Tile; NUM_TILES],
}

/// Flat index of `(row, col)`; tiles are stored column by column.
pub fn position(row: usize, col: usize) -> Result<usize, BoardError> {
    if row >= NUM_ROWS || col >= NUM_COLS {
        return Err(BoardError::InvalidPosition { row, col });
    }
    Ok(col * NUM_ROWS + row)
}

/// Inverse of [`position`].
pub fn coords(position: usize) -> (usize, usize) {
    (position % NUM_ROWS, position / NUM_ROWS)
}

impl Board {
    /// Deal a fresh board: every layer gets its own shuffle of the pair list.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, BoardError> {
        let base = generate_colors()?;
        let mut layers: [Vec<Rgb>; NUM_LAYERS] = core::array::from_fn(|_| base.clone());
        for layer in layers.iter_mut() {
            layer.shuffle(rng);
        }
        let tiles = core::array::from_fn(|pos| Tile::new(core::array::from_fn(|l| layers[l][pos])));
        Ok(Board { tiles })
    }

    /// Build a board from tiles given in column-major order.
    pub fn from_tiles(tiles: [Tile; NUM_TILES]) -> Self {
        Board { tiles }
    }

    pub fn tile(&self, row: usize, col: usize) -> Result<&Tile, BoardError> {
        Ok(&self.tiles[position(row, col)?])
    }

    /// Tiles in column-major order.
    pub fn tiles(&self) -> &[Tile; NUM_TILES] {
        &self.tiles
    }

    /// Compare two tiles layer by layer. Layers with the same opaque fill
    /// are cleared on both tiles. A tile is never compared with itself.
    pub fn match_layers(
        &mut self,
        a: (usize, usize),
        b: (usize, usize),
    ) -> Result<LayerMatch, BoardError> {
        let pa = position(a.0, a.1)?;
        let pb = position(b.0, b.1)?;
        if pa == pb {
            return Ok(LayerMatch::default());
        }
        let mut matched = [false; NUM_LAYERS];
        for (layer, hit) in matched.iter_mut().enumerate() {
            let fill = self.tiles[pa].layer(layer);
            if fill.is_some() && fill == self.tiles[pb].layer(layer) {
                self.tiles[pa].clear_layer(layer);
                self.tiles[pb].clear_layer(layer);
                *hit = true;
            }
        }
        Ok(LayerMatch::new(matched))
    }

    /// Returns `true` when every tile is transparent.
    pub fn all_cleared(&self) -> bool {
        self.tiles.iter().all(Tile::is_cleared)
    }

    pub fn remaining_tiles(&self) -> usize {
        self.tiles.iter().filter(|t| !t.is_cleared()).count()
    }

    /// Uncleared occurrences of each color on `layer`.
    pub fn color_counts(&self, layer: usize) -> HashMap<Rgb, usize> {
        let mut counts = HashMap::new();
        for fill in self.tiles.iter().filter_map(|t| t.layer(layer)) {
            *counts.entry(fill).or_insert(0) += 1;
        }
        counts
    }

    /// Uncleared tiles other than `(row, col)` sharing a layer color with it.
    pub fn partners(&self, row: usize, col: usize) -> Result<Vec<(usize, usize)>, BoardError> {
        let pos = position(row, col)?;
        let tile = &self.tiles[pos];
        Ok(self
            .tiles
            .iter()
            .enumerate()
            .filter(|(p, other)| *p != pos && tile.shares_layer_with(other))
            .map(|(p, _)| coords(p))
            .collect())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in 0..NUM_ROWS {
            write!(f, " ")?;
            for col in 0..NUM_COLS {
                let tile = &self.tiles[col * NUM_ROWS + row];
                write!(f, " [")?;
                for layer in tile.layers() {
                    match layer {
                        Some(c) => write!(f, "{}", c.to_hex())?,
                        None => write!(f, "------")?,
                    }
                }
                write!(f, "]")?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState { tiles: b.tiles }
    }
}

impl From<BoardState> for Board {
    fn from(state: BoardState) -> Self {
        Board { tiles: state.tiles }
    }
}
