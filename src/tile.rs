//! A single tile: three nested colored squares.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::config::NUM_LAYERS;

/// Fill of one layer; `None` once the layer has been matched away.
pub type Layer = Option<Rgb>;

/// Stacked layers, index 0 is the largest square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    layers: [Layer; NUM_LAYERS],
}

impl Tile {
    pub fn new(colors: [Rgb; NUM_LAYERS]) -> Self {
        Self {
            layers: colors.map(Some),
        }
    }

    pub fn from_layers(layers: [Layer; NUM_LAYERS]) -> Self {
        Self { layers }
    }

    /// Fill of `layer`, or `None` if it is transparent or out of range.
    pub fn layer(&self, layer: usize) -> Layer {
        self.layers.get(layer).copied().flatten()
    }

    pub fn layers(&self) -> &[Layer; NUM_LAYERS] {
        &self.layers
    }

    /// A tile is cleared once every layer is transparent.
    pub fn is_cleared(&self) -> bool {
        self.layers.iter().all(Option::is_none)
    }

    pub fn remaining_layers(&self) -> usize {
        self.layers.iter().filter(|l| l.is_some()).count()
    }

    pub fn clear_layer(&mut self, layer: usize) {
        if let Some(slot) = self.layers.get_mut(layer) {
            *slot = None;
        }
    }

    /// Whether `other` has the same opaque fill on any layer.
    pub fn shares_layer_with(&self, other: &Tile) -> bool {
        self.layers
            .iter()
            .zip(other.layers.iter())
            .any(|(a, b)| a.is_some() && a == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const GREEN: Rgb = Rgb::new(0, 255, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[test]
    fn clearing_all_layers_clears_tile() {
        let mut tile = Tile::new([RED, GREEN, BLUE]);
        assert!(!tile.is_cleared());
        tile.clear_layer(0);
        tile.clear_layer(2);
        assert_eq!(tile.remaining_layers(), 1);
        assert_eq!(tile.layer(1), Some(GREEN));
        tile.clear_layer(1);
        assert!(tile.is_cleared());
        // out of range is a no-op
        tile.clear_layer(7);
        assert_eq!(tile.layer(7), None);
    }

    #[test]
    fn transparent_layers_never_share() {
        let a = Tile::from_layers([None, Some(GREEN), None]);
        let b = Tile::from_layers([None, Some(BLUE), None]);
        assert!(!a.shares_layer_with(&b));
        let c = Tile::from_layers([Some(RED), Some(GREEN), None]);
        assert!(a.shares_layer_with(&c));
    }
}
