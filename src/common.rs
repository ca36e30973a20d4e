//! Common types for the tiles game: board errors and selection outcomes.

use crate::config::NUM_LAYERS;

/// Why a click did not change the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Every layer of the tile is already transparent.
    Cleared,
    /// The tile is the one currently highlighted.
    AlreadySelected,
    /// No tiles are left to play.
    GameOver,
}

/// Result of clicking a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// First tile of a pair picked and highlighted.
    Highlighted,
    /// The pair shared at least one layer color.
    Matched {
        /// Which layers were cleared on both tiles.
        layers: LayerMatch,
        /// Current chain after this match.
        chain: u32,
        /// The second tile still has layers left and is now highlighted.
        continues: bool,
    },
    /// The pair shared nothing; the chain was reset.
    Mismatch,
    /// The click was not a legal selection.
    Ignored(IgnoreReason),
}

impl SelectOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, SelectOutcome::Matched { .. })
    }
}

/// Per-layer result of comparing two tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerMatch([bool; NUM_LAYERS]);

impl LayerMatch {
    pub fn new(layers: [bool; NUM_LAYERS]) -> Self {
        Self(layers)
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|&m| m)
    }

    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&m| m).count()
    }

    pub fn contains(&self, layer: usize) -> bool {
        self.0.get(layer).copied().unwrap_or(false)
    }

    pub fn as_array(&self) -> [bool; NUM_LAYERS] {
        self.0
    }
}

/// Errors returned by Board and GameEngine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column outside the grid.
    InvalidPosition { row: usize, col: usize },
    /// A palette entry is not a 6-digit hex color.
    InvalidColor(String),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidPosition { row, col } => {
                write!(f, "Position out of range: row={}, col={}", row, col)
            }
            BoardError::InvalidColor(s) => write!(f, "Invalid hex color '{}'", s),
        }
    }
}

impl std::error::Error for BoardError {}
