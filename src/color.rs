//! Tile fill colors and the pair list dealt onto a board.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::common::BoardError;
use crate::config::{NUM_TILES, PALETTE};

/// An opaque 24-bit fill color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `rrggbb`, case-insensitive, with an optional leading `#`.
    pub fn from_hex(code: &str) -> Result<Self, BoardError> {
        let hex = code.strip_prefix('#').unwrap_or(code);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(BoardError::InvalidColor(code.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| BoardError::InvalidColor(code.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// Colors for one layer of a board: each palette entry used appears exactly
/// twice, in palette order (unshuffled).
pub fn generate_colors() -> Result<Vec<Rgb>, BoardError> {
    let mut colors = Vec::with_capacity(NUM_TILES);
    for i in 0..NUM_TILES / 2 {
        let color = Rgb::from_hex(PALETTE[i % PALETTE.len()])?;
        colors.push(color);
        colors.push(color);
    }
    Ok(colors)
}
