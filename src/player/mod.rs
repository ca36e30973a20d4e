//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: picks tiles that keep the chain going
//! - CliPlayer: Interactive command-line player

use rand::rngs::SmallRng;

use crate::common::SelectOutcome;
use crate::game::GameEngine;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next tile to click as (row, col), or `None` to stop playing.
    fn select_tile(&mut self, rng: &mut SmallRng, engine: &GameEngine) -> Option<(usize, usize)>;

    /// Inform the player of the result of its last click.
    fn handle_outcome(
        &mut self,
        _coord: (usize, usize),
        _outcome: SelectOutcome,
        _engine: &GameEngine,
    ) {
    }
}

pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::{coord_to_string, parse_coord, render_board, CliPlayer};
