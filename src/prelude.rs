//! Commonly used types and utilities for ease of import.

pub use crate::{
    init_logging, run_game, AiPlayer, Board, CliPlayer, GameEngine, GameStatus, GameSummary,
    Player, SelectOutcome,
};
