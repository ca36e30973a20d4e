use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    board::{position, Board, BoardState},
    common::{BoardError, IgnoreReason, SelectOutcome},
    config::{MSG_GAME_OVER, MSG_MISMATCH, MSG_SELECT_ANY},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Over,
}

/// Click counters kept for summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameStats {
    pub clicks: u32,
    pub matches: u32,
    pub mismatches: u32,
}

/// Serializable overall game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: BoardState,
    pub selection: Option<(usize, usize)>,
    pub current_chain: u32,
    pub max_chain: u32,
    pub info: String,
    pub stats: GameStats,
}

/// Core game logic: the board, the highlighted tile and the chain counters.
pub struct GameEngine {
    board: Board,
    selection: Option<(usize, usize)>,
    current_chain: u32,
    max_chain: u32,
    info: &'static str,
    stats: GameStats,
}

impl GameEngine {
    /// Create an engine for an already dealt board.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            selection: None,
            current_chain: 0,
            max_chain: 0,
            info: "",
            stats: GameStats::default(),
        }
    }

    /// Deal a random board and start a game on it.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, BoardError> {
        Ok(Self::new(Board::random(rng)?))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The highlighted tile, if any.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    pub fn current_chain(&self) -> u32 {
        self.current_chain
    }

    pub fn max_chain(&self) -> u32 {
        self.max_chain
    }

    /// Feedback line shown under the counters; empty when there is nothing to say.
    pub fn info(&self) -> &str {
        self.info
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn current_chain_text(&self) -> String {
        format!("Current Chain: {}", self.current_chain)
    }

    pub fn max_chain_text(&self) -> String {
        format!("Max Chain: {}", self.max_chain)
    }

    pub fn status(&self) -> GameStatus {
        if self.board.all_cleared() {
            GameStatus::Over
        } else {
            GameStatus::InProgress
        }
    }

    /// Handle a click on the tile at (row, col).
    pub fn select(&mut self, row: usize, col: usize) -> Result<SelectOutcome, BoardError> {
        // validate before touching any state
        let tile = *self.board.tile(row, col)?;
        self.info = "";
        self.stats.clicks += 1;

        if self.status() == GameStatus::Over {
            return Ok(SelectOutcome::Ignored(IgnoreReason::GameOver));
        }
        if tile.is_cleared() {
            return Ok(SelectOutcome::Ignored(IgnoreReason::Cleared));
        }
        if self.selection == Some((row, col)) {
            return Ok(SelectOutcome::Ignored(IgnoreReason::AlreadySelected));
        }

        let first = match self.selection.take() {
            None => {
                debug!("highlight tile ({}, {})", row, col);
                self.selection = Some((row, col));
                return Ok(SelectOutcome::Highlighted);
            }
            Some(first) => first,
        };

        let layers = self.board.match_layers(first, (row, col))?;
        if !layers.any() {
            info!(
                "no match between ({}, {}) and ({}, {}), chain of {} lost",
                first.0, first.1, row, col, self.current_chain
            );
            self.info = MSG_MISMATCH;
            self.current_chain = 0;
            self.stats.mismatches += 1;
            return Ok(SelectOutcome::Mismatch);
        }

        self.current_chain += 1;
        if self.current_chain > self.max_chain {
            self.max_chain = self.current_chain;
        }
        self.stats.matches += 1;
        info!(
            "matched {} layer(s) between ({}, {}) and ({}, {}), chain {}",
            layers.count(),
            first.0,
            first.1,
            row,
            col,
            self.current_chain
        );

        let continues = !self.board.tile(row, col)?.is_cleared();
        if continues {
            self.selection = Some((row, col));
        } else {
            self.info = MSG_SELECT_ANY;
        }

        if self.board.all_cleared() {
            info!("all tiles cleared, max chain {}", self.max_chain);
            self.info = MSG_GAME_OVER;
            self.selection = None;
        }

        Ok(SelectOutcome::Matched {
            layers,
            chain: self.current_chain,
            continues,
        })
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: BoardState::from(&self.board),
            selection: self.selection,
            current_chain: self.current_chain,
            max_chain: self.max_chain,
            info: self.info.to_string(),
            stats: self.stats,
        }
    }

    /// Restore an engine from a previously saved state.
    pub fn from_state(state: GameState) -> Result<Self, BoardError> {
        let board = Board::from(state.board);
        let mut selection = state.selection;
        if let Some((row, col)) = selection {
            // a cleared tile can never hold the highlight
            if board.tiles()[position(row, col)?].is_cleared() {
                selection = None;
            }
        }
        Ok(Self {
            board,
            selection,
            current_chain: state.current_chain,
            max_chain: state.max_chain.max(state.current_chain),
            info: known_message(&state.info),
            stats: state.stats,
        })
    }
}

fn known_message(info: &str) -> &'static str {
    [MSG_MISMATCH, MSG_SELECT_ANY, MSG_GAME_OVER]
        .into_iter()
        .find(|m| *m == info)
        .unwrap_or("")
}
