use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::board::coords;
use crate::game::{GameEngine, GameStatus};

use super::Player;

/// Greedy player: always clicks a partner of the highlighted tile, preferring
/// partners that survive the match so the chain keeps going.
pub struct AiPlayer {
    mistake_rate: f64,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self { mistake_rate: 0.0 }
    }

    /// Player that clicks a random uncleared tile with probability `rate`.
    pub fn with_mistake_rate(rate: f64) -> Self {
        Self {
            mistake_rate: rate.clamp(0.0, 1.0),
        }
    }

    pub fn mistake_rate(&self) -> f64 {
        self.mistake_rate
    }

    /// Best click for `engine` ignoring the mistake rate.
    pub fn suggest(&self, rng: &mut SmallRng, engine: &GameEngine) -> Option<(usize, usize)> {
        if engine.status() == GameStatus::Over {
            return None;
        }
        let board = engine.board();
        match engine.selection() {
            Some((row, col)) => {
                let selected = board.tile(row, col).ok()?;
                let partners = board.partners(row, col).ok()?;
                // a partner survives if it has a layer the match will not clear
                let surviving: Vec<_> = partners
                    .iter()
                    .copied()
                    .filter(|&(r, c)| {
                        board.tile(r, c).is_ok_and(|t| {
                            t.layers()
                                .iter()
                                .zip(selected.layers())
                                .any(|(mine, theirs)| mine.is_some() && mine != theirs)
                        })
                    })
                    .collect();
                surviving
                    .choose(rng)
                    .or_else(|| partners.choose(rng))
                    .copied()
            }
            None => {
                let most = board
                    .tiles()
                    .iter()
                    .map(|t| t.remaining_layers())
                    .max()
                    .unwrap_or(0);
                let fullest: Vec<_> = board
                    .tiles()
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| !t.is_cleared() && t.remaining_layers() == most)
                    .map(|(p, _)| coords(p))
                    .collect();
                fullest.choose(rng).copied()
            }
        }
    }

    fn random_tile(rng: &mut SmallRng, engine: &GameEngine) -> Option<(usize, usize)> {
        let open: Vec<_> = engine
            .board()
            .tiles()
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.is_cleared())
            .map(|(p, _)| coords(p))
            .filter(|&rc| Some(rc) != engine.selection())
            .collect();
        open.choose(rng).copied()
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn select_tile(&mut self, rng: &mut SmallRng, engine: &GameEngine) -> Option<(usize, usize)> {
        if self.mistake_rate > 0.0 && rng.random_bool(self.mistake_rate) {
            if let Some(pick) = Self::random_tile(rng, engine) {
                return Some(pick);
            }
        }
        self.suggest(rng, engine)
    }
}
