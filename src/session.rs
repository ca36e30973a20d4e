//! Drives a [`Player`] against a [`GameEngine`] until the game ends.

use log::{info, warn};
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::game::{GameEngine, GameStats, GameStatus};
use crate::player::Player;

/// How a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEnd {
    /// Every tile was cleared.
    Cleared,
    /// The player stopped choosing tiles.
    Quit,
    /// The click budget ran out first.
    OutOfClicks,
}

/// Serializable result of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub end: SessionEnd,
    pub status: GameStatus,
    pub max_chain: u32,
    pub current_chain: u32,
    pub remaining_tiles: usize,
    #[serde(flatten)]
    pub stats: GameStats,
}

impl GameSummary {
    pub fn from_engine(engine: &GameEngine, end: SessionEnd) -> Self {
        Self {
            end,
            status: engine.status(),
            max_chain: engine.max_chain(),
            current_chain: engine.current_chain(),
            remaining_tiles: engine.board().remaining_tiles(),
            stats: engine.stats(),
        }
    }
}

/// Let `player` click until the board is cleared, it quits, or `max_clicks`
/// clicks have been made.
pub fn run_game(
    player: &mut dyn Player,
    engine: &mut GameEngine,
    rng: &mut SmallRng,
    max_clicks: usize,
) -> anyhow::Result<GameSummary> {
    let mut clicks = 0;
    let end = loop {
        if engine.status() == GameStatus::Over {
            break SessionEnd::Cleared;
        }
        if clicks >= max_clicks {
            warn!("stopping after {} clicks", clicks);
            break SessionEnd::OutOfClicks;
        }
        let Some((row, col)) = player.select_tile(rng, engine) else {
            break SessionEnd::Quit;
        };
        clicks += 1;
        let outcome = engine
            .select(row, col)
            .map_err(|e| anyhow::anyhow!(e))?;
        player.handle_outcome((row, col), outcome, engine);
    };
    info!(
        "session ended ({:?}) after {} clicks, max chain {}",
        end,
        engine.stats().clicks,
        engine.max_chain()
    );
    Ok(GameSummary::from_engine(engine, end))
}
