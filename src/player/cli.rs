use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use crate::{
    common::{IgnoreReason, SelectOutcome},
    config::{NUM_COLS, NUM_ROWS},
    game::GameEngine,
    tile::Layer,
};

use super::{AiPlayer, Player};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Terminal player reading coordinates such as `B3` from a line source.
pub struct CliPlayer<R = io::StdinLock<'static>> {
    input: R,
    hints: AiPlayer,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self::with_input(io::stdin().lock())
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> CliPlayer<R> {
    pub fn with_input(input: R) -> Self {
        Self {
            input,
            hints: AiPlayer::new(),
        }
    }

    /// Next trimmed line, or `None` on EOF or a read error.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

/// Column letter then 1-based row, e.g. `(2, 1)` is `B3`.
pub fn coord_to_string(row: usize, col: usize) -> String {
    let letter = (b'A' + col as u8) as char;
    format!("{}{}", letter, row + 1)
}

/// Parse `B3` (column letter, 1-based row) into (row, col).
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or("No column letter")?
        .to_ascii_uppercase();
    let last_col = (b'A' + NUM_COLS as u8 - 1) as char;
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last_col));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= NUM_COLS {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last_col));
    }
    let row_str: String = chars.collect();
    if row_str.is_empty() {
        return Err("Too short - need column letter and row number (e.g., B3)".to_string());
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, NUM_ROWS))?;
    if row == 0 || row > NUM_ROWS {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, NUM_ROWS));
    }
    Ok((row - 1, col))
}

fn layer_cell(layer: &Layer) -> String {
    match layer {
        Some(c) => format!("\x1b[38;2;{};{};{}m██{}", c.r(), c.g(), c.b(), RESET),
        None => format!("{}··{}", DIM, RESET),
    }
}

/// Render the board, counters and info line as ANSI-colored text.
pub fn render_board(engine: &GameEngine) -> String {
    let mut out = String::new();
    out.push_str("     ");
    for col in 0..NUM_COLS {
        out.push_str(&format!("    {}     ", (b'A' + col as u8) as char));
    }
    out.push('\n');
    for row in 0..NUM_ROWS {
        out.push_str(&format!("  {:2} ", row + 1));
        for col in 0..NUM_COLS {
            let Ok(tile) = engine.board().tile(row, col) else {
                continue;
            };
            let (open, close) = if engine.selection() == Some((row, col)) {
                (format!("{}[{}", BOLD, RESET), format!("{}]{}", BOLD, RESET))
            } else {
                (" ".to_string(), " ".to_string())
            };
            out.push_str(&open);
            for layer in tile.layers() {
                out.push_str(&layer_cell(layer));
            }
            out.push_str(&close);
            out.push_str("  ");
        }
        out.push('\n');
    }
    out.push_str(&format!(
        "\n  {}{}{}\n  {}{}{}\n",
        BOLD,
        engine.current_chain_text(),
        RESET,
        BOLD,
        engine.max_chain_text(),
        RESET
    ));
    if !engine.info().is_empty() {
        out.push_str(&format!("  {}\n", engine.info()));
    }
    out
}

impl<R: BufRead> Player for CliPlayer<R> {
    fn select_tile(&mut self, rng: &mut SmallRng, engine: &GameEngine) -> Option<(usize, usize)> {
        let hint = self.hints.suggest(rng, engine);
        loop {
            println!("\n{}", render_board(engine));
            match hint {
                Some((r, c)) => print!(
                    "Select a tile [suggestion: {}] (or 'help', 'quit'): ",
                    coord_to_string(r, c)
                ),
                None => print!("Select a tile (or 'help', 'quit'): "),
            }
            let _ = io::stdout().flush();
            let line = self.read_line()?;

            if line.is_empty() {
                if let Some((r, c)) = hint {
                    println!("Using suggestion: {}", coord_to_string(r, c));
                    return Some((r, c));
                }
                continue;
            }
            if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
                return None;
            }
            if line.eq_ignore_ascii_case("help") {
                print_help();
                continue;
            }
            match parse_coord(&line) {
                Ok(coord) => return Some(coord),
                Err(e) => {
                    println!("✗ Invalid coordinate: {}", e);
                    println!("   Example: A1, B3, D5");
                }
            }
        }
    }

    fn handle_outcome(&mut self, coord: (usize, usize), outcome: SelectOutcome, engine: &GameEngine) {
        let at = coord_to_string(coord.0, coord.1);
        match outcome {
            SelectOutcome::Highlighted => println!("Selected {}", at),
            SelectOutcome::Matched { layers, chain, .. } => {
                println!("✓ {} matched {} layer(s)! Chain: {}", at, layers.count(), chain)
            }
            SelectOutcome::Mismatch => println!("✗ {}", engine.info()),
            SelectOutcome::Ignored(IgnoreReason::Cleared) => {
                println!("{} is already cleared, pick another tile", at)
            }
            SelectOutcome::Ignored(IgnoreReason::AlreadySelected) => {
                println!("{} is already selected", at)
            }
            SelectOutcome::Ignored(IgnoreReason::GameOver) => {}
        }
    }
}

fn print_help() {
    println!("\nEnter a tile as <COLUMN><ROW>, e.g. B3.");
    println!("  Columns: A-{}   Rows: 1-{}", (b'A' + NUM_COLS as u8 - 1) as char, NUM_ROWS);
    println!("  Two tiles match when any layer of the same size has the same color.");
    println!("  Matched layers disappear; keep matching from the last tile to grow the chain.");
    println!("  ENTER uses the suggestion, 'quit' leaves the game.\n");
}
