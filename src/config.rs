pub const NUM_COLS: usize = 4;
pub const NUM_ROWS: usize = 5;
pub const NUM_TILES: usize = NUM_COLS * NUM_ROWS;
/// Layers per tile, largest first.
pub const NUM_LAYERS: usize = 3;

/// Fill colors, consumed in order. Only the first `NUM_TILES / 2` are dealt
/// on a standard board.
pub const PALETTE: [&str; 20] = [
    "d3d3d3", "2f4f4f", "8b4513", "BFFF00", "483d8b", "3cb371", "000080", "9acd32", "00ced1",
    "ff8c00", "ffd700", "00ff00", "8a2be2", "00ff7f", "dc143c", "00bfff", "1e90ff", "f0e68c",
    "ff1493", "ee82ee",
];

pub const WINDOW_TITLE: &str = "Matching Tiles Game";
pub const WINDOW_WIDTH: f32 = 560.0;
pub const WINDOW_HEIGHT: f32 = 832.0;

pub const TILE_SIZE: f32 = 125.0;
/// Each nested layer is this much smaller than the one beneath it.
pub const LAYER_STEP: f32 = 32.0;
pub const LAYER_STROKE: f32 = 2.8;
pub const HIGHLIGHT_STROKE: f32 = 8.0;
pub const GRID_PADDING: f32 = 20.0;
pub const GRID_GAP: f32 = 8.0;
pub const STATUS_SPACING: f32 = 10.0;
pub const STATUS_FONT_SIZE: f32 = 24.0;

pub const MSG_MISMATCH: &str = "Tiles do not match!";
pub const MSG_SELECT_ANY: &str = "Select any tile!";
pub const MSG_GAME_OVER: &str = "Game Over";
pub const DIALOG_TITLE: &str = "Game Over";
pub const DIALOG_TEXT: &str = "All tiles matched! Game Over!";

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "TILES_LOG";
