mod common;

use std::io::Cursor;

use common::pair_board;
use matching_tiles::{
    coord_to_string, parse_coord, render_board, run_game, CliPlayer, GameEngine, SessionEnd,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_parse_coord() {
    assert_eq!(parse_coord("A1"), Ok((0, 0)));
    assert_eq!(parse_coord("b3"), Ok((2, 1)));
    assert_eq!(parse_coord(" D5 "), Ok((4, 3)));
    assert!(parse_coord("").is_err());
    assert!(parse_coord("A").is_err());
    assert!(parse_coord("E1").is_err());
    assert!(parse_coord("A0").is_err());
    assert!(parse_coord("A6").is_err());
    assert!(parse_coord("1A").is_err());
    assert!(parse_coord("Ax").is_err());
}

#[test]
fn test_coord_string_roundtrip() {
    for row in 0..5 {
        for col in 0..4 {
            assert_eq!(parse_coord(&coord_to_string(row, col)), Ok((row, col)));
        }
    }
}

#[test]
fn test_scripted_cli_session() {
    let mut rng = SmallRng::seed_from_u64(12345);
    let mut engine = GameEngine::new(pair_board());
    // bad input is re-prompted, then one pair is matched before quitting
    let script = "help\nZ9\nA1\nA2\nquit\n";
    let mut player = CliPlayer::with_input(Cursor::new(script));
    let summary = run_game(&mut player, &mut engine, &mut rng, 50).unwrap();
    assert_eq!(summary.end, SessionEnd::Quit);
    assert_eq!(summary.stats.clicks, 2);
    assert_eq!(summary.stats.matches, 1);
    assert_eq!(summary.remaining_tiles, 18);
}

#[test]
fn test_empty_line_takes_suggestion_and_eof_quits() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut engine = GameEngine::new(pair_board());
    let mut player = CliPlayer::with_input(Cursor::new("\n\n"));
    let summary = run_game(&mut player, &mut engine, &mut rng, 50).unwrap();
    assert_eq!(summary.end, SessionEnd::Quit);
    assert_eq!(summary.stats.matches, 1);
    assert_eq!(summary.stats.mismatches, 0);
}

#[test]
fn test_render_board_shows_counters_and_selection() {
    let mut engine = GameEngine::new(pair_board());
    assert!(!render_board(&engine).contains("\x1b[1m["));
    engine.select(0, 0).unwrap();
    engine.select(2, 0).unwrap();
    engine.select(1, 1).unwrap();
    let text = render_board(&engine);
    assert!(text.contains("\x1b[1m["));
    assert!(text.contains("Current Chain: 0"));
    assert!(text.contains("Max Chain: 0"));
    assert!(!text.contains("Tiles do not match!"));
}
