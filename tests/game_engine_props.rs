use matching_tiles::{
    AiPlayer, Board, GameEngine, GameStatus, Player, SelectOutcome, NUM_COLS, NUM_LAYERS,
    NUM_ROWS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn layers_stay_paired(engine: &GameEngine) -> bool {
    (0..NUM_LAYERS).all(|layer| {
        engine
            .board()
            .color_counts(layer)
            .values()
            .all(|&n| n == 2)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every layer of a dealt board holds ten colors, each exactly twice.
    #[test]
    fn dealt_boards_are_paired(seed in any::<u64>()) {
        let board = Board::random(&mut SmallRng::seed_from_u64(seed)).unwrap();
        for layer in 0..NUM_LAYERS {
            let counts = board.color_counts(layer);
            prop_assert_eq!(counts.len(), 10);
            prop_assert!(counts.values().all(|&n| n == 2));
        }
    }

    /// Random clicking never breaks the pairing or the counter ordering.
    #[test]
    fn random_clicks_keep_invariants(seed in any::<u64>(), clicks in 1usize..200) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::random(&mut rng).unwrap();
        for _ in 0..clicks {
            let row = rng.random_range(0..NUM_ROWS);
            let col = rng.random_range(0..NUM_COLS);
            let before = engine.board().remaining_tiles();
            let outcome = engine.select(row, col).unwrap();
            prop_assert!(engine.max_chain() >= engine.current_chain());
            prop_assert!(layers_stay_paired(&engine));
            prop_assert!(engine.board().remaining_tiles() <= before);
            if outcome == SelectOutcome::Mismatch {
                prop_assert_eq!(engine.current_chain(), 0);
                prop_assert_eq!(engine.selection(), None);
            }
            if let Some((r, c)) = engine.selection() {
                prop_assert!(!engine.board().tile(r, c).unwrap().is_cleared());
            }
        }
    }

    /// A player that always clicks a partner clears any board without a mismatch.
    #[test]
    fn every_board_is_completable(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::random(&mut rng).unwrap();
        let mut ai = AiPlayer::new();
        let mut clicks = 0;
        while engine.status() == GameStatus::InProgress {
            let (r, c) = ai.select_tile(&mut rng, &engine).unwrap();
            let outcome = engine.select(r, c).unwrap();
            prop_assert_ne!(outcome, SelectOutcome::Mismatch);
            clicks += 1;
            prop_assert!(clicks <= 60, "too many clicks");
        }
        let stats = engine.stats();
        prop_assert_eq!(stats.mismatches, 0);
        prop_assert_eq!(engine.current_chain(), engine.max_chain());
        prop_assert_eq!(engine.max_chain(), stats.matches);
    }
}
