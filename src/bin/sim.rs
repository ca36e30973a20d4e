use matching_tiles::{init_logging, run_game, AiPlayer, GameEngine};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [mistake-rate]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mistake_rate: f64 = match args.get(2) {
        Some(r) => r.parse()?,
        None => 0.0,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::random(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let mut player = AiPlayer::with_mistake_rate(mistake_rate);
    let summary = run_game(&mut player, &mut engine, &mut rng, 10_000)?;

    let result = json!({
        "seed": seed,
        "mistake_rate": player.mistake_rate(),
        "summary": summary,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
