use clap::{Parser, Subcommand};
use log::info;
use matching_tiles::prelude::*;
use matching_tiles::{render_board, SessionEnd};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Match stacked colored tiles", long_about = None)]
struct Cli {
    #[arg(long, global = true, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in a desktop window (default).
    Gui,
    /// Play in the terminal.
    Cli {
        #[arg(long, help = "Let the computer play instead of reading moves from stdin")]
        ai: bool,
        #[arg(long, default_value_t = 0.0, help = "Chance the computer clicks a random tile")]
        mistake_rate: f64,
        #[arg(long, default_value_t = 1000)]
        max_clicks: usize,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        info!("Using fixed seed: {} (board will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mut engine = GameEngine::random(&mut rng).map_err(|e| anyhow::anyhow!(e))?;

    match cli.command.unwrap_or(Commands::Gui) {
        Commands::Gui => run_gui(engine),
        Commands::Cli {
            ai,
            mistake_rate,
            max_clicks,
        } => {
            let mut player: Box<dyn Player> = if ai {
                Box::new(AiPlayer::with_mistake_rate(mistake_rate))
            } else {
                Box::new(CliPlayer::new())
            };
            let summary = run_game(player.as_mut(), &mut engine, &mut rng, max_clicks)?;
            println!("\n{}", render_board(&engine));
            match summary.end {
                SessionEnd::Cleared => {
                    println!("All tiles matched! Game Over!");
                    println!("Max chain: {}", summary.max_chain);
                }
                SessionEnd::Quit => println!("Game abandoned with {} tiles left.", summary.remaining_tiles),
                SessionEnd::OutOfClicks => println!("Click budget of {} used up.", max_clicks),
            }
            Ok(())
        }
    }
}

#[cfg(feature = "gui")]
fn run_gui(engine: GameEngine) -> anyhow::Result<()> {
    matching_tiles::gui::run(engine)
}

#[cfg(not(feature = "gui"))]
fn run_gui(_engine: GameEngine) -> anyhow::Result<()> {
    Err(anyhow::anyhow!(
        "built without the `gui` feature; use the `cli` subcommand"
    ))
}
