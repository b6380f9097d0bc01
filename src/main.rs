#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use lights_out::{
    init_logging, run_session, BoardConfig, BoardEngine, GameStatus, DEFAULT_CHANCE_LIGHT_STARTS_ON,
    DEFAULT_COLS, DEFAULT_ROWS,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Play Lights Out in the terminal. Enter a cell as <row>-<col> (e.g. 2-3) to
/// flip it and its neighbors; `reset` deals a new board, `quit` exits.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,
    #[arg(long, default_value_t = DEFAULT_CHANCE_LIGHT_STARTS_ON, help = "Chance each light starts on, 0 to 1")]
    chance: f64,
    #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (board will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let config = BoardConfig::new(cli.rows, cli.cols, cli.chance);
    let mut engine = BoardEngine::new(config, &mut rng)?;
    log::info!("starting {}x{} board", cli.rows, cli.cols);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let status = run_session(&mut engine, &mut rng, stdin.lock(), stdout.lock())?;
    if status == GameStatus::Playing {
        println!("Bye.");
    }
    Ok(())
}
