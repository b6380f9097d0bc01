use lights_out::{BoardConfig, BoardEngine};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <seed> [<row>-<col> ...]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = BoardEngine::new(BoardConfig::default(), &mut rng)?;

    let mut rejected = Vec::new();
    for key in &args[2..] {
        if let Err(e) = engine.flip_key(key) {
            rejected.push(json!({"key": key, "error": e.to_string()}));
        }
    }

    let grid = engine.grid();
    let result = json!({
        "rows": grid.rows(),
        "cols": grid.cols(),
        "board": grid.to_rows(),
        "lit": grid.lit_count(),
        "won": engine.is_won(),
        "rejected": rejected,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
