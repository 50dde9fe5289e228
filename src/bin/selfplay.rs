use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rookery::search::SearchParams;
use rookery::selfplay::{play_game, write_jsonl, SelfPlayParams, Termination};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rookery-selfplay", about = "Generate self-play games and write them as JSONL")]
struct Args {
    #[arg(long, default_value_t = 20)]
    games: usize,
    #[arg(long, default_value_t = 100)]
    max_plies: usize,
    #[arg(long, default_value_t = 2)]
    depth: u32,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
    /// Pick moves with the engine instead of at random
    #[arg(long, default_value_t = false)]
    use_engine: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        max_plies: a.max_plies,
        use_engine: a.use_engine,
        search: SearchParams { depth: a.depth.max(1), ..SearchParams::default() },
        seed: a.seed,
    };
    eprintln!("Generating {} games (depth={}, engine={}, seed={})", a.games, a.depth, a.use_engine, a.seed);

    let pb = ProgressBar::new(params.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games {msg}")?);
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let mut games = Vec::with_capacity(params.games);
    for _ in 0..params.games {
        games.push(play_game(&params, &mut rng)?);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let mates = games.iter().filter(|g| g.termination == Termination::Checkmate).count();
    if let Some(dir) = a.out.parent() { std::fs::create_dir_all(dir)?; }
    write_jsonl(&games, &a.out)?;
    eprintln!("Wrote {} games ({} checkmates) to {}", games.len(), mates, a.out.display());
    Ok(())
}
