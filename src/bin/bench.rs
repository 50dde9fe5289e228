use anyhow::Result;
use clap::Parser;
use rookery::board::{parse_fen, STARTPOS_FEN};
use rookery::search::{PieceValues, SearchParams, Searcher};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "rookery-bench", version, about = "Benchmark Rookery search NPS")]
struct Args {
    /// FEN string or 'startpos'
    #[arg(long, default_value = "startpos")]
    fen: String,

    /// Threads
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Fixed search depth
    #[arg(long, default_value_t = 4)]
    depth: u32,

    /// Plain minimax instead of alpha-beta
    #[arg(long, default_value_t = false)]
    no_pruning: bool,

    /// JSON file with piece values
    #[arg(long)]
    values: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let fen = if args.fen == "startpos" { STARTPOS_FEN } else { args.fen.as_str() };
    let (mut board, side) = parse_fen(fen)?;

    let mut p = SearchParams::default();
    p.depth = args.depth.max(1); p.use_pruning = !args.no_pruning; p.threads = args.threads.max(1);
    if let Some(path) = &args.values { p.values = PieceValues::load(path)?; }
    let mut s = Searcher::new(p);

    let t0 = Instant::now();
    // Ensure Rayon uses requested threads
    let res = if args.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads).build()?;
        pool.install(|| s.best_move(&mut board, side))
    } else {
        s.best_move(&mut board, side)
    };
    let dt = t0.elapsed();
    let nps = if dt.as_secs_f64() > 0.0 { res.nodes as f64 / dt.as_secs_f64() } else { 0.0 };
    let best = res.bestmove.map_or_else(|| "(none)".to_string(), |m| m.to_string());
    println!("bestmove={} score_cp={} nodes={} elapsed={:.3}s nps={:.1}", best, res.score_cp, res.nodes, dt.as_secs_f64(), nps);
    Ok(())
}
