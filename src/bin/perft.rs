use anyhow::Result;
use clap::Parser;
use rayon::prelude::*;
use rookery::board::{parse_fen, Board, Color, STARTPOS_FEN};
use rookery::perft::{perft, perft_divide};
use rookery::rules::legal_moves;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Perft driver for Rookery")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// FEN string or "startpos"
    #[arg(value_name = "FEN", default_value = "startpos")]
    fen: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
    /// Print leaf counts per root move
    #[arg(long, default_value_t = false)]
    divide: bool,
}

fn root_split(base: &Board, side: Color, depth: u32) -> u64 {
    let mut b = base.clone();
    let root_moves = legal_moves(&mut b, side);
    root_moves.par_iter().map(|&mv| {
        let mut b = base.clone();
        let _ = b.apply(mv);
        perft(&mut b, !side, depth - 1)
    }).sum()
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let fen = if args.fen == "startpos" { STARTPOS_FEN } else { args.fen.as_str() };
    let (mut base, side) = parse_fen(fen)?;

    if args.divide {
        let mut total = 0u64;
        for (mv, n) in perft_divide(&mut base, side, args.depth) {
            println!("{mv}: {n}");
            total += n;
        }
        println!("\nnodes: {total}");
        return Ok(());
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let (nodes, dt) = pool.install(|| {
        let t0 = Instant::now();
        let nodes = if args.threads <= 1 || args.depth == 0 {
            perft(&mut base.clone(), side, args.depth)
        } else {
            root_split(&base, side, args.depth)
        };
        (nodes, t0.elapsed().as_secs_f64())
    });

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
