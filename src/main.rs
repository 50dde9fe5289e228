use anyhow::{Context, Result};
use clap::Parser;
use rookery::search::PieceValues;
use rookery::{Color, Game, GameStatus, Move, SearchParams};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess against the minimax engine", long_about = None)]
struct Args {
    /// Operation mode: 'h' for human vs engine, 's' for engine self play
    #[arg(long, default_value = "h")]
    mode: String,

    /// Your color: 'w' for white, 'b' for black
    #[arg(long, default_value = "w")]
    color: String,

    /// Search depth in plies
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Plain minimax instead of alpha-beta
    #[arg(long)]
    no_pruning: bool,

    /// Score checkmate and stalemate instead of counting material
    #[arg(long)]
    mate_aware: bool,

    /// Root-split threads
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// JSON file with piece values
    #[arg(long)]
    values: Option<PathBuf>,

    /// Stop self play after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Print search statistics
    #[arg(long)]
    verbose: bool,

    /// Starting FEN position
    #[arg(long)]
    fen: Option<String>,
}

fn get_human_move(game: &mut Game) -> Result<Move> {
    let legal_moves = game.legal_moves();
    loop {
        print!("Enter your move (e.g., e2e4): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            anyhow::bail!("input closed");
        }
        match input.trim().parse::<Move>() {
            Ok(mv) if legal_moves.contains(&mv) => return Ok(mv),
            Ok(_) => println!("Illegal move!"),
            Err(_) => println!("Invalid move format! Use format like 'e2e4'"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mode = args.mode.chars().next().unwrap_or('h');
    let human_color: Color = args.color.parse()?;
    let values = match &args.values {
        Some(p) => PieceValues::load(p).with_context(|| format!("reading piece values from {}", p.display()))?,
        None => PieceValues::default(),
    };
    let params = SearchParams {
        depth: args.depth.max(1),
        use_pruning: !args.no_pruning,
        mate_aware: args.mate_aware,
        threads: args.threads.max(1),
        values,
    };
    if params.threads > 1 {
        rayon::ThreadPoolBuilder::new().num_threads(params.threads).build_global()?;
    }

    let game = match &args.fen {
        Some(fen) => Game::from_fen(fen)?,
        None => Game::new(),
    };
    let mut game = game.with_params(params).with_engine_color(!human_color);

    let mut plies = 0usize;
    loop {
        match game.status() {
            GameStatus::Checkmate { winner } => { println!("\n{}\nCheckmate! {} wins!", game.board(), winner); break; }
            GameStatus::Stalemate => { println!("\n{}\nGame is a stalemate!", game.board()); break; }
            GameStatus::Ongoing => {}
        }
        if mode == 's' && plies >= args.max_plies {
            println!("\nStopping after {} plies", plies);
            break;
        }

        println!("\n{}'s turn{}", game.side_to_move(), if game.in_check() { " (check)" } else { "" });
        println!("{}", game.board());

        let is_human_turn = mode == 'h' && game.side_to_move() == human_color;
        if is_human_turn {
            let mv = get_human_move(&mut game)?;
            game.play(mv)?;
        } else {
            if args.verbose { println!("Thinking..."); }
            let start_time = Instant::now();
            let res = game.engine_move();
            let elapsed = start_time.elapsed();
            if args.verbose {
                let nps = res.nodes as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
                println!("score_cp: {}, nodes: {}, elapsed: {:.2}s, NPS: {:.0}", res.score_cp, res.nodes, elapsed.as_secs_f64(), nps);
            }
            match res.bestmove {
                Some(mv) => {
                    println!("Computer plays: {}", mv);
                    game.play(mv)?;
                }
                None => { println!("No legal moves available!"); break; }
            }
        }
        plies += 1;
    }

    Ok(())
}
