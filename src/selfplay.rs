use crate::error::Result;
use crate::game::{Game, GameStatus};
use crate::search::SearchParams;
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    /// Search both sides; otherwise pick uniformly among legal moves.
    pub use_engine: bool,
    pub search: SearchParams,
    pub seed: u64,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 1, max_plies: 100, use_engine: false, search: SearchParams { depth: 2, ..SearchParams::default() }, seed: 42 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    pub result: i8, // 1 white win, 0 draw or unfinished, -1 black win
    pub termination: Termination,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    MaxPlies,
}

pub fn generate_games(params: &SelfPlayParams) -> Result<Vec<GameRecord>> {
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let games = (0..params.games).map(|_| play_game(params, &mut rng)).collect::<Result<Vec<_>>>()?;
    let mates = games.iter().filter(|g| g.termination == Termination::Checkmate).count();
    info!("self play: {} games, {} checkmates (seed {})", games.len(), mates, params.seed);
    Ok(games)
}

/// Play one game from the standard start.
pub fn play_game(params: &SelfPlayParams, rng: &mut SmallRng) -> Result<GameRecord> {
    let mut game = Game::new().with_params(params.search);
    let mut moves = Vec::new();
    loop {
        match game.status() {
            GameStatus::Checkmate { winner } => {
                return Ok(GameRecord { moves, result: winner.sign() as i8, termination: Termination::Checkmate });
            }
            GameStatus::Stalemate => return Ok(GameRecord { moves, result: 0, termination: Termination::Stalemate }),
            GameStatus::Ongoing => {}
        }
        if moves.len() >= params.max_plies {
            return Ok(GameRecord { moves, result: 0, termination: Termination::MaxPlies });
        }
        let choice = if params.use_engine {
            game.engine_move().bestmove
        } else {
            let legal = game.legal_moves();
            if legal.is_empty() { None } else { Some(legal[rng.gen_range(0..legal.len())]) }
        };
        let Some(mv) = choice else {
            return Ok(GameRecord { moves, result: 0, termination: Termination::Stalemate });
        };
        game.play(mv)?;
        moves.push(mv.to_string());
    }
}

/// Rebuild the game after the first `plies` moves of `record`.
pub fn replay(record: &GameRecord, plies: usize) -> Result<Game> {
    let mut game = Game::new();
    for m in record.moves.iter().take(plies) {
        game.play_uci(m)?;
    }
    Ok(game)
}

/// One JSON record per line.
pub fn write_jsonl<P: AsRef<Path>>(games: &[GameRecord], path: P) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<GameRecord>> {
    let rdr = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}
