use std::io::{self, BufRead, Write};
use crate::game::Game;
use crate::search::SearchParams;
use log::{info, warn};

pub struct UciEngine {
    game: Game,
    params: SearchParams,
}

impl Default for UciEngine {
    fn default() -> Self { Self::new(SearchParams::default()) }
}

impl UciEngine {
    pub fn new(params: SearchParams) -> Self { Self { game: Game::new().with_params(params), params } }

    pub fn game(&self) -> &Game { &self.game }

    fn cmd_uci(&self) -> Vec<String> {
        vec![
            "id name Rookery".to_string(),
            "id author Rookery Team".to_string(),
            format!("option name Depth type spin default {} min 1 max 16", self.params.depth),
            "uciok".to_string(),
        ]
    }

    fn cmd_ucinewgame(&mut self) {
        info!("new game, depth {}", self.params.depth);
        self.game = Game::new().with_params(self.params);
    }

    fn cmd_position(&mut self, args: &str) {
        // Supports: 'position startpos [moves ...]' and 'position fen <fen> [moves ...]'
        let mut tokens = args.split_whitespace().peekable();
        let base = match tokens.next() {
            Some("startpos") => Game::new(),
            Some("fen") => {
                let mut fen_fields: Vec<&str> = Vec::new();
                while let Some(&t) = tokens.peek() {
                    if t == "moves" { break; }
                    fen_fields.push(t);
                    tokens.next();
                }
                match Game::from_fen(&fen_fields.join(" ")) {
                    Ok(g) => g,
                    Err(e) => { warn!("ignoring position: {e}"); return; }
                }
            }
            _ => { warn!("ignoring position: {args}"); return; }
        };
        let mut game = base.with_params(self.params);
        if let Some("moves") = tokens.next() {
            for m in tokens {
                if let Err(e) = game.play_uci(m) { warn!("ignoring position: {e}"); return; }
            }
        }
        self.game = game;
    }

    fn cmd_go(&mut self, args: &str) -> Vec<String> {
        // Minimal: go [depth N]; everything else searches at the configured depth
        let mut params = self.params;
        let mut tokens = args.split_whitespace();
        while let Some(tok) = tokens.next() {
            if tok == "depth" {
                if let Some(d) = tokens.next().and_then(|s| s.parse::<u32>().ok()) { params.depth = d.max(1); }
            }
        }
        self.game.set_params(params);
        let res = self.game.engine_move();
        self.game.set_params(self.params);
        let mut out = vec![format!("info depth {} score cp {} nodes {}", params.depth, res.score_cp, res.nodes)];
        match res.bestmove {
            Some(best) => out.push(format!("bestmove {}", best)),
            None => out.push("bestmove 0000".to_string()),
        }
        out
    }

    /// Process one command line and return what the engine prints. `None` means quit.
    pub fn handle_line(&mut self, line: &str) -> Option<Vec<String>> {
        let line = line.trim();
        let out = match line {
            "" => Vec::new(),
            "uci" => self.cmd_uci(),
            "isready" => vec!["readyok".to_string()],
            "ucinewgame" => { self.cmd_ucinewgame(); Vec::new() }
            "quit" => return None,
            "d" => vec![self.game.board().to_string(), format!("Fen: {}", self.game.fen())],
            "go" => self.cmd_go(""),
            _ => {
                if let Some(rest) = line.strip_prefix("position ") { self.cmd_position(rest); Vec::new() }
                else if let Some(rest) = line.strip_prefix("go ") { self.cmd_go(rest) }
                else { warn!("unknown command: {line}"); Vec::new() }
            }
        };
        Some(out)
    }

    pub fn run_loop(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        for line in stdin.lock().lines() {
            let line = line?;
            match self.handle_line(&line) {
                Some(out) => {
                    for l in out { writeln!(stdout, "{}", l)?; }
                    stdout.flush()?;
                }
                None => break,
            }
        }
        Ok(())
    }
}
