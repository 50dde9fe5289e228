use crate::board::{parse_fen, to_fen, Board, Color, Move, Piece};
use crate::error::{Error, Result};
use crate::rules::{in_check, is_legal, legal_moves};
use crate::search::{SearchParams, SearchResult, Searcher};
use crate::snapshot::BoardState;
use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool { self != GameStatus::Ongoing }
}

/// What a successful move did, reported back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    pub captured: Option<Piece>,
    /// Side to move after the move.
    pub side_to_move: Color,
    /// Whether that side is now in check.
    pub in_check: bool,
    pub status: GameStatus,
}

/// A board, whose turn it is, and which side the engine plays.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    engine_color: Color,
    params: SearchParams,
}

impl Default for Game {
    fn default() -> Self { Self::new() }
}

impl Game {
    /// Standard start, White to move, engine playing Black.
    pub fn new() -> Self { Self::from_position(Board::startpos(), Color::White) }

    pub fn from_position(board: Board, side_to_move: Color) -> Self {
        Self { board, side_to_move, engine_color: Color::Black, params: SearchParams::default() }
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        let (board, side) = parse_fen(fen)?;
        Ok(Self::from_position(board, side))
    }

    pub fn from_snapshot(state: &BoardState) -> Result<Self> {
        let (board, side) = state.to_board()?;
        Ok(Self::from_position(board, side))
    }

    pub fn with_params(mut self, params: SearchParams) -> Self { self.params = params; self }

    pub fn with_engine_color(mut self, color: Color) -> Self { self.engine_color = color; self }

    pub fn board(&self) -> &Board { &self.board }

    pub fn side_to_move(&self) -> Color { self.side_to_move }

    pub fn engine_color(&self) -> Color { self.engine_color }

    pub fn params(&self) -> &SearchParams { &self.params }

    pub fn set_params(&mut self, params: SearchParams) { self.params = params; }

    pub fn fen(&self) -> String { to_fen(&self.board, self.side_to_move) }

    pub fn snapshot(&self) -> BoardState { BoardState::from_board(&self.board, self.side_to_move) }

    pub fn in_check(&self) -> bool { in_check(&self.board, self.side_to_move) }

    pub fn legal_moves(&mut self) -> Vec<Move> { legal_moves(&mut self.board, self.side_to_move) }

    pub fn status(&mut self) -> GameStatus {
        if !self.legal_moves().is_empty() { return GameStatus::Ongoing; }
        if self.in_check() { GameStatus::Checkmate { winner: !self.side_to_move } } else { GameStatus::Stalemate }
    }

    /// Play `mv` for the side to move. On rejection the board is not touched.
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome> {
        let mover = self.side_to_move;
        match self.board.occupant(mv.from) {
            None => return Err(Error::IllegalMove { mv, reason: "no piece on the origin square" }),
            Some(p) if p.color != mover => return Err(Error::IllegalMove { mv, reason: "piece belongs to the other side" }),
            Some(_) => {}
        }
        if !is_legal(&mut self.board, mover, mv) {
            return Err(Error::IllegalMove { mv, reason: "not a legal move in this position" });
        }
        let undo = self.board.try_apply(mv)?;
        self.side_to_move = !mover;
        debug!("{} played {}", mover, mv);
        Ok(MoveOutcome {
            mv,
            captured: undo.captured,
            side_to_move: self.side_to_move,
            in_check: self.in_check(),
            status: self.status(),
        })
    }

    /// `play` from coordinate text such as `"e2e4"`.
    pub fn play_uci(&mut self, text: &str) -> Result<MoveOutcome> {
        self.play(text.parse()?)
    }

    /// Engine's choice for the side to move, board left as it was.
    pub fn engine_move(&mut self) -> SearchResult {
        let mut searcher = Searcher::new(self.params);
        searcher.best_move(&mut self.board, self.side_to_move)
    }

    /// Search and play for the engine. `Ok(None)` means the engine has no legal move.
    pub fn play_engine_move(&mut self) -> Result<Option<MoveOutcome>> {
        if self.side_to_move != self.engine_color { return Err(Error::NotEngineTurn); }
        match self.engine_move().bestmove {
            Some(mv) => self.play(mv).map(Some),
            None => Ok(None),
        }
    }
}
