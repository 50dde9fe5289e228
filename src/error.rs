use crate::board::{Move, Square};
use thiserror::Error;

/// Everything the engine can reject. None of these are fatal; callers get the board back
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid square identifier: {0:?}")]
    InvalidSquare(String),

    #[error("invalid piece code: {0:?}")]
    InvalidPiece(String),

    #[error("invalid color: {0:?} (use 'w' or 'b')")]
    InvalidColor(String),

    #[error("invalid move text: {0:?}")]
    InvalidMove(String),

    #[error("invalid FEN string: {0}")]
    InvalidFen(String),

    #[error("no piece on {0} to move")]
    EmptySquare(Square),

    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: &'static str },

    #[error("it is not the engine's turn")]
    NotEngineTurn,
}

pub type Result<T> = std::result::Result<T, Error>;
