//! Mailbox chess rules (legal moves, check detection) and a fixed-depth minimax /
//! alpha-beta search over a single in-place board.
//!
//! Castling, en passant and promotion are not modelled.

pub mod board;
pub mod error;
pub mod game;
pub mod perft;
pub mod rules;
pub mod search;
pub mod selfplay;
pub mod snapshot;
pub mod uci;

pub use board::{Board, Color, Move, Piece, PieceKind, Square};
pub use error::{Error, Result};
pub use game::{Game, GameStatus, MoveOutcome};
pub use search::{SearchParams, SearchResult, Searcher};
