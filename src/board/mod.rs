pub mod fen;
pub mod mailbox;
pub mod piece;
pub mod square;

pub use fen::{parse_fen, to_fen, STARTPOS_FEN};
pub use mailbox::{Board, Move, Ply};
pub use piece::{Color, Piece, PieceKind, ALL_KINDS};
pub use square::{coords_to_square, square_to_coords, Square};
