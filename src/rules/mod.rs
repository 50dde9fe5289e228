pub mod attacks;
pub mod movegen;

pub use attacks::{in_check, is_attacked};
pub use movegen::{is_legal, legal_moves, pseudo_legal_moves};

use crate::board::{Board, Color, Move, Square};

pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [(2, 1), (2, -1), (-2, 1), (-2, -1), (1, 2), (1, -2), (-1, 2), (-1, -2)];
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [(1, 0), (-1, 0), (0, 1), (0, -1), (1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    pub fn is_attacked(&self, target: Square, by: Color) -> bool { is_attacked(self, target, by) }

    pub fn in_check(&self, color: Color) -> bool { in_check(self, color) }

    /// Legal moves for `color`. Takes `&mut self` for the apply/revert probe; the board is
    /// unchanged on return.
    pub fn legal_moves(&mut self, color: Color) -> Vec<Move> { legal_moves(self, color) }
}
