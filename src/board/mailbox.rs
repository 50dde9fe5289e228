use crate::board::piece::{Color, Piece, PieceKind};
use crate::board::square::Square;
use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A from/to pair. No promotion, castling or en-passant flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self { Self { from, to } }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = Error;

    /// Coordinate notation, `"e2e4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(Error::InvalidMove(s.to_string()));
        }
        let from = s[0..2].parse().map_err(|_| Error::InvalidMove(s.to_string()))?;
        let to = s[2..4].parse().map_err(|_| Error::InvalidMove(s.to_string()))?;
        Ok(Move::new(from, to))
    }
}

/// Undo record for exactly one `apply`. Not `Clone`: `revert` consumes it.
#[must_use = "a Ply must be handed back to Board::revert"]
#[derive(Debug, PartialEq, Eq)]
pub struct Ply {
    pub mv: Move,
    pub captured: Option<Piece>,
}

/// 8x8 mailbox, indexed by `Square::index`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn empty() -> Self { Self { squares: [None; 64] } }

    pub fn startpos() -> Self {
        let mut b = Self::empty();
        for col in 1..=8i8 {
            let kind = BACK_RANK[(col - 1) as usize];
            for (color, back, pawns) in [(Color::White, 1, 2), (Color::Black, 8, 7)] {
                b.put(back, col, Piece::new(color, kind));
                b.put(pawns, col, Piece::new(color, PieceKind::Pawn));
            }
        }
        b
    }

    fn put(&mut self, row: i8, col: i8, piece: Piece) {
        if let Some(sq) = Square::from_coords(row, col) { self.set(sq, Some(piece)); }
    }

    #[inline]
    pub fn occupant(&self, sq: Square) -> Option<Piece> { self.squares[sq.index()] }

    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) { self.squares[sq.index()] = piece; }

    /// Move whatever stands on `mv.from` onto `mv.to`, overwriting (and returning) the prior
    /// occupant. The board is untouched when `mv.from` is empty.
    pub fn try_apply(&mut self, mv: Move) -> Result<Ply, Error> {
        let piece = self.squares[mv.from.index()].take().ok_or(Error::EmptySquare(mv.from))?;
        let captured = self.squares[mv.to.index()].replace(piece);
        Ok(Ply { mv, captured })
    }

    /// Hot-path `try_apply`.
    ///
    /// # Panics
    /// When `mv.from` is empty. Moves come from occupied squares by construction, so an empty
    /// origin is a caller bug.
    #[inline]
    pub fn apply(&mut self, mv: Move) -> Ply {
        match self.try_apply(mv) {
            Ok(ply) => ply,
            Err(e) => panic!("Board::apply: {e}"),
        }
    }

    /// Exact inverse of the `apply` that produced `ply`.
    #[inline]
    pub fn revert(&mut self, ply: Ply) {
        let Ply { mv, captured } = ply;
        self.squares[mv.from.index()] = self.squares[mv.to.index()];
        self.squares[mv.to.index()] = captured;
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.occupant(sq).map(|p| (sq, p)))
    }

    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, p)| p.color == color)
    }

    /// First king of `color` in square order; `None` if it is gone.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        Square::all().find(|&sq| self.occupant(sq) == Some(king))
    }
}

impl Default for Board {
    fn default() -> Self { Self::startpos() }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.placement())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=8i8).rev() {
            write!(f, "{} ", row)?;
            for col in 1..=8i8 {
                let c = Square::from_coords(row, col).and_then(|sq| self.occupant(sq)).map_or('.', Piece::fen_char);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
