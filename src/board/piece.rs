use crate::error::Error;
use std::fmt;
use std::ops::Not;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Rank step of this side's pawns: White moves toward rank 8.
    #[inline]
    pub fn forward(self) -> i8 {
        match self { Color::White => 1, Color::Black => -1 }
    }

    /// Rank where this side's pawns start and may double-step from.
    #[inline]
    pub fn pawn_rank(self) -> i8 {
        match self { Color::White => 2, Color::Black => 7 }
    }

    /// Evaluation sign: White is the maximizing side.
    #[inline]
    pub fn sign(self) -> i32 {
        match self { Color::White => 1, Color::Black => -1 }
    }

    pub fn code(self) -> char {
        match self { Color::White => 'w', Color::Black => 'b' }
    }

    pub fn from_code(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        match self { Color::White => Color::Black, Color::Black => Color::White }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self { Color::White => write!(f, "White"), Color::Black => write!(f, "Black") }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "w" | "white" => Ok(Color::White),
            "b" | "black" => Ok(Color::Black),
            _ => Err(Error::InvalidColor(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    pub fn code(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_code(c: char) -> Option<PieceKind> {
        ALL_KINDS.iter().copied().find(|k| k.code() == c)
    }
}

/// A colored piece. Two bytes; text codes like `"wp"` exist only at the I/O edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self { Self { color, kind } }

    /// FEN letter: uppercase for White.
    pub fn fen_char(self) -> char {
        let c = self.kind.code();
        if self.color == Color::White { c.to_ascii_uppercase() } else { c }
    }

    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_code(c.to_ascii_lowercase())?;
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Piece::new(color, kind))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.code(), self.kind.code())
    }
}

impl FromStr for Piece {
    type Err = Error;

    /// Two-character code: color then kind, e.g. `"wn"`, `"bq"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let parsed = match (chars.next(), chars.next(), chars.next()) {
            (Some(c), Some(k), None) => Color::from_code(c).zip(PieceKind::from_code(k)),
            _ => None,
        };
        parsed.map(|(color, kind)| Piece::new(color, kind)).ok_or_else(|| Error::InvalidPiece(s.to_string()))
    }
}
