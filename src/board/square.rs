use crate::error::Error;
use std::fmt;
use std::str::FromStr;

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// One of the 64 squares. Index 0 is a1, 7 is h1, 63 is h8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Build from `(row, col)`, both 1-based: row is the rank, col the file (`a` = 1).
    /// Anything off the board gives `None`; every stepping and sliding loop stops on it.
    #[inline]
    pub fn from_coords(row: i8, col: i8) -> Option<Square> {
        if (1..=8).contains(&row) && (1..=8).contains(&col) {
            Some(Square(((row - 1) * 8 + (col - 1)) as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn from_index(i: usize) -> Option<Square> {
        if i < 64 { Some(Square(i as u8)) } else { None }
    }

    #[inline]
    pub fn index(self) -> usize { self.0 as usize }

    /// `(row, col)`, both in 1..=8.
    #[inline]
    pub fn coords(self) -> (i8, i8) { (self.row(), self.col()) }

    #[inline]
    pub fn row(self) -> i8 { (self.0 / 8) as i8 + 1 }

    #[inline]
    pub fn col(self) -> i8 { (self.0 % 8) as i8 + 1 }

    /// The square `dr` ranks and `dc` files away, if it is still on the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::from_coords(self.row() + dr, self.col() + dc)
    }

    /// All squares, a1 first, rank by rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", FILES[(self.col() - 1) as usize], self.row())
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(Error::InvalidSquare(s.to_string()));
        };
        let col = FILES.iter().position(|&c| c == file).map(|i| i as i8 + 1);
        let row = rank.to_digit(10).map(|d| d as i8);
        match (row, col) {
            (Some(row), Some(col)) => Square::from_coords(row, col).ok_or_else(|| Error::InvalidSquare(s.to_string())),
            _ => Err(Error::InvalidSquare(s.to_string())),
        }
    }
}

/// `"a1"` -> `(1, 1)`. Malformed or off-board identifiers are an error, never `(0, 0)`.
pub fn square_to_coords(square: &str) -> Result<(i8, i8), Error> {
    square.parse::<Square>().map(Square::coords)
}

/// `(1, 1)` -> `a1`; `None` when either coordinate leaves 1..=8.
pub fn coords_to_square(row: i8, col: i8) -> Option<Square> {
    Square::from_coords(row, col)
}
