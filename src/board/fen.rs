use crate::board::mailbox::Board;
use crate::board::piece::{Color, Piece};
use crate::board::square::Square;
use crate::error::Error;

pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

impl Board {
    /// FEN piece-placement field.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in (1..=8i8).rev() {
            let mut gap = 0;
            for col in 1..=8i8 {
                match Square::from_coords(row, col).and_then(|sq| self.occupant(sq)) {
                    Some(p) => {
                        if gap > 0 { out.push_str(&gap.to_string()); gap = 0; }
                        out.push(p.fen_char());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 { out.push_str(&gap.to_string()); }
            if row > 1 { out.push('/'); }
        }
        out
    }

    pub fn from_placement(field: &str) -> Result<Board, Error> {
        let bad = || Error::InvalidFen(field.to_string());
        let rows: Vec<&str> = field.split('/').collect();
        if rows.len() != 8 { return Err(bad()); }
        let mut board = Board::empty();
        for (i, text) in rows.iter().enumerate() {
            let row = 8 - i as i8;
            let mut col = 1i8;
            for c in text.chars() {
                if let Some(d) = c.to_digit(10) {
                    if !(1..=8).contains(&d) { return Err(bad()); }
                    col += d as i8;
                } else {
                    let piece = Piece::from_fen_char(c).ok_or_else(bad)?;
                    let sq = Square::from_coords(row, col).ok_or_else(bad)?;
                    board.set(sq, Some(piece));
                    col += 1;
                }
                if col > 9 { return Err(bad()); }
            }
            if col != 9 { return Err(bad()); }
        }
        Ok(board)
    }
}

/// Reads placement and side to move. Castling, en-passant and clock fields are accepted
/// but ignored since those rules are not modelled.
pub fn parse_fen(fen: &str) -> Result<(Board, Color), Error> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().ok_or_else(|| Error::InvalidFen(fen.to_string()))?;
    let board = Board::from_placement(placement).map_err(|_| Error::InvalidFen(fen.to_string()))?;
    let side = match fields.next() {
        None => Color::White,
        Some(tok) => tok.parse().map_err(|_| Error::InvalidFen(fen.to_string()))?,
    };
    Ok((board, side))
}

pub fn to_fen(board: &Board, side_to_move: Color) -> String {
    format!("{} {} - - 0 1", board.placement(), side_to_move.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_fen_matches_startpos() {
        let (b, side) = parse_fen(STARTPOS_FEN).unwrap();
        assert_eq!(b, Board::startpos());
        assert_eq!(side, Color::White);
        assert_eq!(to_fen(&b, side), STARTPOS_FEN);
    }

    #[test]
    fn castling_and_ep_fields_ignored() {
        let (_, side) = parse_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 2").unwrap();
        assert_eq!(side, Color::Black);
    }

    #[test]
    fn malformed_fen_rejected() {
        for bad in ["", "8/8/8/8/8/8/8 w", "9/8/8/8/8/8/8/8 w", "8/8/8/8/8/8/8/7X w", "8/8/8/8/8/8/8/ppppppppp w", "8/8/8/8/8/8/8/8 x"] {
            assert!(parse_fen(bad).is_err(), "{bad:?} should be rejected");
        }
    }
}
