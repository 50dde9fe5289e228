//! Transport form of a position: square id -> piece code, plus whose turn it is.
//!
//! ```json
//! {"boardState": {"e1": "wk", "e2": null, "e8": "bk"}, "currentPlayer": "w"}
//! ```

use crate::board::{Board, Color, Piece, Square};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub board_state: BTreeMap<String, Option<String>>,
    pub current_player: String,
}

impl BoardState {
    /// Writes all 64 squares; empty ones as `null`.
    pub fn from_board(board: &Board, side_to_move: Color) -> Self {
        let board_state = Square::all()
            .map(|sq| (sq.to_string(), board.occupant(sq).map(|p| p.to_string())))
            .collect();
        Self { board_state, current_player: side_to_move.code().to_string() }
    }

    /// Squares that are absent from the map are read as empty.
    pub fn to_board(&self) -> Result<(Board, Color), Error> {
        let mut board = Board::empty();
        for (key, code) in &self.board_state {
            let sq: Square = key.parse()?;
            let piece = code.as_deref().map(str::parse::<Piece>).transpose()?;
            board.set(sq, piece);
        }
        let side = self.current_player.parse()?;
        Ok((board, side))
    }

    pub fn to_json(&self) -> serde_json::Result<String> { serde_json::to_string(self) }

    pub fn from_json(text: &str) -> serde_json::Result<Self> { serde_json::from_str(text) }
}
