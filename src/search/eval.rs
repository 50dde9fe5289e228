use crate::board::{Board, PieceKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

// Mate scoring helpers, used only when the search is asked to tell mate from stalemate.
pub const MATE_SCORE: i32 = 1_000_000;
pub const DRAW_SCORE: i32 = 0;

/// Centipawn value per piece kind. The king's value is large so that a fixed-depth search
/// never trades it away; it is not a mate detector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceValues {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
    pub king: i32,
}

impl Default for PieceValues {
    fn default() -> Self {
        Self { pawn: 100, knight: 320, bishop: 330, rook: 500, queen: 900, king: 20_000 }
    }
}

impl PieceValues {
    #[inline]
    pub fn value(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => self.king,
        }
    }

    /// Read a JSON table such as `{"queen": 950}`; missing kinds keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Material-only evaluation: positive means White is ahead.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator {
    values: PieceValues,
}

impl Evaluator {
    pub fn new(values: PieceValues) -> Self { Self { values } }

    pub fn values(&self) -> &PieceValues { &self.values }

    pub fn evaluate(&self, board: &Board) -> i32 {
        board.occupied().map(|(_, p)| p.color.sign() * self.values.value(p.kind)).sum()
    }
}

/// Default-valued material score from White's point of view.
pub fn material_eval_cp(board: &Board) -> i32 {
    Evaluator::default().evaluate(board)
}
