use crate::board::{Board, Color, Move, PieceKind, Square};
use crate::rules::attacks::in_check;
use crate::rules::{DIAGONAL, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL};

const QUEEN_DIRS: [(i8, i8); 8] = [(1, 0), (-1, 0), (0, 1), (0, -1), (1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Destination is fine if empty or held by the other side.
#[inline]
fn admissible(board: &Board, to: Square, color: Color) -> bool {
    board.occupant(to).map_or(true, |p| p.color != color)
}

/// Moves obeying piece movement and capture rules, ignoring self-check. Ordered by origin
/// square (a1..h8), then by generation order within a piece.
pub fn pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for (from, piece) in board.pieces(color) {
        match piece.kind {
            PieceKind::Pawn => pawn_moves(board, from, color, &mut moves),
            PieceKind::Knight => step_moves(board, from, color, &KNIGHT_OFFSETS, &mut moves),
            PieceKind::Bishop => slide_moves(board, from, color, &DIAGONAL, &mut moves),
            PieceKind::Rook => slide_moves(board, from, color, &ORTHOGONAL, &mut moves),
            PieceKind::Queen => slide_moves(board, from, color, &QUEEN_DIRS, &mut moves),
            PieceKind::King => step_moves(board, from, color, &KING_OFFSETS, &mut moves),
        }
    }
    moves
}

fn pawn_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Move>) {
    let dir = color.forward();
    if let Some(one) = from.offset(dir, 0) {
        if board.occupant(one).is_none() {
            out.push(Move::new(from, one));
            if from.row() == color.pawn_rank() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.occupant(two).is_none() { out.push(Move::new(from, two)); }
                }
            }
        }
    }
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            if board.occupant(to).map_or(false, |p| p.color != color) { out.push(Move::new(from, to)); }
        }
    }
}

fn step_moves(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            if admissible(board, to, color) { out.push(Move::new(from, to)); }
        }
    }
}

fn slide_moves(board: &Board, from: Square, color: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match board.occupant(to) {
                None => out.push(Move::new(from, to)),
                Some(p) => {
                    if p.color != color { out.push(Move::new(from, to)); }
                    break;
                }
            }
            cur = to.offset(dr, dc);
        }
    }
}

/// Pseudo-legal moves that do not leave `color`'s king attacked. Each candidate is played
/// on `board`, checked, and reverted, so the board is unchanged on return.
pub fn legal_moves(board: &mut Board, color: Color) -> Vec<Move> {
    let mut moves = pseudo_legal_moves(board, color);
    moves.retain(|&mv| !leaves_in_check(board, color, mv));
    moves
}

/// Single-move version of `legal_moves`, for validating externally supplied moves.
pub fn is_legal(board: &mut Board, color: Color, mv: Move) -> bool {
    pseudo_legal_moves(board, color).contains(&mv) && !leaves_in_check(board, color, mv)
}

fn leaves_in_check(board: &mut Board, color: Color, mv: Move) -> bool {
    let ply = board.apply(mv);
    let checked = in_check(board, color);
    board.revert(ply);
    checked
}
