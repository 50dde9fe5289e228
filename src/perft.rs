use crate::board::{Board, Color, Move};
use crate::rules::legal_moves;

// Leaf count of the legal move tree, using apply/revert (no cloning)
pub fn perft(board: &mut Board, color: Color, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let moves = legal_moves(board, color);
    if depth == 1 { return moves.len() as u64; }
    let mut nodes = 0u64;
    for mv in moves {
        let undo = board.apply(mv);
        nodes += perft(board, !color, depth - 1);
        board.revert(undo);
    }
    nodes
}

/// Per-root-move leaf counts, in generation order.
pub fn perft_divide(board: &mut Board, color: Color, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 { return Vec::new(); }
    let moves = legal_moves(board, color);
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        let undo = board.apply(mv);
        out.push((mv, perft(board, !color, depth - 1)));
        board.revert(undo);
    }
    out
}
