use crate::board::{Board, Color, Move};
use crate::rules::{in_check, legal_moves};
use crate::search::eval::{Evaluator, PieceValues, DRAW_SCORE, MATE_SCORE};
use log::debug;
use rayon::prelude::*;

const INF: i32 = i32::MAX;

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    pub depth: u32,
    /// Alpha-beta cut-offs. Same move and score as plain minimax, fewer nodes.
    pub use_pruning: bool,
    /// Score positions without legal moves as mate or stalemate instead of by material.
    pub mate_aware: bool,
    /// Root split across rayon workers, one cloned board per root move.
    pub threads: usize,
    pub values: PieceValues,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { depth: 3, use_pruning: true, mate_aware: false, threads: 1, values: PieceValues::default() }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub bestmove: Option<Move>,
    /// White-positive centipawns.
    pub score_cp: i32,
    pub nodes: u64,
}

/// Depth-first minimax over one board, mutated in place and restored after every child.
/// White maximizes, Black minimizes.
pub struct Searcher {
    params: SearchParams,
    eval: Evaluator,
    pub(crate) nodes: u64,
}

impl Default for Searcher {
    fn default() -> Self { Self::new(SearchParams::default()) }
}

#[inline]
fn side_of(maximizing: bool) -> Color {
    if maximizing { Color::White } else { Color::Black }
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        Self { params, eval: Evaluator::new(params.values), nodes: 0 }
    }

    pub fn params(&self) -> &SearchParams { &self.params }

    pub fn evaluator(&self) -> &Evaluator { &self.eval }

    pub fn nodes(&self) -> u64 { self.nodes }

    /// Score of `board` with the side implied by `maximizing` to move, searched `depth` plies.
    /// Uses alpha-beta or plain minimax according to the params.
    pub fn search(&mut self, board: &mut Board, depth: u32, maximizing: bool) -> i32 {
        if self.params.use_pruning {
            self.alphabeta_at(board, depth, -INF, INF, maximizing, 0)
        } else {
            self.minimax_at(board, depth, maximizing, 0)
        }
    }

    pub fn minimax(&mut self, board: &mut Board, depth: u32, maximizing: bool) -> i32 {
        self.minimax_at(board, depth, maximizing, 0)
    }

    pub fn alphabeta(&mut self, board: &mut Board, depth: u32, alpha: i32, beta: i32, maximizing: bool) -> i32 {
        self.alphabeta_at(board, depth, alpha, beta, maximizing, 0)
    }

    fn minimax_at(&mut self, board: &mut Board, depth: u32, maximizing: bool, ply: i32) -> i32 {
        self.nodes += 1;
        if depth == 0 { return self.eval.evaluate(board); }
        let side = side_of(maximizing);
        let moves = legal_moves(board, side);
        if moves.is_empty() { return self.eval_terminal(board, side, ply); }

        let mut best = if maximizing { -INF } else { INF };
        for mv in moves {
            let undo = board.apply(mv);
            let score = self.minimax_at(board, depth - 1, !maximizing, ply + 1);
            board.revert(undo);
            best = if maximizing { best.max(score) } else { best.min(score) };
        }
        best
    }

    fn alphabeta_at(&mut self, board: &mut Board, depth: u32, mut alpha: i32, mut beta: i32, maximizing: bool, ply: i32) -> i32 {
        self.nodes += 1;
        if depth == 0 { return self.eval.evaluate(board); }
        let side = side_of(maximizing);
        let moves = legal_moves(board, side);
        if moves.is_empty() { return self.eval_terminal(board, side, ply); }

        let mut best = if maximizing { -INF } else { INF };
        for mv in moves {
            let undo = board.apply(mv);
            let score = self.alphabeta_at(board, depth - 1, alpha, beta, !maximizing, ply + 1);
            board.revert(undo);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if alpha >= beta { break; }
        }
        best
    }

    // Side to move has no legal moves.
    fn eval_terminal(&self, board: &Board, side: Color, ply: i32) -> i32 {
        if !self.params.mate_aware { return self.eval.evaluate(board); }
        if in_check(board, side) { -side.sign() * (MATE_SCORE - ply) } else { DRAW_SCORE }
    }

    fn child_score(&mut self, board: &mut Board, depth: u32, alpha: i32, beta: i32, maximizing: bool) -> i32 {
        if self.params.use_pruning {
            self.alphabeta_at(board, depth, alpha, beta, maximizing, 1)
        } else {
            self.minimax_at(board, depth, maximizing, 1)
        }
    }

    /// Best move for `color` at the configured depth. The root ply is unrolled so the move,
    /// not just the score, is kept; ties go to the first move in generation order.
    pub fn best_move(&mut self, board: &mut Board, color: Color) -> SearchResult {
        self.nodes = 0;
        let depth = self.params.depth.max(1);
        let maximizing = color == Color::White;
        let moves = legal_moves(board, color);
        if moves.is_empty() {
            return SearchResult { bestmove: None, score_cp: self.eval_terminal(board, color, 0), nodes: self.nodes };
        }
        if self.params.threads > 1 && depth > 1 {
            return self.best_move_parallel(board, color, &moves, depth);
        }

        let (mut alpha, mut beta) = (-INF, INF);
        let mut best: Option<(Move, i32)> = None;
        for mv in moves {
            let undo = board.apply(mv);
            let score = self.child_score(board, depth - 1, alpha, beta, !maximizing);
            board.revert(undo);
            if best.map_or(true, |(_, b)| improves(maximizing, score, b)) { best = Some((mv, score)); }
            if maximizing { alpha = alpha.max(score); } else { beta = beta.min(score); }
        }
        self.finish(best, depth)
    }

    fn best_move_parallel(&mut self, board: &Board, color: Color, moves: &[Move], depth: u32) -> SearchResult {
        let maximizing = color == Color::White;
        let params = SearchParams { threads: 1, ..self.params };
        let results: Vec<(Move, i32, u64)> = moves.par_iter().map(|&mv| {
            let mut child = board.clone();
            // The branch board is thrown away afterwards, so the undo record is not needed.
            let _ = child.apply(mv);
            let mut w = Searcher::new(params);
            let score = w.child_score(&mut child, depth - 1, -INF, INF, !maximizing);
            (mv, score, w.nodes)
        }).collect();

        let mut best: Option<(Move, i32)> = None;
        for (mv, score, nodes) in results {
            self.nodes += nodes;
            if best.map_or(true, |(_, b)| improves(maximizing, score, b)) { best = Some((mv, score)); }
        }
        self.finish(best, depth)
    }

    fn finish(&self, best: Option<(Move, i32)>, depth: u32) -> SearchResult {
        let (bestmove, score_cp) = match best {
            Some((mv, score)) => (Some(mv), score),
            None => (None, 0),
        };
        if let Some(mv) = bestmove {
            debug!("best move {} score_cp {} depth {} nodes {}", mv, score_cp, depth, self.nodes);
        }
        SearchResult { bestmove, score_cp, nodes: self.nodes }
    }

    pub fn search_with_params(&mut self, board: &mut Board, color: Color, params: SearchParams) -> SearchResult {
        self.params = params;
        self.eval = Evaluator::new(params.values);
        self.best_move(board, color)
    }
}

#[inline]
fn improves(maximizing: bool, score: i32, best: i32) -> bool {
    if maximizing { score > best } else { score < best }
}
