use rookery::board::parse_fen;
use rookery::search::eval::{material_eval_cp, Evaluator, PieceValues, MATE_SCORE};
use rookery::search::{SearchParams, Searcher};
use rookery::{Board, Color};

fn params(depth: u32) -> SearchParams {
    let mut p = SearchParams::default();
    p.depth = depth;
    p
}

#[test]
fn eval_material_startpos_is_zero() {
    assert_eq!(material_eval_cp(&Board::startpos()), 0);
}

#[test]
fn eval_material_known_advantage() {
    // White: Kh1, Qe2; Black: Ka8, Qd2. Material equal.
    let (b, _) = parse_fen("k7/8/8/8/8/8/3qQ3/7K w").unwrap();
    assert_eq!(material_eval_cp(&b), 0);
    // Extra white rook, extra black pawn.
    let (b, _) = parse_fen("k7/p7/8/8/8/8/8/R6K w").unwrap();
    assert_eq!(material_eval_cp(&b), 400);
}

#[test]
fn evaluator_uses_configured_values() {
    let values = PieceValues { queen: 1000, ..PieceValues::default() };
    let (b, _) = parse_fen("k7/8/8/8/8/8/4Q3/7K w").unwrap();
    assert_eq!(Evaluator::new(values).evaluate(&b), 1000);
    assert_eq!(Evaluator::default().evaluate(&b), 900);
}

#[test]
fn search_returns_legal_move_startpos() {
    let mut b = Board::startpos();
    let mut searcher = Searcher::new(params(1));
    let res = searcher.best_move(&mut b, Color::White);
    let bm = res.bestmove.expect("no move found at depth 1");
    assert!(b.legal_moves(Color::White).contains(&bm));
    assert_eq!(b, Board::startpos(), "search must restore the board");
    assert!(res.nodes > 0);
}

#[test]
fn search_prefers_winning_queen_capture() {
    // Qe2xd2 wins a queen at depth 1.
    let (mut b, side) = parse_fen("k7/8/8/8/8/8/3qQ3/7K w").unwrap();
    let res = Searcher::new(params(1)).best_move(&mut b, side);
    assert_eq!(res.bestmove.map(|m| m.to_string()).as_deref(), Some("e2d2"));
    assert_eq!(res.score_cp, 900);
}

#[test]
fn black_prefers_winning_capture_too() {
    let (mut b, side) = parse_fen("k7/8/8/8/8/8/3qQ3/7K b").unwrap();
    let res = Searcher::new(params(1)).best_move(&mut b, side);
    assert_eq!(res.bestmove.map(|m| m.to_string()).as_deref(), Some("d2e2"));
    assert_eq!(res.score_cp, -900);
}

#[test]
fn search_saves_the_only_safe_square() {
    // Knight a1 is attacked by Be5; c2 is covered by Be4; only Nb3 keeps it.
    // Every other move drops the knight, Nb3 drops at most a pawn.
    let (mut b, side) = parse_fen("7k/6pp/8/4b3/4b3/8/6PP/N6K w").unwrap();
    for depth in [2, 3] {
        let res = Searcher::new(params(depth)).best_move(&mut b, side);
        assert_eq!(res.bestmove.map(|m| m.to_string()).as_deref(), Some("a1b3"), "depth {depth}");
    }
}

#[test]
fn attacked_knight_needs_a_reply_ply_to_be_seen() {
    // Pawn e5 hits Nd4. At depth 1 nothing is lost yet, so the first move in order wins.
    let (mut b, side) = parse_fen("7k/8/8/4p3/3N4/8/8/K7 w").unwrap();
    let shallow = Searcher::new(params(1)).best_move(&mut b, side);
    assert_eq!(shallow.bestmove.map(|m| m.to_string()).as_deref(), Some("a1a2"));
    let res = Searcher::new(params(2)).best_move(&mut b, side);
    assert_eq!(res.bestmove.map(|m| m.to_string()).as_deref(), Some("d4e6"));
    assert_eq!(res.score_cp, 220);
}

#[test]
fn no_legal_moves_gives_no_best_move() {
    // Stalemate: Black king a8 boxed in by the queen on b6.
    let (mut b, side) = parse_fen("k7/8/1Q6/8/8/8/8/7K b").unwrap();
    let res = Searcher::new(params(3)).best_move(&mut b, side);
    assert_eq!(res.bestmove, None);
    assert_eq!(res.score_cp, material_eval_cp(&b));

    let mut p = params(3);
    p.mate_aware = true;
    let res = Searcher::new(p).best_move(&mut b, side);
    assert_eq!(res.bestmove, None);
    assert_eq!(res.score_cp, 0, "stalemate is a draw when mate-aware");
}

#[test]
fn mate_aware_search_finds_mate_in_one() {
    // 1.f3 e5 2.g4 and Black mates with Qh4.
    let (mut b, side) = parse_fen("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b").unwrap();
    let mut p = params(2);
    p.mate_aware = true;
    for use_pruning in [true, false] {
        p.use_pruning = use_pruning;
        let res = Searcher::new(p).best_move(&mut b, side);
        assert_eq!(res.bestmove.map(|m| m.to_string()).as_deref(), Some("d8h4"));
        assert_eq!(res.score_cp, -(MATE_SCORE - 1));
    }
}

#[test]
fn depth_zero_is_treated_as_one() {
    let (mut b, side) = parse_fen("k7/8/8/8/8/8/3qQ3/7K w").unwrap();
    let res = Searcher::new(params(0)).best_move(&mut b, side);
    assert_eq!(res.bestmove.map(|m| m.to_string()).as_deref(), Some("e2d2"));
}

#[test]
fn search_value_matches_root_score() {
    // Scoring the position directly agrees with the unrolled root ply.
    let (mut b, side) = parse_fen("7k/6pp/8/4b3/4b3/8/6PP/N6K w").unwrap();
    let mut s = Searcher::new(params(2));
    let root = s.best_move(&mut b, side).score_cp;
    assert_eq!(s.search(&mut b, 2, true), root);
    assert_eq!(s.minimax(&mut b, 2, true), root);
}
