use rookery::uci::UciEngine;
use rookery::Color;

#[test]
fn apply_startpos_moves_sequence() {
    let mut e = UciEngine::default();
    e.handle_line("position startpos moves e2e4 e7e5 g1f3").unwrap();
    assert_eq!(e.game().side_to_move(), Color::Black, "expected black to move after 3 plies");
    assert_eq!(e.game().fen(), "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b - - 0 1");
}

#[test]
fn handshake_replies() {
    let mut e = UciEngine::default();
    let out = e.handle_line("uci").unwrap();
    assert_eq!(out.first().map(String::as_str), Some("id name Rookery"));
    assert_eq!(out.last().map(String::as_str), Some("uciok"));
    assert_eq!(e.handle_line("isready").unwrap(), vec!["readyok".to_string()]);
    assert!(e.handle_line("").unwrap().is_empty());
    assert!(e.handle_line("quit").is_none());
}

#[test]
fn go_depth_reports_bestmove() {
    let mut e = UciEngine::default();
    e.handle_line("position fen 7k/8/8/3q4/8/8/8/K2Q4 w - - 0 1").unwrap();
    let out = e.handle_line("go depth 1").unwrap();
    assert!(out[0].starts_with("info depth 1 score cp "), "{:?}", out);
    assert_eq!(out.last().map(String::as_str), Some("bestmove d1d5"));
}

#[test]
fn go_without_moves_prints_null_move() {
    let mut e = UciEngine::default();
    e.handle_line("position fen k7/8/1Q6/8/8/8/8/7K b - - 0 1").unwrap();
    let out = e.handle_line("go depth 2").unwrap();
    assert_eq!(out.last().map(String::as_str), Some("bestmove 0000"));
}

#[test]
fn bad_position_is_ignored() {
    let mut e = UciEngine::default();
    e.handle_line("position startpos moves e2e4").unwrap();
    let before = e.game().fen();
    e.handle_line("position startpos moves e2e4 e2e4").unwrap();
    assert_eq!(e.game().fen(), before);
    e.handle_line("position fen not/a/fen w").unwrap();
    assert_eq!(e.game().fen(), before);
    e.handle_line("ucinewgame").unwrap();
    assert_eq!(e.game().side_to_move(), Color::White);
}
