use rookery::snapshot::BoardState;
use rookery::{Board, Color, Game, Piece, PieceKind, Square};

fn sq(s: &str) -> Square { s.parse().unwrap() }

#[test]
fn startpos_survives_json() {
    let state = BoardState::from_board(&Board::startpos(), Color::White);
    assert_eq!(state.board_state.len(), 64);
    assert_eq!(state.board_state["e1"].as_deref(), Some("wk"));
    assert_eq!(state.board_state["e4"], None);
    let json = state.to_json().unwrap();
    assert!(json.contains("\"boardState\""));
    assert!(json.contains("\"currentPlayer\":\"w\""));
    let back = BoardState::from_json(&json).unwrap();
    let (board, side) = back.to_board().unwrap();
    assert_eq!(board, Board::startpos());
    assert_eq!(side, Color::White);
}

#[test]
fn sparse_map_reads_missing_squares_as_empty() {
    let json = r#"{"boardState":{"e1":"wk","e8":"bk","d1":"wq","a7":null},"currentPlayer":"b"}"#;
    let (board, side) = BoardState::from_json(json).unwrap().to_board().unwrap();
    assert_eq!(side, Color::Black);
    assert_eq!(board.occupied().count(), 3);
    assert_eq!(board.occupant(sq("d1")), Some(Piece::new(Color::White, PieceKind::Queen)));
    assert_eq!(board.occupant(sq("a7")), None);
}

#[test]
fn bad_entries_are_rejected() {
    for json in [
        r#"{"boardState":{"i1":"wk"},"currentPlayer":"w"}"#,
        r#"{"boardState":{"e1":"wx"},"currentPlayer":"w"}"#,
        r#"{"boardState":{"e1":"gk"},"currentPlayer":"w"}"#,
        r#"{"boardState":{"e1":"wk"},"currentPlayer":"red"}"#,
    ] {
        let state = BoardState::from_json(json).unwrap();
        assert!(state.to_board().is_err(), "{json}");
    }
    assert!(BoardState::from_json(r#"{"boardState":{}}"#).is_err());
}

#[test]
fn game_round_trips_through_snapshot() {
    let mut g = Game::new();
    g.play_uci("d2d4").unwrap();
    let restored = Game::from_snapshot(&g.snapshot()).unwrap();
    assert_eq!(restored.fen(), g.fen());
}
