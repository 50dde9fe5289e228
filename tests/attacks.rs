use rookery::board::parse_fen;
use rookery::rules::{in_check, is_attacked};
use rookery::{Color, Square};

fn sq(s: &str) -> Square { s.parse().unwrap() }

#[test]
fn rook_on_same_rank_attacks_until_interposed() {
    let (b, _) = parse_fen("8/8/8/8/K6r/8/8/8 w").unwrap();
    assert!(is_attacked(&b, sq("a4"), Color::Black));
    assert!(in_check(&b, Color::White));

    let (b, _) = parse_fen("8/8/8/8/K2N3r/8/8/8 w").unwrap();
    assert!(!is_attacked(&b, sq("a4"), Color::Black));
    assert!(!in_check(&b, Color::White));
}

#[test]
fn enemy_piece_on_ray_also_blocks() {
    // A black pawn between the rook and the target shields it from its own rook.
    let (b, _) = parse_fen("8/8/8/8/K2p3r/8/8/8 w").unwrap();
    assert!(!is_attacked(&b, sq("a4"), Color::Black));
    assert!(is_attacked(&b, sq("e4"), Color::Black));
}

#[test]
fn bishop_diagonal_but_not_orthogonal() {
    let (b, _) = parse_fen("8/8/8/8/3b4/8/8/8 w").unwrap();
    assert!(is_attacked(&b, sq("a1"), Color::Black));
    assert!(is_attacked(&b, sq("g7"), Color::Black));
    assert!(!is_attacked(&b, sq("d1"), Color::Black));
    assert!(!is_attacked(&b, sq("a4"), Color::Black));
}

#[test]
fn knight_and_king_offsets() {
    let (b, _) = parse_fen("8/8/8/8/3n4/8/8/6K1 w").unwrap();
    for s in ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"] {
        assert!(is_attacked(&b, sq(s), Color::Black), "knight should hit {s}");
    }
    assert!(!is_attacked(&b, sq("d5"), Color::Black));
    for s in ["f1", "h1", "f2", "g2", "h2"] {
        assert!(is_attacked(&b, sq(s), Color::White), "king should hit {s}");
    }
    assert!(!is_attacked(&b, sq("g3"), Color::White));
}

#[test]
fn pawn_attacks_depend_on_color() {
    let (b, _) = parse_fen("8/8/8/8/4P3/8/8/8 w").unwrap();
    assert!(is_attacked(&b, sq("d5"), Color::White));
    assert!(is_attacked(&b, sq("f5"), Color::White));
    assert!(!is_attacked(&b, sq("e5"), Color::White));
    assert!(!is_attacked(&b, sq("d3"), Color::White));
    assert!(!is_attacked(&b, sq("d5"), Color::Black));
}

#[test]
fn attacks_ignore_side_to_move() {
    let (white_to_move, _) = parse_fen("4k3/8/8/8/8/8/8/4R2K w").unwrap();
    let (black_to_move, _) = parse_fen("4k3/8/8/8/8/8/8/4R2K b").unwrap();
    assert!(in_check(&white_to_move, Color::Black));
    assert!(in_check(&black_to_move, Color::Black));
}
