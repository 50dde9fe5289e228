use crate::board::{Board, Color, Piece, PieceKind, Square};
use crate::rules::{DIAGONAL, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL};

/// True iff any piece of `by` attacks `target`, whoever is to move.
///
/// Scans outward from `target`: rays for sliders (first occupant either matches or blocks),
/// then knight, pawn and king offsets.
pub fn is_attacked(board: &Board, target: Square, by: Color) -> bool {
    ray_hit(board, target, by, &ORTHOGONAL, PieceKind::Rook)
        || ray_hit(board, target, by, &DIAGONAL, PieceKind::Bishop)
        || offset_hit(board, target, &KNIGHT_OFFSETS, Piece::new(by, PieceKind::Knight))
        || pawn_hit(board, target, by)
        || offset_hit(board, target, &KING_OFFSETS, Piece::new(by, PieceKind::King))
}

/// Is `color`'s king attacked? A missing king counts as not in check.
pub fn in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(k) => is_attacked(board, k, !color),
        None => false,
    }
}

fn ray_hit(board: &Board, target: Square, by: Color, dirs: &[(i8, i8)], slider: PieceKind) -> bool {
    for &(dr, dc) in dirs {
        let mut cur = target.offset(dr, dc);
        while let Some(sq) = cur {
            if let Some(p) = board.occupant(sq) {
                if p.color == by && (p.kind == slider || p.kind == PieceKind::Queen) { return true; }
                break;
            }
            cur = sq.offset(dr, dc);
        }
    }
    false
}

fn offset_hit(board: &Board, target: Square, offsets: &[(i8, i8)], attacker: Piece) -> bool {
    offsets.iter().filter_map(|&(dr, dc)| target.offset(dr, dc)).any(|sq| board.occupant(sq) == Some(attacker))
}

// A pawn of `by` captures onto target from one rank behind it (toward `by`'s side).
fn pawn_hit(board: &Board, target: Square, by: Color) -> bool {
    let back = -by.forward();
    offset_hit(board, target, &[(back, -1), (back, 1)], Piece::new(by, PieceKind::Pawn))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(placement: &str) -> Board { Board::from_placement(placement).unwrap() }
    fn sq(s: &str) -> Square { s.parse().unwrap() }

    #[test]
    fn pawns_attack_forward_diagonals_only() {
        let b = board("8/8/8/8/3P4/8/8/8");
        assert!(is_attacked(&b, sq("c5"), Color::White));
        assert!(is_attacked(&b, sq("e5"), Color::White));
        assert!(!is_attacked(&b, sq("d5"), Color::White));
        assert!(!is_attacked(&b, sq("c3"), Color::White));

        let b = board("8/8/8/3p4/8/8/8/8");
        assert!(is_attacked(&b, sq("e4"), Color::Black));
        assert!(!is_attacked(&b, sq("e6"), Color::Black));
    }

    #[test]
    fn queen_uses_both_ray_sets_and_stops_at_blockers() {
        let b = board("8/8/8/8/3q4/8/1N6/8");
        assert!(is_attacked(&b, sq("d1"), Color::Black));
        assert!(is_attacked(&b, sq("h8"), Color::Black));
        assert!(is_attacked(&b, sq("b2"), Color::Black));
        assert!(!is_attacked(&b, sq("a1"), Color::Black));
    }

    #[test]
    fn wrong_kind_on_ray_blocks() {
        // A bishop does not attack along a file; it also shields the king from the rook.
        let b = board("4r3/8/8/4b3/8/8/8/4K3");
        assert!(!is_attacked(&b, sq("e1"), Color::Black));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let b = board("8/8/8/8/8/8/8/r7");
        assert!(!in_check(&b, Color::White));
    }
}
