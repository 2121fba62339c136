use super::*;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn board_with(pieces: &[(&str, Color, PieceKind)]) -> Board {
    let mut b = Board::empty();
    for &(name, color, kind) in pieces {
        b.put(sq(name), Piece::new(color, kind));
    }
    b
}

#[test]
fn test_knight_attacks() {
    let b = board_with(&[("e4", Color::Black, PieceKind::Knight)]);
    for target in ["d6", "f6", "g5", "g3", "f2", "d2", "c3", "c5"] {
        assert!(is_square_attacked(&b, sq(target), Color::Black), "{target}");
    }
    assert!(!is_square_attacked(&b, sq("e5"), Color::Black));
    assert!(!is_square_attacked(&b, sq("f6"), Color::White));
}

#[test]
fn test_pawn_attacks_follow_direction() {
    let b = board_with(&[
        ("e4", Color::White, PieceKind::Pawn),
        ("d5", Color::Black, PieceKind::Pawn),
    ]);
    // White pawn on e4 hits d5 and f5, never backwards.
    assert!(is_square_attacked(&b, sq("f5"), Color::White));
    assert!(is_square_attacked(&b, sq("d5"), Color::White));
    assert!(!is_square_attacked(&b, sq("d3"), Color::White));
    assert!(!is_square_attacked(&b, sq("e5"), Color::White));
    // Black pawn on d5 hits c4 and e4.
    assert!(is_square_attacked(&b, sq("e4"), Color::Black));
    assert!(is_square_attacked(&b, sq("c4"), Color::Black));
    assert!(!is_square_attacked(&b, sq("c6"), Color::Black));
}

#[test]
fn test_rook_ray_stops_at_first_blocker() {
    let b = board_with(&[
        ("a1", Color::White, PieceKind::Rook),
        ("a4", Color::Black, PieceKind::Knight),
    ]);
    assert!(is_square_attacked(&b, sq("a3"), Color::White));
    assert!(is_square_attacked(&b, sq("a4"), Color::White));
    assert!(!is_square_attacked(&b, sq("a5"), Color::White));
    assert!(is_square_attacked(&b, sq("h1"), Color::White));
}

#[test]
fn test_rays_match_their_piece_kind() {
    // A rook on the diagonal and a bishop on the file attack nothing along
    // those lines.
    let b = board_with(&[
        ("e1", Color::White, PieceKind::King),
        ("h4", Color::Black, PieceKind::Rook),
        ("e8", Color::Black, PieceKind::Bishop),
        ("a8", Color::Black, PieceKind::King),
    ]);
    assert_eq!(is_king_attacked(&b, Color::White), Ok(false));

    let b = board_with(&[
        ("e1", Color::White, PieceKind::King),
        ("h4", Color::Black, PieceKind::Bishop),
        ("a8", Color::Black, PieceKind::King),
    ]);
    assert_eq!(is_king_attacked(&b, Color::White), Ok(true));

    let b = board_with(&[
        ("e1", Color::White, PieceKind::King),
        ("e7", Color::Black, PieceKind::Queen),
        ("a8", Color::Black, PieceKind::King),
    ]);
    assert_eq!(is_king_attacked(&b, Color::White), Ok(true));
}

#[test]
fn test_blocker_of_other_kind_shields() {
    // Black knight between the black rook and the white king blocks the file.
    let b = board_with(&[
        ("e1", Color::White, PieceKind::King),
        ("e4", Color::Black, PieceKind::Knight),
        ("e8", Color::Black, PieceKind::Rook),
        ("a8", Color::Black, PieceKind::King),
    ]);
    assert_eq!(is_king_attacked(&b, Color::White), Ok(false));

    // A friendly piece blocks as well.
    let b = board_with(&[
        ("e1", Color::White, PieceKind::King),
        ("e2", Color::White, PieceKind::Pawn),
        ("e8", Color::Black, PieceKind::Queen),
        ("a8", Color::Black, PieceKind::King),
    ]);
    assert_eq!(is_king_attacked(&b, Color::White), Ok(false));
}

#[test]
fn test_adjacent_kings_attack_each_other() {
    let b = board_with(&[
        ("e4", Color::White, PieceKind::King),
        ("e5", Color::Black, PieceKind::King),
    ]);
    assert_eq!(is_king_attacked(&b, Color::White), Ok(true));
    assert_eq!(is_king_attacked(&b, Color::Black), Ok(true));
}

#[test]
fn test_missing_king_is_an_error() {
    let b = board_with(&[("e8", Color::Black, PieceKind::King)]);
    assert!(matches!(
        is_king_attacked(&b, Color::White),
        Err(ChessError::InconsistentState(_))
    ));
}

#[test]
fn test_kind_set() {
    let set = KindSet::of(&Board::standard(), Color::White);
    for kind in PieceKind::ALL {
        assert!(set.contains(kind));
    }
    let set = KindSet::of(
        &board_with(&[("a1", Color::White, PieceKind::Rook)]),
        Color::White,
    );
    assert!(set.contains(PieceKind::Rook));
    assert!(!set.contains(PieceKind::Queen));
    assert!(!KindSet::of(&Board::empty(), Color::Black).contains(PieceKind::Pawn));
}
