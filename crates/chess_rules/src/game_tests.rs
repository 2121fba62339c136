use super::*;
use crate::notation::play_coord_moves;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn piece(color: Color, kind: PieceKind) -> Option<Piece> {
    Some(Piece::new(color, kind))
}

#[test]
fn new_game_is_standard_regardless_of_perspective() {
    for color in [Color::White, Color::Black] {
        let state = new_game(color);
        assert_eq!(state.board(), &Board::standard());
        assert_eq!(state.side_to_move(), Color::White);
        assert_eq!(state.castling(), CastlingRights::all());
        assert_eq!(state.en_passant(), None);
        assert_eq!(state.perspective(), color);
    }
}

#[test]
fn apply_pawn_double_push_matches_expected_board() {
    let mut state = new_game(Color::White);
    let applied = apply_move(&mut state, Move::new(sq("e2"), sq("e4"))).unwrap();
    assert_eq!(applied.kind, MoveKind::DoublePush);

    let mut expected = Board::standard();
    expected.set(sq("e2"), None);
    expected.put(sq("e4"), Piece::new(Color::White, PieceKind::Pawn));
    assert_eq!(state.board(), &expected);
    assert_eq!(state.en_passant(), Some(sq("e3")));
    assert_eq!(state.side_to_move(), Color::Black);
    assert_eq!(state.castling(), CastlingRights::all());
    assert_eq!(state.halfmove_clock(), 0);
    assert_eq!(state.fullmove_number(), 1);
}

#[test]
fn en_passant_target_clears_after_one_move() {
    let mut state = new_game(Color::White);
    play_coord_moves(&mut state, &["e2e4", "g8f6"]).unwrap();
    assert_eq!(state.en_passant(), None);
    assert_eq!(state.fullmove_number(), 2);
    assert_eq!(state.halfmove_clock(), 1);
}

#[test]
fn en_passant_capture_removes_the_passed_pawn() {
    let mut state = new_game(Color::White);
    play_coord_moves(&mut state, &["e2e4", "a7a6", "e4e5", "d7d5"]).unwrap();
    assert_eq!(state.en_passant(), Some(sq("d6")));

    let before = *state.board();
    let applied = apply_move(&mut state, Move::new(sq("e5"), sq("d6"))).unwrap();
    assert_eq!(
        applied.kind,
        MoveKind::EnPassant {
            captured: sq("d5")
        }
    );

    let mut expected = before;
    expected.set(sq("e5"), None);
    expected.set(sq("d5"), None);
    expected.put(sq("d6"), Piece::new(Color::White, PieceKind::Pawn));
    assert_eq!(state.board(), &expected);
    assert_eq!(state.en_passant(), None);
}

#[test]
fn castling_moves_king_and_rook_and_drops_rights() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10").unwrap();
    let applied = apply_move(&mut state, Move::new(sq("e1"), sq("g1"))).unwrap();
    assert!(applied.is_castle());

    let b = state.board();
    assert_eq!(b.get(sq("g1")), piece(Color::White, PieceKind::King));
    assert_eq!(b.get(sq("f1")), piece(Color::White, PieceKind::Rook));
    assert_eq!(b.get(sq("e1")), None);
    assert_eq!(b.get(sq("h1")), None);
    assert_eq!(b.get(sq("a1")), piece(Color::White, PieceKind::Rook));

    let rights = state.castling();
    assert!(!rights.any(Color::White));
    assert!(rights.has(Color::Black, CastleSide::KingSide));
    assert!(rights.has(Color::Black, CastleSide::QueenSide));
    assert_eq!(state.halfmove_clock(), 4);
}

#[test]
fn rook_moves_and_captures_revoke_their_wing() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    // Rook a1 takes rook a8: white loses the queen side by moving, black by
    // losing the rook.
    apply_move(&mut state, Move::new(sq("a1"), sq("a8"))).unwrap();
    let rights = state.castling();
    assert!(!rights.has(Color::White, CastleSide::QueenSide));
    assert!(rights.has(Color::White, CastleSide::KingSide));
    assert!(!rights.has(Color::Black, CastleSide::QueenSide));
    assert!(rights.has(Color::Black, CastleSide::KingSide));
    assert_eq!(state.halfmove_clock(), 0);
}

#[test]
fn rights_stay_revoked_when_pieces_return() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    play_coord_moves(&mut state, &["h1h2", "h8h7", "h2h1", "h7h8"]).unwrap();
    let rights = state.castling();
    assert!(!rights.has(Color::White, CastleSide::KingSide));
    assert!(!rights.has(Color::Black, CastleSide::KingSide));
    assert!(rights.has(Color::White, CastleSide::QueenSide));
    let castles: Vec<Move> = state
        .legal_moves()
        .unwrap()
        .into_iter()
        .filter(|m| m.is_castle())
        .collect();
    assert_eq!(castles.len(), 1);
    assert_eq!(castles[0].to, sq("c1"));
}

#[test]
fn king_move_revokes_both_wings() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
    apply_move(&mut state, Move::new(sq("e8"), sq("d8"))).unwrap();
    assert!(!state.castling().any(Color::Black));
    assert!(state.castling().any(Color::White));
    assert_eq!(state.fullmove_number(), 2);
}

#[test]
fn promotion_places_chosen_piece() {
    let mut state = GameState::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").unwrap();
    apply_move(
        &mut state,
        Move::new(sq("a7"), sq("a8")).with_promo(PieceKind::Rook),
    )
    .unwrap();
    assert_eq!(state.board().get(sq("a8")), piece(Color::White, PieceKind::Rook));
    assert_eq!(state.board().get(sq("a7")), None);
}

#[test]
fn promotion_without_kind_is_illegal() {
    let mut state = GameState::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").unwrap();
    let before = state.clone();
    let err = apply_move(&mut state, Move::new(sq("a7"), sq("a8"))).unwrap_err();
    assert!(matches!(err, ChessError::IllegalMove(_)));
    assert_eq!(state, before);
}

#[test]
fn illegal_moves_are_rejected_without_mutation() {
    let mut state = new_game(Color::White);
    let before = state.clone();
    for (from, to) in [("e2", "e5"), ("e7", "e5"), ("e1", "e2"), ("d4", "d5")] {
        let err = apply_move(&mut state, Move::new(sq(from), sq(to))).unwrap_err();
        assert!(matches!(err, ChessError::IllegalMove(_)));
    }
    assert_eq!(state, before);
}

#[test]
fn check_and_mate_detection() {
    let mut state = new_game(Color::White);
    play_coord_moves(&mut state, &["f2f3", "e7e5", "g2g4", "d8h4"]).unwrap();
    assert_eq!(is_in_check(&state, Color::White), Ok(true));
    assert_eq!(is_in_check(&state, Color::Black), Ok(false));
    assert_eq!(is_checkmate(&state), Ok(true));
    assert_eq!(is_stalemate(&state), Ok(false));
}

#[test]
fn stalemate_detection() {
    let state = GameState::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(is_stalemate(&state), Ok(true));
    assert_eq!(is_checkmate(&state), Ok(false));
    assert!(state.legal_moves().unwrap().is_empty());
}

#[test]
fn from_parts_requires_one_king_each() {
    let mut board = Board::empty();
    board.put(sq("e1"), Piece::new(Color::White, PieceKind::King));
    let err = GameState::from_parts(board, Color::White, CastlingRights::none(), None)
        .unwrap_err();
    assert!(matches!(err, ChessError::InconsistentState(_)));

    board.put(sq("e8"), Piece::new(Color::Black, PieceKind::King));
    assert!(GameState::from_parts(board, Color::White, CastlingRights::none(), None).is_ok());

    board.put(sq("a8"), Piece::new(Color::Black, PieceKind::King));
    assert!(GameState::from_parts(board, Color::White, CastlingRights::none(), None).is_err());
}

#[test]
fn counters_saturate_instead_of_overflowing() {
    let mut state =
        GameState::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 4294967295 4294967295").unwrap();
    apply_move(&mut state, Move::new(sq("e8"), sq("d8"))).unwrap();
    assert_eq!(state.halfmove_clock(), u32::MAX);
    assert_eq!(state.fullmove_number(), u32::MAX);
    assert_eq!(state.side_to_move(), Color::White);
}
