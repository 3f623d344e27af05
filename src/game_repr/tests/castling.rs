use super::*;

// ==================== CASTLING TESTS ====================

const OPEN_CORNERS: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

#[test]
fn test_white_can_castle_both_sides() {
    let mut state = fen(OPEN_CORNERS);
    let moves = state.get_valid_moves();

    assert_eq!(count_castles(&moves), 2);
    assert!(has_move(&moves, "e1", "g1"));
    assert!(has_move(&moves, "e1", "c1"));
}

#[test]
fn test_black_can_castle_both_sides() {
    let mut state = fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    let moves = state.get_valid_moves();

    assert_eq!(count_castles(&moves), 2);
    assert!(has_move(&moves, "e8", "g8"));
    assert!(has_move(&moves, "e8", "c8"));
}

#[test]
fn test_castling_blocked_by_pieces() {
    let mut state = fen("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1");
    assert_eq!(count_castles(&state.get_valid_moves()), 0);
}

#[test]
fn test_cannot_castle_through_attacked_square() {
    let mut state = fen("5r1k/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = state.get_valid_moves();

    assert!(!has_move(&moves, "e1", "g1"));
    assert!(has_move(&moves, "e1", "c1"));
}

#[test]
fn test_attacked_b_file_does_not_stop_queen_side() {
    let mut state = fen("1r5k/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = state.get_valid_moves();
    assert!(has_move(&moves, "e1", "c1"));
    assert!(has_move(&moves, "e1", "g1"));
}

#[test]
fn test_cannot_castle_out_of_check() {
    let mut state = fen("4r2k/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = state.get_valid_moves();
    assert!(state.in_check());
    assert_eq!(count_castles(&moves), 0);
}

#[test]
fn test_castling_moves_rook_and_undo_restores() {
    let mut state = fen(OPEN_CORNERS);
    let before = state.to_fen();

    let mv = play(&mut state, "e1g1");
    assert!(mv.is_castle);
    assert_eq!(state.piece_at(sq("f1")), Some(Piece::new(Color::White, Type::Rook)));
    assert_eq!(state.piece_at(sq("h1")), None);
    assert_eq!(state.king_square(Color::White), sq("g1"));
    assert!(!state.castling_rights().white_king_side);
    assert!(!state.castling_rights().white_queen_side);

    state.undo_move().unwrap();
    assert_eq!(state.to_fen(), before);
    assert_eq!(state.king_square(Color::White), sq("e1"));
}

#[test]
fn test_queen_side_castle_rook_lands_on_d_file() {
    let mut state = fen(OPEN_CORNERS);
    play(&mut state, "e1c1");
    assert_eq!(state.piece_at(sq("d1")), Some(Piece::new(Color::White, Type::Rook)));
    assert_eq!(state.piece_at(sq("a1")), None);
}

#[test]
fn test_rook_move_revokes_only_its_side() {
    let mut state = fen(OPEN_CORNERS);
    play(&mut state, "h1h2");

    let rights = state.castling_rights();
    assert!(!rights.white_king_side);
    assert!(rights.white_queen_side);
    assert!(rights.black_king_side);
}

#[test]
fn test_capturing_rook_revokes_victims_right() {
    let mut state = fen(OPEN_CORNERS);
    play(&mut state, "h1h8");

    let rights = state.castling_rights();
    assert!(!rights.black_king_side);
    assert!(rights.black_queen_side);
    assert!(!rights.white_king_side);

    let moves = state.get_valid_moves();
    assert!(!has_move(&moves, "e8", "g8"));
}

#[test]
fn test_king_move_revokes_both_rights() {
    let mut state = fen(OPEN_CORNERS);
    play(&mut state, "e1e2");
    play(&mut state, "a8a7");
    play(&mut state, "e2e1");

    let rights = state.castling_rights();
    assert!(!rights.white_king_side && !rights.white_queen_side);
    assert!(rights.black_king_side);

    play(&mut state, "a7a8");
    assert!(state.white_to_move());
    assert_eq!(count_castles(&state.get_valid_moves()), 0);
}
