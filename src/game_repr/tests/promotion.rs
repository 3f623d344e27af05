use super::*;

// ==================== PROMOTION TESTS ====================

#[test]
fn test_push_to_last_rank_gives_four_choices() {
    let mut state = fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
    let moves = moves_from(&state.get_valid_moves(), "e7");

    assert_eq!(moves.len(), 4);
    for piece_type in Type::PROMOTIONS {
        assert!(moves.iter().any(|m| m.promotion == Some(piece_type)));
    }
}

#[test]
fn test_capture_promotion() {
    let mut state = fen("3r4/4P3/8/8/8/8/k7/4K3 w - - 0 1");
    let moves = moves_from(&state.get_valid_moves(), "e7");

    assert_eq!(moves.len(), 8);
    assert_eq!(moves.iter().filter(|m| m.end == sq("d8") && m.is_capture()).count(), 4);
}

#[test]
fn test_under_promotion_and_undo() {
    let mut state = fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1");
    play(&mut state, "e7e8n");
    assert_eq!(state.piece_at(sq("e8")), Some(Piece::new(Color::White, Type::Knight)));

    let mv = state.undo_move().unwrap();
    assert_eq!(mv.promotion, Some(Type::Knight));
    assert_eq!(state.piece_at(sq("e7")), Some(Piece::new(Color::White, Type::Pawn)));
    assert_eq!(state.piece_at(sq("e8")), None);
}

#[test]
fn test_black_promotes_on_first_rank() {
    let mut state = fen("4k3/8/8/8/8/8/3p4/K7 b - - 0 1");
    let moves = moves_from(&state.get_valid_moves(), "d2");
    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|m| m.end == sq("d1") && m.is_pawn_promotion()));

    play(&mut state, "d2d1q");
    assert_eq!(state.piece_at(sq("d1")), Some(Piece::new(Color::Black, Type::Queen)));
}
