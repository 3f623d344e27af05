use super::*;

// ==================== CHECKMATE TESTS ====================

#[test]
fn test_fools_mate() {
    let mut state = GameState::new();
    for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        play(&mut state, mv);
    }

    let moves = state.get_valid_moves();
    assert!(moves.is_empty());
    assert!(state.checkmate());
    assert!(!state.stalemate());
}

#[test]
fn test_back_rank_mate() {
    let mut state = fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    play(&mut state, "a1a8");

    assert!(state.get_valid_moves().is_empty());
    assert!(state.checkmate());
}

#[test]
fn test_defended_queen_contact_mate() {
    let mut state = fen("4r2k/8/8/8/8/8/4q3/4K3 w - - 0 1");
    assert!(state.get_valid_moves().is_empty());
    assert!(state.checkmate());
}

#[test]
fn test_check_with_block_is_not_mate() {
    let mut state = fen("6k1/5ppp/8/8/8/8/1r6/R5K1 b - - 0 1");
    play(&mut state, "b2b1");

    let moves = state.get_valid_moves();
    assert!(state.in_check());
    assert!(!state.checkmate());
    assert!(has_move(&moves, "a1", "b1"));
}

#[test]
fn test_undo_clears_checkmate_flag() {
    let mut state = fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    play(&mut state, "a1a8");
    state.get_valid_moves();
    assert!(state.checkmate());

    state.undo_move().unwrap();
    assert!(!state.checkmate());
}
