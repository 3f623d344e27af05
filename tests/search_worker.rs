//! Engine searches through the public worker API.

use chess_engine::agent::ai::{spawn_search, SearchStatus, CHECKMATE};
use chess_engine::board::Board;
use chess_engine::config::{Difficulty, GameConfig, SearchConfig};
use chess_engine::game_repr::{Color, GameState};

#[test]
fn test_worker_finds_back_rank_mate() {
    let state = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    let handle = spawn_search(state, SearchConfig::with_depth(3).seeded(2));
    let result = handle.wait().expect("search should finish");

    assert_eq!(result.score, CHECKMATE);
    assert_eq!(result.best_move.unwrap().chess_notation(), "a1a8");
    assert!(result.nodes > 1);
}

#[test]
fn test_dropped_handle_stops_worker() {
    let handle = spawn_search(GameState::new(), SearchConfig::with_depth(6));
    assert_eq!(handle.try_result(), SearchStatus::Running);
    drop(handle);
}

#[test]
fn test_engine_vs_engine_plays_legal_moves() {
    let mut board = Board::new(GameConfig::aivai(Difficulty::Easy, Difficulty::Easy)).with_search_seed(9);
    for _ in 0..6 {
        assert!(board.start_ai_turn());
        let mover = board.state().side_to_move();
        let mv = board.wait_for_ai().expect("engine should move");
        assert_eq!(mv.piece_moved.color, mover);
    }
    assert_eq!(board.state().move_log().len(), 6);
    assert_eq!(board.state().side_to_move(), Color::White);
}
