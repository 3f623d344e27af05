//! Terminal self-play: the engine plays both sides and prints the game.
//!
//! CHESS_DEPTH   search depth for both sides (2..=5, default 4)
//! CHESS_MAX_PLIES  stop after this many plies (default 200)
//! RUST_LOG      log filter (default info)

use std::env;
use std::str::FromStr;

use chess_engine::board::Board;
use chess_engine::config::{Difficulty, GameConfig};
use log::{info, warn};

fn env_value<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring {name}={raw:?}, not a number");
            None
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let difficulty = env_value::<u8>("CHESS_DEPTH").map_or(Difficulty::default(), Difficulty::from_depth);
    let max_plies = env_value::<usize>("CHESS_MAX_PLIES").unwrap_or(200);
    info!("self-play at depth {}, at most {} plies", difficulty.max_depth(), max_plies);

    let mut board = Board::new(GameConfig::aivai(difficulty, difficulty));
    while board.state().move_log().len() < max_plies && !board.is_game_over() {
        if !board.start_ai_turn() {
            break;
        }
        let Some(mv) = board.wait_for_ai() else {
            warn!("engine produced no move");
            break;
        };
        println!("{:>3}. {}", board.state().move_log().len(), mv);
    }

    println!();
    println!("{}", board.state());
    println!("{}", board.move_log_text());
    match board.status_text() {
        Some(text) => println!("{text}"),
        None => println!("Stopped after {} plies", board.state().move_log().len()),
    }
}
