//! Background search thread.
//!
//! The worker owns its own copy of the position and answers at most once
//! through a channel. Cancelling is fire-and-forget: a cancelled worker
//! finishes its current node, drops the result and exits.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use log::debug;

use crate::config::SearchConfig;
use crate::game_repr::GameState;
use super::negamax::{find_best_move, SearchResult};

/// Poll state of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Running,
    Done(SearchResult),
    /// Cancelled, or the worker went away without answering
    Abandoned,
}

/// Handle to one in-flight search. Dropping it cancels the search.
pub struct SearchHandle {
    receiver: Receiver<SearchResult>,
    stop: Arc<AtomicBool>,
}

/// Start searching `state` on a new thread
pub fn spawn_search(mut state: GameState, config: SearchConfig) -> SearchHandle {
    let (sender, receiver) = mpsc::channel();
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);

    thread::spawn(move || {
        let result = find_best_move(&mut state, &config, &stop_flag);
        if stop_flag.load(Ordering::Relaxed) {
            debug!("search cancelled after {} nodes", result.nodes);
            return;
        }
        // the handle may already be gone
        let _ = sender.send(result);
    });

    SearchHandle { receiver, stop }
}

impl SearchHandle {
    /// Non-blocking check for the result
    pub fn try_result(&self) -> SearchStatus {
        match self.receiver.try_recv() {
            Ok(result) => SearchStatus::Done(result),
            Err(TryRecvError::Empty) => SearchStatus::Running,
            Err(TryRecvError::Disconnected) => SearchStatus::Abandoned,
        }
    }

    /// Block until the worker answers or gives up
    pub fn wait(self) -> Option<SearchResult> {
        self.receiver.recv().ok()
    }

    pub fn cancel(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

impl Drop for SearchHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
