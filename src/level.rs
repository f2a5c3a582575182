mod hint;
mod session;

use crate::difficulty::DifficultySpec;
use crate::tubes::PuzzleState;
pub use hint::{find_hint, find_simple_hint};
use log::warn;
pub use session::{LevelSession, Selection, SessionError, MAX_UNDO_HISTORY};

/// Whether `state` has at least as many completed tubes as the level requires.
/// Without a difficulty there is no known target, so the level is never completed.
pub fn is_level_completed(state: &PuzzleState, difficulty: Option<&DifficultySpec>) -> bool {
    match difficulty {
        Some(difficulty) => state.completed_tube_count() >= difficulty.tubes_required_to_win,
        None => {
            warn!("no difficulty known for the current level, treating it as unfinished");
            false
        }
    }
}
