use crate::puzzle::{NoProfile, Puzzle, SolverLimits};
use crate::tubes::{Move, PuzzleState};
use log::debug;

/// The first legal move scanning sources, then destinations, in tube order.
pub fn find_simple_hint(state: &PuzzleState) -> Option<Move> {
    state
        .legal_moves()
        .into_iter()
        .min_by_key(|game_move| (game_move.from, game_move.to))
}

/// A move to suggest to the player: the simple scan first, then the first move of the
/// shortest known solution.
pub fn find_hint(state: &PuzzleState, num_colors: usize, limits: SolverLimits) -> Option<Move> {
    if let Some(hint) = find_simple_hint(state) {
        return Some(hint);
    }

    // Only reached when no move is legal, so any solution found is empty and this yields None.
    let mut puzzle = Puzzle::<NoProfile>::with_limits(state.clone(), num_colors, limits);
    let hint = puzzle.solve().first().and_then(|solution| solution.first_move());

    debug!(
        "no legal move to suggest, solver hint {:?} after {} states",
        hint,
        puzzle.states_explored()
    );

    hint
}
