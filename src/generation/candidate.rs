pub mod locking;

use super::GeneratorConfig;
use crate::difficulty::DifficultySpec;
use crate::tubes::{ColorId, Move, PuzzleState, StateError, Tube};
use rand::prelude::*;

/// The first `num_colors` tubes full of one colour each, the rest empty.
pub fn create_solved_state(num_colors: usize, total_tubes: usize) -> Result<PuzzleState, StateError> {
    if total_tubes < num_colors {
        return Err(StateError::NotEnoughTubes {
            colors: num_colors,
            tubes: total_tubes,
        });
    }

    let mut tubes = (0..num_colors)
        .map(|index| ColorId::new(index).map(Tube::filled))
        .collect::<Result<Vec<_>, _>>()?;
    tubes.resize_with(total_tubes, Tube::empty);

    Ok(PuzzleState::new(tubes))
}

/// Plays `move_count` random legal moves, never directly undoing the previous move unless
/// nothing else is legal. Stops early if no move is legal at all.
pub fn enhanced_shuffle<R: Rng + ?Sized>(
    state: &PuzzleState,
    move_count: u32,
    rng: &mut R,
) -> PuzzleState {
    shuffle_with_trace(state, move_count, rng).0
}

fn shuffle_with_trace<R: Rng + ?Sized>(
    state: &PuzzleState,
    move_count: u32,
    rng: &mut R,
) -> (PuzzleState, Vec<Move>) {
    let mut state = state.clone();
    let mut trace = Vec::new();
    let mut last_move: Option<Move> = None;

    for _ in 0..move_count {
        let moves = state.legal_moves();
        let forward: Vec<Move> = moves
            .iter()
            .copied()
            .filter(|game_move| last_move.map_or(true, |last| !game_move.reverses(&last)))
            .collect();

        let chosen = match forward.choose(rng).or_else(|| moves.choose(rng)) {
            Some(&chosen) => chosen,
            None => break,
        };

        state = state.apply_legal(chosen);
        trace.push(chosen);
        last_move = Some(chosen);
    }

    (state, trace)
}

/// One unvalidated puzzle for `level`: solved, shuffled and, from the configured level on,
/// partly locked.
pub fn generate_candidate<R: Rng + ?Sized>(
    level: u32,
    difficulty: &DifficultySpec,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<PuzzleState, StateError> {
    let solved = create_solved_state(
        difficulty.color_count,
        difficulty.total_tubes(config.purchased_tubes),
    )?;
    let shuffled = enhanced_shuffle(&solved, difficulty.shuffle_move_count, rng);

    Ok(match config.locked_balls_for_level(level) {
        0 => shuffled,
        locks => locking::add_locked_balls(&shuffled, locks, rng),
    })
}
