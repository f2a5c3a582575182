mod candidate;
mod fallback;
mod validation;

use crate::difficulty::{level_difficulty, DifficultySpec};
use crate::puzzle::{Solution, SolverLimits};
use crate::tubes::{PuzzleState, StateError};
pub use candidate::locking::add_locked_balls;
pub use candidate::{create_solved_state, enhanced_shuffle, generate_candidate};
pub use fallback::create_fallback_puzzle;
use log::{debug, info, warn};
use rand::prelude::*;
use serde::{Deserialize, Serialize};
pub use validation::{min_solution_length, validate_puzzle, Validation};

/// Knobs for the generate-validate loop. Any field left out of a config file keeps its default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub max_attempts: u32,
    pub solver: SolverLimits,
    /// Extra tubes the player has bought, added to every generated level.
    pub purchased_tubes: usize,
    pub locking_from_level: u32,
    pub max_locked_balls: usize,
}

impl Default for GeneratorConfig {
    fn default() -> GeneratorConfig {
        GeneratorConfig {
            max_attempts: 200,
            solver: SolverLimits::default(),
            purchased_tubes: 0,
            locking_from_level: 20,
            max_locked_balls: 5,
        }
    }
}

impl GeneratorConfig {
    /// Balls the generator locks on `level`. This, not `DifficultySpec::locked_ball_count`,
    /// is what generation applies.
    pub fn locked_balls_for_level(&self, level: u32) -> usize {
        if level < self.locking_from_level {
            return 0;
        }

        ((level.saturating_sub(5) / 5 + 1) as usize).min(self.max_locked_balls)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PuzzleOrigin {
    /// Passed validation on attempt number `attempts`.
    Generated { attempts: u32, solution: Solution },
    /// Every attempt was rejected. The puzzle may not be solvable.
    Fallback { attempts: u32 },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneratedPuzzle {
    pub level: u32,
    pub state: PuzzleState,
    pub difficulty: DifficultySpec,
    pub origin: PuzzleOrigin,
}

impl GeneratedPuzzle {
    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, PuzzleOrigin::Fallback { .. })
    }

    pub fn solution(&self) -> Option<&Solution> {
        match &self.origin {
            PuzzleOrigin::Generated { solution, .. } => Some(solution),
            PuzzleOrigin::Fallback { .. } => None,
        }
    }
}

pub fn generate_smart_puzzle(
    level: u32,
    config: &GeneratorConfig,
) -> Result<GeneratedPuzzle, StateError> {
    generate_smart_puzzle_with_rng(level, config, &mut rand::thread_rng())
}

pub fn generate_smart_puzzle_with_rng<R: Rng + ?Sized>(
    level: u32,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<GeneratedPuzzle, StateError> {
    let difficulty = level_difficulty(level);
    let total_tubes = difficulty.total_tubes(config.purchased_tubes);

    debug!(
        "generating level {}: {} colours in {} tubes, {} shuffle moves",
        level, difficulty.color_count, total_tubes, difficulty.shuffle_move_count
    );

    for attempt in 1..=config.max_attempts {
        let candidate = generate_candidate(level, &difficulty, config, rng)?;

        match validate_puzzle(&candidate, difficulty.color_count, config.solver) {
            Validation::Valid(solution) => {
                info!(
                    "level {} generated on attempt {} with a {} move solution",
                    level,
                    attempt,
                    solution.len()
                );

                return Ok(GeneratedPuzzle {
                    level,
                    state: candidate,
                    difficulty,
                    origin: PuzzleOrigin::Generated {
                        attempts: attempt,
                        solution,
                    },
                });
            }
            rejection => debug!("attempt {} rejected: {}", attempt, rejection),
        }
    }

    warn!(
        "no valid puzzle for level {} after {} attempts, dealing a random fallback",
        level, config.max_attempts
    );

    Ok(GeneratedPuzzle {
        level,
        state: create_fallback_puzzle(difficulty.color_count, total_tubes, rng)?,
        difficulty,
        origin: PuzzleOrigin::Fallback {
            attempts: config.max_attempts,
        },
    })
}
