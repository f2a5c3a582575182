use crate::puzzle::{is_solved, NoProfile, Puzzle, Solution, SolverLimits};
use crate::tubes::PuzzleState;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Shortest accepted solution for a puzzle of `num_colors` colours.
pub fn min_solution_length(num_colors: usize) -> usize {
    (num_colors * 5).max(20)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    Valid(Solution),
    AlreadySolved,
    NoEmptyTube,
    NoKnownSolution,
    TooShort { moves: usize },
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }
}

impl Display for Validation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Validation::Valid(solution) => write!(f, "valid, {} moves", solution.len()),
            Validation::AlreadySolved => f.write_str("already solved"),
            Validation::NoEmptyTube => f.write_str("no empty tube"),
            Validation::NoKnownSolution => f.write_str("no solution within the search budget"),
            Validation::TooShort { moves } => write!(f, "solvable in only {} moves", moves),
        }
    }
}

/// Accepts a puzzle that is unsolved, has an empty tube, and whose shortest known solution
/// is at least `min_solution_length(num_colors)` moves.
pub fn validate_puzzle(state: &PuzzleState, num_colors: usize, limits: SolverLimits) -> Validation {
    if is_solved(state, num_colors) {
        return Validation::AlreadySolved;
    }

    if state.empty_tube_count() == 0 {
        return Validation::NoEmptyTube;
    }

    let mut puzzle = Puzzle::<NoProfile>::with_limits(state.clone(), num_colors, limits);

    match puzzle.solve().into_iter().next() {
        None => Validation::NoKnownSolution,
        Some(solution) if solution.len() < min_solution_length(num_colors) => {
            Validation::TooShort {
                moves: solution.len(),
            }
        }
        Some(solution) => Validation::Valid(solution),
    }
}
