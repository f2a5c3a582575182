mod frontier;
mod limits;
mod profiler;
mod solution;
mod terminal_detection;

use crate::tubes::{PuzzleState, StateKey};
use frontier::{Frontier, PathArena, SolverNode};
pub use limits::SolverLimits;
use log::debug;
pub use profiler::{NoProfile, Profile, Profiler};
pub use solution::Solution;
use std::collections::HashSet;
pub use terminal_detection::is_solved;

/// Breadth-first search for the shortest sequence of moves that solves a state.
///
/// The search works on its own copy of the state. It stops after `max_solutions` solutions
/// or `max_states` explored states, whichever comes first; an empty result then means no
/// solution is known within the budget, not that none exists.
pub struct Puzzle<P: Profiler> {
    initial_state: PuzzleState,
    num_colors: usize,
    limits: SolverLimits,
    visited: HashSet<StateKey>,
    states_explored: u32,
    budget_exhausted: bool,
    pub profiler: P,
}

impl<P: Profiler> Puzzle<P> {
    pub fn new(initial_state: PuzzleState, num_colors: usize) -> Puzzle<P> {
        Self::with_limits(initial_state, num_colors, SolverLimits::default())
    }

    pub fn with_limits(
        initial_state: PuzzleState,
        num_colors: usize,
        limits: SolverLimits,
    ) -> Puzzle<P> {
        Puzzle {
            initial_state,
            num_colors,
            limits,
            visited: HashSet::new(),
            states_explored: 0,
            budget_exhausted: false,
            profiler: P::new(),
        }
    }

    pub fn initial_state(&self) -> &PuzzleState {
        &self.initial_state
    }

    pub fn states_explored(&self) -> u32 {
        self.states_explored
    }

    /// Whether the last `solve` stopped on the state budget before finding enough solutions.
    pub fn budget_exhausted(&self) -> bool {
        self.budget_exhausted
    }

    /// Solutions found, shortest first. Usually at most one.
    pub fn solve(&mut self) -> Vec<Solution> {
        self.visited.clear();
        self.states_explored = 0;

        let mut paths = PathArena::new();
        let mut frontier = Frontier::new();
        frontier.push(SolverNode::root(self.initial_state.clone()));

        let mut solutions = Vec::new();
        let mut shortest = usize::MAX;

        while solutions.len() < self.limits.max_solutions
            && self.states_explored < self.limits.max_states
        {
            let node = match frontier.pop() {
                Some(node) => node,
                None => break,
            };

            if node.depth >= shortest || !self.visited.insert(node.key) {
                continue;
            }

            self.states_explored += 1;
            self.profiler.explore_node(node.depth);

            if is_solved(&node.state, self.num_colors) {
                solutions.push(Solution::new(paths.moves(node.path)));
                shortest = shortest.min(node.depth);
                frontier.retain_shorter_than(shortest);
                continue;
            }

            for game_move in node.state.legal_moves() {
                let child = node.state.apply_legal(game_move);
                let key = child.canonical_key();

                if self.visited.contains(&key) {
                    continue;
                }

                frontier.push(SolverNode {
                    state: child,
                    key,
                    path: Some(paths.extend(node.path, game_move)),
                    depth: node.depth + 1,
                });
            }

            self.profiler.frontier_size(frontier.len());
        }

        self.budget_exhausted = solutions.len() < self.limits.max_solutions
            && self.states_explored >= self.limits.max_states;

        solutions.sort_by_key(Solution::len);

        debug!(
            "explored {} states, {} solution(s), shortest {:?}, budget exhausted: {}",
            self.states_explored,
            solutions.len(),
            solutions.first().map(Solution::len),
            self.budget_exhausted
        );

        solutions
    }
}

/// Solves with the default limits.
pub fn solve(state: &PuzzleState, num_colors: usize) -> Vec<Solution> {
    Puzzle::<NoProfile>::new(state.clone(), num_colors).solve()
}
