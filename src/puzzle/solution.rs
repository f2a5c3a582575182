use crate::tubes::{Move, PuzzleState, StateError};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub moves: Vec<Move>,
}

impl Solution {
    pub fn new(moves: Vec<Move>) -> Solution {
        Solution { moves }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn first_move(&self) -> Option<Move> {
        self.moves.first().copied()
    }

    /// Plays every move on a copy of `state`.
    pub fn replay(&self, state: &PuzzleState) -> Result<PuzzleState, StateError> {
        self.moves
            .iter()
            .try_fold(state.clone(), |current, &game_move| current.apply_move(game_move))
    }
}
