use super::{find_hint, is_level_completed};
use crate::difficulty::{level_difficulty, DifficultySpec};
use crate::generation::{generate_smart_puzzle_with_rng, GeneratorConfig};
use crate::puzzle::SolverLimits;
use crate::tubes::{Move, MoveError, PuzzleState, StateError};
use log::{debug, info};
use rand::Rng;
use std::collections::VecDeque;
use thiserror::Error;

pub const MAX_UNDO_HISTORY: usize = 25;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("illegal move: {0}")]
    Move(#[from] MoveError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error("there is no move to undo")]
    NothingToUndo,
}

/// Result of tapping a tube.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Selected(usize),
    Cleared,
    Moved(Move),
}

/// A level being played: the live state and everything the player can do to it.
pub struct LevelSession {
    level: u32,
    difficulty: DifficultySpec,
    state: PuzzleState,
    selected: Option<usize>,
    history: VecDeque<PuzzleState>,
    move_count: u32,
    undo_used: bool,
}

impl LevelSession {
    pub fn start<R: Rng + ?Sized>(
        level: u32,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Result<LevelSession, StateError> {
        let generated = generate_smart_puzzle_with_rng(level, config, rng)?;

        info!(
            "starting level {} ({})",
            level,
            if generated.is_fallback() { "fallback" } else { "generated" }
        );

        Ok(LevelSession {
            level,
            difficulty: generated.difficulty,
            state: generated.state,
            selected: None,
            history: VecDeque::new(),
            move_count: 0,
            undo_used: false,
        })
    }

    /// Plays an existing state as `level`.
    pub fn from_state(level: u32, state: PuzzleState) -> LevelSession {
        LevelSession {
            level,
            difficulty: level_difficulty(level),
            state,
            selected: None,
            history: VecDeque::new(),
            move_count: 0,
            undo_used: false,
        }
    }

    /// Deals a fresh puzzle for the same level and clears all progress.
    pub fn restart<R: Rng + ?Sized>(
        &mut self,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Result<(), StateError> {
        *self = LevelSession::start(self.level, config, rng)?;
        Ok(())
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn difficulty(&self) -> &DifficultySpec {
        &self.difficulty
    }

    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn undo_used(&self) -> bool {
        self.undo_used
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Two-tap move entry. The first tap picks a non-empty source, tapping it again drops
    /// it, and a tap on any other tube tries the move. The selection is cleared after every
    /// move attempt, legal or not.
    pub fn select_tube(&mut self, index: usize) -> Result<Selection, SessionError> {
        let is_empty = self.state.tube(index)?.is_empty();

        match self.selected.take() {
            None if is_empty => Err(MoveError::SourceEmpty.into()),
            None => {
                self.selected = Some(index);
                Ok(Selection::Selected(index))
            }
            Some(from) if from == index => Ok(Selection::Cleared),
            Some(from) => self.play_move(from, index).map(Selection::Moved),
        }
    }

    pub fn play_move(&mut self, from: usize, to: usize) -> Result<Move, SessionError> {
        self.state.check_move(from, to)??;

        let game_move = Move::between(from, to);
        let next = self.state.apply_move(game_move)?;

        if self.history.len() == MAX_UNDO_HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(std::mem::replace(&mut self.state, next));
        self.move_count += 1;

        debug!("level {}: played {}", self.level, game_move);

        Ok(game_move)
    }

    pub fn undo(&mut self) -> Result<(), SessionError> {
        let previous = self.history.pop_back().ok_or(SessionError::NothingToUndo)?;

        self.state = previous;
        self.selected = None;
        self.undo_used = true;

        Ok(())
    }

    /// Adds a bought empty tube. Undo snapshots get it too, so undoing never takes it away.
    pub fn add_empty_tube(&mut self) {
        self.state.push_empty_tube();

        for snapshot in &mut self.history {
            snapshot.push_empty_tube();
        }
    }

    pub fn hint(&self, limits: SolverLimits) -> Option<Move> {
        find_hint(&self.state, self.difficulty.color_count, limits)
    }

    pub fn is_completed(&self) -> bool {
        is_level_completed(&self.state, Some(&self.difficulty))
    }
}
