#[cfg(test)]
mod arbitrary;
mod palette;
mod state_key;
mod text_conversion;

pub use palette::{ColorId, MAX_COLORS, PALETTE};
pub use state_key::StateKey;

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::collections::BTreeSet;
use std::convert::TryFrom;
use std::fmt;
use std::fmt::{Display, Formatter};
use thiserror::Error;

pub const TUBE_CAPACITY: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ball {
    pub color: ColorId,
    #[serde(default)]
    pub locked: bool,
}

impl Ball {
    pub fn new(color: ColorId) -> Ball {
        Ball {
            color,
            locked: false,
        }
    }

    pub fn locked(color: ColorId) -> Ball {
        Ball {
            color,
            locked: true,
        }
    }
}

/// Why a ball cannot be poured from one tube onto another.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the source tube is empty")]
    SourceEmpty,
    #[error("the destination tube is full")]
    DestinationFull,
    #[error("a locked ball below the top holds the source tube")]
    TubeLocked,
    #[error("the top ball is locked")]
    BallLocked,
    #[error("the top colours do not match")]
    ColorMismatch,
}

/// A malformed puzzle state or an impossible request against one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("tube {index} does not exist in a puzzle with {tube_count} tubes")]
    TubeIndexOutOfRange { index: usize, tube_count: usize },
    #[error("a tube holds {len} balls but its capacity is {}", TUBE_CAPACITY)]
    TubeOverCapacity { len: usize },
    #[error("cannot move a ball from tube {0} onto itself")]
    SameTube(usize),
    #[error("colour id {0} is outside the {} supported colours", MAX_COLORS)]
    ColorOutOfRange(usize),
    #[error("{colors} colours need at least as many tubes, only {tubes} requested")]
    NotEnoughTubes { colors: usize, tubes: usize },
}

/// A stack of at most `TUBE_CAPACITY` balls, stored bottom to top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Ball>", into = "Vec<Ball>")]
pub struct Tube {
    balls: SmallVec<[Ball; TUBE_CAPACITY]>,
}

impl Tube {
    pub fn empty() -> Tube {
        Tube::default()
    }

    pub fn filled(color: ColorId) -> Tube {
        Tube {
            balls: smallvec![Ball::new(color); TUBE_CAPACITY],
        }
    }

    pub fn from_balls<I: IntoIterator<Item = Ball>>(balls: I) -> Result<Tube, StateError> {
        let balls: SmallVec<[Ball; TUBE_CAPACITY]> = balls.into_iter().collect();

        if balls.len() > TUBE_CAPACITY {
            return Err(StateError::TubeOverCapacity { len: balls.len() });
        }

        Ok(Tube { balls })
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.balls.len() >= TUBE_CAPACITY
    }

    pub fn top(&self) -> Option<Ball> {
        self.balls.last().copied()
    }

    fn push(&mut self, ball: Ball) -> Result<(), StateError> {
        if self.is_full() {
            return Err(StateError::TubeOverCapacity {
                len: self.balls.len() + 1,
            });
        }

        self.balls.push(ball);
        Ok(())
    }

    fn pop(&mut self) -> Option<Ball> {
        self.balls.pop()
    }

    /// Locks the bottom ball, returning false if there is none or it is already locked.
    pub(crate) fn lock_bottom(&mut self) -> bool {
        match self.balls.first_mut() {
            Some(ball) if !ball.locked => {
                ball.locked = true;
                true
            }
            _ => false,
        }
    }

    /// A tube is completed when it is full of one colour and none of its balls are locked.
    pub fn is_completed(&self) -> bool {
        match self.balls.first() {
            Some(first) if self.is_full() => self
                .balls
                .iter()
                .all(|ball| ball.color == first.color && !ball.locked),
            _ => false,
        }
    }

    /// Checks whether the top ball of this tube may be poured onto `destination`.
    pub fn check_move_to(&self, destination: &Tube) -> Result<(), MoveError> {
        let (top, below) = self.balls.split_last().ok_or(MoveError::SourceEmpty)?;

        if destination.is_full() {
            return Err(MoveError::DestinationFull);
        }

        if below.iter().any(|ball| ball.locked) {
            return Err(MoveError::TubeLocked);
        }

        // A lone locked ball is both top and bottom, so it may still leave.
        if top.locked && !below.is_empty() {
            return Err(MoveError::BallLocked);
        }

        match destination.top() {
            Some(destination_top) if destination_top.color != top.color => {
                Err(MoveError::ColorMismatch)
            }
            _ => Ok(()),
        }
    }
}

impl TryFrom<Vec<Ball>> for Tube {
    type Error = StateError;

    fn try_from(balls: Vec<Ball>) -> Result<Tube, StateError> {
        Tube::from_balls(balls)
    }
}

impl From<Tube> for Vec<Ball> {
    fn from(tube: Tube) -> Vec<Ball> {
        tube.balls.into_vec()
    }
}

pub fn is_valid_move(from: &Tube, to: &Tube) -> bool {
    from.check_move_to(to).is_ok()
}

/// Ordering hint attached to enumerated moves. Never part of legality.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MovePriority {
    OntoDifferentColor = 1,
    OntoSameColor = 2,
    OntoEmpty = 3,
}

impl MovePriority {
    fn of(ball: Ball, destination: &Tube) -> MovePriority {
        match destination.top() {
            None => MovePriority::OntoEmpty,
            Some(top) if top.color == ball.color => MovePriority::OntoSameColor,
            Some(_) => MovePriority::OntoDifferentColor,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: usize,
    pub to: usize,
    pub priority: MovePriority,
}

impl Move {
    /// A player move between two tubes. The priority only matters for enumeration order.
    pub fn between(from: usize, to: usize) -> Move {
        Move {
            from,
            to,
            priority: MovePriority::OntoDifferentColor,
        }
    }

    pub fn reverses(&self, other: &Move) -> bool {
        self.from == other.to && self.to == other.from
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// An ordered row of tubes. Tube order addresses moves but is irrelevant for solving.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleState {
    tubes: Vec<Tube>,
}

impl PuzzleState {
    pub fn new(tubes: Vec<Tube>) -> PuzzleState {
        PuzzleState { tubes }
    }

    pub fn with_empty_tubes(count: usize) -> PuzzleState {
        PuzzleState {
            tubes: vec![Tube::empty(); count],
        }
    }

    pub fn tubes(&self) -> &[Tube] {
        &self.tubes
    }

    pub fn tube_count(&self) -> usize {
        self.tubes.len()
    }

    pub fn tube(&self, index: usize) -> Result<&Tube, StateError> {
        self.tubes
            .get(index)
            .ok_or(StateError::TubeIndexOutOfRange {
                index,
                tube_count: self.tubes.len(),
            })
    }

    pub(crate) fn tube_mut(&mut self, index: usize) -> Result<&mut Tube, StateError> {
        let tube_count = self.tubes.len();

        self.tubes
            .get_mut(index)
            .ok_or(StateError::TubeIndexOutOfRange { index, tube_count })
    }

    pub fn push_empty_tube(&mut self) {
        self.tubes.push(Tube::empty());
    }

    pub fn ball_count(&self) -> usize {
        self.tubes.iter().map(Tube::len).sum()
    }

    pub fn empty_tube_count(&self) -> usize {
        self.tubes.iter().filter(|tube| tube.is_empty()).count()
    }

    pub fn completed_tube_count(&self) -> usize {
        self.tubes.iter().filter(|tube| tube.is_completed()).count()
    }

    pub fn distinct_colors(&self) -> usize {
        self.tubes
            .iter()
            .flat_map(|tube| tube.balls().iter().map(|ball| ball.color))
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Checks a move between two tubes of this state.
    /// The outer error is a bad request, the inner one an illegal move.
    pub fn check_move(&self, from: usize, to: usize) -> Result<Result<(), MoveError>, StateError> {
        if from == to {
            return Err(StateError::SameTube(from));
        }

        Ok(self.tube(from)?.check_move_to(self.tube(to)?))
    }

    /// Every legal move, highest priority first, then by source and destination index.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();

        for (from, source) in self.tubes.iter().enumerate() {
            let top = match source.top() {
                Some(top) => top,
                None => continue,
            };

            for (to, destination) in self.tubes.iter().enumerate() {
                if from == to || source.check_move_to(destination).is_err() {
                    continue;
                }

                moves.push(Move {
                    from,
                    to,
                    priority: MovePriority::of(top, destination),
                });
            }
        }

        moves.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then(a.from.cmp(&b.from))
                .then(a.to.cmp(&b.to))
        });

        moves
    }

    /// Moves the top ball of `from` onto `to` in a copy of this state.
    /// Legality is not checked; an empty source yields an unchanged copy.
    pub fn apply_move(&self, game_move: Move) -> Result<PuzzleState, StateError> {
        if game_move.from == game_move.to {
            return Err(StateError::SameTube(game_move.from));
        }

        let mut next = self.clone();

        if let Some(ball) = next.tube_mut(game_move.from)?.pop() {
            next.tube_mut(game_move.to)?.push(ball)?;
        }

        Ok(next)
    }

    /// `apply_move` for moves taken from `legal_moves` of this same state.
    pub(crate) fn apply_legal(&self, game_move: Move) -> PuzzleState {
        let mut next = self.clone();

        if let Some(ball) = next.tubes[game_move.from].pop() {
            next.tubes[game_move.to].balls.push(ball);
        }
        debug_assert!(next.tubes[game_move.to].len() <= TUBE_CAPACITY);

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn color(letter: char) -> ColorId {
        ColorId::from_letter(letter).unwrap()
    }

    fn tube(spec: &str) -> Tube {
        let balls = spec.split_whitespace().map(|ball| {
            let mut chars = ball.chars();
            let letter = chars.next().unwrap();
            if chars.next() == Some('!') {
                Ball::locked(color(letter))
            } else {
                Ball::new(color(letter))
            }
        });

        Tube::from_balls(balls).unwrap()
    }

    #[test]
    fn pouring_onto_an_empty_tube() {
        let state = PuzzleState::new(vec![tube("A A A A"), Tube::empty()]);

        assert_eq!(state.check_move(0, 1), Ok(Ok(())));

        let next = state.apply_move(Move::between(0, 1)).unwrap();

        assert_eq!(next.tube(0).unwrap().len(), 3);
        assert_eq!(next.tube(1).unwrap(), &tube("A"));
    }

    #[test]
    fn previous_state_is_not_mutated() {
        let state = PuzzleState::new(vec![tube("A B"), Tube::empty()]);
        let next = state.apply_move(Move::between(0, 1)).unwrap();

        assert_ne!(state, next);
        assert_eq!(state.tube(0).unwrap(), &tube("A B"));
    }

    #[test]
    fn cannot_move_from_an_empty_tube() {
        assert_eq!(
            Tube::empty().check_move_to(&Tube::empty()),
            Err(MoveError::SourceEmpty)
        );
    }

    #[test]
    fn cannot_move_onto_a_full_tube() {
        assert_eq!(
            tube("A").check_move_to(&tube("A A A A")),
            Err(MoveError::DestinationFull)
        );
    }

    #[test]
    fn buried_locked_ball_holds_the_tube() {
        assert_eq!(
            tube("A! B").check_move_to(&Tube::empty()),
            Err(MoveError::TubeLocked)
        );
    }

    #[test]
    fn locked_top_ball_cannot_leave_a_shared_tube() {
        assert_eq!(
            tube("A A!").check_move_to(&Tube::empty()),
            Err(MoveError::BallLocked)
        );
    }

    #[test]
    fn lone_locked_ball_can_leave() {
        assert_eq!(tube("A!").check_move_to(&Tube::empty()), Ok(()));
        assert_eq!(tube("A!").check_move_to(&tube("A")), Ok(()));
    }

    #[test]
    fn colours_must_match() {
        assert_eq!(
            tube("A B").check_move_to(&tube("A")),
            Err(MoveError::ColorMismatch)
        );
        assert!(is_valid_move(&tube("B A"), &tube("B A")));
    }

    #[test]
    fn full_check_order_prefers_destination_full_over_locks() {
        assert_eq!(
            tube("A! B").check_move_to(&tube("B B B B")),
            Err(MoveError::DestinationFull)
        );
    }

    #[test]
    fn completed_tube() {
        assert!(tube("C C C C").is_completed());
        assert!(!tube("C C C").is_completed());
        assert!(!tube("C C D C").is_completed());
        assert!(!Tube::empty().is_completed());
    }

    #[test]
    fn locked_ball_blocks_completion() {
        assert!(!tube("A! A A A").is_completed());
        assert!(!tube("A A A A!").is_completed());
    }

    #[test]
    fn over_capacity_tube_is_rejected() {
        assert_eq!(
            Tube::from_balls(vec![Ball::new(color('A')); 5]),
            Err(StateError::TubeOverCapacity { len: 5 })
        );
    }

    #[test]
    fn legal_moves_are_ordered_by_priority_then_index() {
        let state = PuzzleState::new(vec![
            tube("A B"),
            tube("B"),
            Tube::empty(),
            tube("A"),
        ]);

        let moves: Vec<(usize, usize, u8)> = state
            .legal_moves()
            .iter()
            .map(|m| (m.from, m.to, m.priority.value()))
            .collect();

        assert_eq!(
            moves,
            vec![(0, 2, 3), (1, 2, 3), (3, 2, 3), (0, 1, 2), (1, 0, 2)]
        );
    }

    #[test]
    fn apply_move_rejects_bad_indices() {
        let state = PuzzleState::new(vec![tube("A"), Tube::empty()]);

        assert_eq!(
            state.apply_move(Move::between(0, 2)),
            Err(StateError::TubeIndexOutOfRange {
                index: 2,
                tube_count: 2
            })
        );
        assert_eq!(
            state.apply_move(Move::between(1, 1)),
            Err(StateError::SameTube(1))
        );
    }

    #[test]
    fn apply_move_from_empty_tube_is_a_copy() {
        let state = PuzzleState::new(vec![Tube::empty(), tube("A")]);

        assert_eq!(state.apply_move(Move::between(0, 1)), Ok(state.clone()));
    }

    #[test]
    fn apply_move_onto_full_tube_is_a_fault() {
        let state = PuzzleState::new(vec![tube("A"), tube("A A A A")]);

        assert_eq!(
            state.apply_move(Move::between(0, 1)),
            Err(StateError::TubeOverCapacity { len: 5 })
        );
    }

    #[test]
    fn serde_round_trip_keeps_order_and_locks() {
        let state = PuzzleState::new(vec![tube("A! B C"), Tube::empty(), tube("C B")]);

        let json = serde_json::to_string(&state).unwrap();
        let restored: PuzzleState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, state);
    }

    #[test]
    fn deserializing_an_overfull_tube_fails() {
        let ball = r#"{"color":0,"locked":false}"#;
        let json = format!("[[{0},{0},{0},{0},{0}]]", ball);

        assert!(serde_json::from_str::<PuzzleState>(&json).is_err());
    }

    #[quickcheck]
    fn legal_moves_respect_the_rules(state: PuzzleState) {
        for game_move in state.legal_moves() {
            let source = state.tube(game_move.from).unwrap();
            let destination = state.tube(game_move.to).unwrap();
            let (top, below) = source.balls().split_last().unwrap();

            assert!(destination.top().map_or(true, |d| d.color == top.color));
            assert!(below.iter().all(|ball| !ball.locked));
            assert!(!top.locked || below.is_empty());
        }
    }

    #[quickcheck]
    fn moves_conserve_balls(state: PuzzleState, choices: Vec<u8>) {
        let total = state.ball_count();
        let mut current = state;

        for choice in choices {
            let moves = current.legal_moves();
            if moves.is_empty() {
                break;
            }
            let game_move = moves[choice as usize % moves.len()];
            current = current.apply_move(game_move).unwrap();

            assert_eq!(current.ball_count(), total);
        }
    }
}
