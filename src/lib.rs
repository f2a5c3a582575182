//! Puzzle engine for the tube-and-ball colour sorting game.
//!
//! - `tubes`: balls, tubes, puzzle states, move legality and the canonical state key.
//! - `puzzle`: the bounded breadth-first solver used for validation and hints.
//! - `generation`: solved-state shuffling, ball locking, validation and the fallback fill.
//! - `difficulty`: the per-level difficulty curve.
//! - `level`: the win evaluator and the live level session.
//! - `puzzle_file`: the text format for puzzle states.

pub mod difficulty;
pub mod generation;
pub mod level;
pub mod puzzle;
pub mod puzzle_file;
pub mod tubes;
