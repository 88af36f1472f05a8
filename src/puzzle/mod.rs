//! Daily puzzles.
//!
//! A puzzle is a fixed hand of dice and a target height. The player gets the
//! whole hand in one roll and must build a launchable rocket with at least
//! one completed row. Puzzles run on the ordinary `TurnEngine` with a
//! scripted dice source.

mod catalog;

pub use catalog::{Puzzle, PuzzleError, PUZZLE_PLAYER};
