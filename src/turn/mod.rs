//! The turn state machine.
//!
//! `TurnEngine` owns the `GameSession` and the dice source. Callers drive it
//! with commands; every command validates first and mutates only on success.
//!
//! ## Turn cycle
//!
//! ```text
//! start_game -> start_turn -> (place_die | discard_to_fire | undo_last)* -> end_turn
//! ```
//!
//! `attempt_launch` may be issued any time the rocket is launchable and the
//! game is not over.

mod engine;
mod outcome;

pub use engine::TurnEngine;
pub use outcome::{TurnOutcome, TurnRejection};
