//! # liftoff
//!
//! A rocket assembly dice game engine: build a triangular rocket out of
//! rolled dice, then roll the boosters and hope for a six.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: `TurnEngine` owns the whole `GameSession`. Every command
//!    takes `&mut self`; there is no shared or global state.
//!
//! 2. **Injected Randomness**: every roll goes through a `DiceSource`.
//!    `GameRng` for play, `ScriptedDice` for tests and puzzles.
//!
//! 3. **Rejections Are Values**: an illegal placement is `Ok(false)`, not an
//!    error. Errors are reserved for contract violations.
//!
//! ## Architecture
//!
//! - **Persistent Grid**: the rocket lives in an `im::Vector`, so the undo
//!   history can snapshot it on every placement for the cost of a pointer.
//!
//! - **Pure Validation**: placement legality is a free function over the grid
//!   and two flags, usable for gating and for highlighting alike.
//!
//! ## Modules
//!
//! - `core`: Dice, players, session state, action log, RNG, configuration, errors
//! - `grid`: Triangular coordinates, adjacency, the rocket grid
//! - `placement`: Placement legality
//! - `history`: Turn-scoped undo
//! - `launch`: Launch eligibility, the booster roll, victory tiers
//! - `turn`: The turn state machine
//! - `puzzle`: Daily puzzles
//! - `stats`: Mission statistics
//!
//! ## Example
//!
//! ```
//! use liftoff::{EngineConfig, PlayerSetup, Position, ScriptedDice, TurnEngine, TurnOutcome};
//!
//! let mut engine = TurnEngine::new(EngineConfig::default(), ScriptedDice::new(vec![1, 6]));
//! engine.start_game(vec![PlayerSetup::new("Ada", 2)]).unwrap();
//!
//! let hand = engine.start_turn().unwrap().to_vec();
//! assert!(engine.place_die(hand[0].id, Position::new(1, 1)).unwrap());
//! assert!(engine.place_die(hand[1].id, Position::new(2, 2)).unwrap());
//! assert!(engine.can_launch());
//!
//! assert_eq!(engine.end_turn().unwrap(), TurnOutcome::LaunchPending);
//! ```

pub mod core;
pub mod grid;
pub mod history;
pub mod launch;
pub mod placement;
pub mod puzzle;
pub mod stats;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, DiceSource, Die, DieId, EngineConfig, EngineError, GameOutcome, GameRng,
    GameRngState, GameSession, LoggedAction, Phase, Player, PlayerId, PlayerSetup, ScriptedDice,
    SetupError,
};

pub use crate::grid::{adjacent_positions, are_adjacent, ParsePositionError, Position, RocketGrid};

pub use crate::placement::{completed_rows, is_valid_placement, valid_positions};

pub use crate::history::{HistoryStack, ReversibleAction};

pub use crate::launch::{can_launch, LaunchOutcome, LaunchRolls, VictoryTier};

pub use crate::turn::{TurnEngine, TurnOutcome, TurnRejection};

pub use crate::puzzle::{Puzzle, PuzzleError};

pub use crate::stats::MissionStats;
