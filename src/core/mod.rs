//! Core engine types: dice, players, session state, actions, RNG, configuration.
//!
//! These are the building blocks every other module works in terms of.
//! Tables configure the engine via `EngineConfig` rather than modifying the core.

pub mod action;
pub mod config;
pub mod die;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionRecord, LoggedAction};
pub use config::EngineConfig;
pub use die::{Die, DieId};
pub use error::{EngineError, SetupError};
pub use player::{Player, PlayerId, PlayerSetup};
pub use rng::{DiceSource, GameRng, GameRngState, ScriptedDice};
pub use state::{GameOutcome, GameSession, Phase};
