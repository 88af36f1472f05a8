//! Error types.
//!
//! Gameplay rejections (an illegal placement, ending a turn with nothing
//! committed, launching an unfinished rocket) are ordinary return values and
//! never appear here. These errors mean the caller broke the engine's
//! contract: it referenced a die that is not in the hand, or issued a command
//! the current phase does not accept.

use super::die::DieId;
use super::state::{GameOutcome, Phase};

/// Contract violations reported by `TurnEngine` commands.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The game has ended; only `reset_game` and queries are accepted.
    #[error("game is over ({0}); reset to play again")]
    GameOver(GameOutcome),

    /// The command does not apply to the current phase.
    #[error("`{command}` is not allowed while {phase}")]
    WrongPhase {
        command: &'static str,
        phase: Phase,
    },

    /// The die is not part of the current hand.
    #[error("{0} is not in the current hand")]
    UnknownDie(DieId),

    /// The die was already placed or discarded this turn.
    #[error("{0} has already been committed")]
    DieAlreadyCommitted(DieId),
}

/// Roster problems reported by `TurnEngine::start_game`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("at least one player is required")]
    NoPlayers,

    #[error("{count} players exceeds the limit of {max}")]
    TooManyPlayers { count: usize, max: usize },

    #[error("player in seat {seat} needs a name")]
    BlankName { seat: usize },

    #[error("{name} must start with 1-{max} dice, got {count}")]
    DiceCount { name: String, count: u32, max: u32 },
}
