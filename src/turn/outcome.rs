//! What `end_turn` reports.

use serde::{Deserialize, Serialize};

use crate::core::{GameOutcome, PlayerId};

/// Why `end_turn` refused to end the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnRejection {
    /// At least one die must be placed or discarded first.
    NothingCommitted,
}

impl std::fmt::Display for TurnRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnRejection::NothingCommitted => write!(f, "place or discard a die before ending the turn"),
        }
    }
}

/// Result of ending a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Play passes to this player, who must roll.
    NextPlayer(PlayerId),

    /// Solo game: the same player's dice were rolled again.
    SoloReroll,

    /// Nobody has dice left; the rocket can still launch.
    LaunchPending,

    /// The game ended.
    GameOver(GameOutcome),

    /// The turn did not end; nothing changed.
    Rejected(TurnRejection),
}

impl TurnOutcome {
    /// Did the turn actually end?
    #[must_use]
    pub fn ended(&self) -> bool {
        !matches!(self, TurnOutcome::Rejected(_))
    }
}
