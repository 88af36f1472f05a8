//! Action log: a record of every command that changed the session.
//!
//! Unlike the undo history, the log spans the whole game and is never
//! rewound; an undo is itself logged. Used for:
//! - Replay/debugging
//! - Post-game summaries

use serde::{Deserialize, Serialize};

use super::die::DieId;
use super::player::PlayerId;
use crate::grid::Position;
use crate::launch::LaunchRolls;

/// What happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoggedAction {
    /// Dice rolled at the start of a turn.
    Rolled { values: Vec<u8> },

    /// A die was seated in the grid.
    Placed { die: DieId, value: u8, position: Position },

    /// A die was sent to the fire pile.
    Discarded { die: DieId, value: u8 },

    /// The most recent placement or discard of `die` was undone.
    Undone { die: DieId },

    /// The turn ended with `remaining` dice carried over.
    TurnEnded { remaining: u32 },

    /// A launch was attempted.
    Launched { rolls: LaunchRolls, success: bool },
}

/// A logged action with metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player whose turn it was.
    pub player: PlayerId,

    /// The action taken.
    pub action: LoggedAction,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: LoggedAction, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_action_record() {
        let action = LoggedAction::Placed {
            die: DieId(5),
            value: 1,
            position: Position::new(1, 1),
        };
        let record = ActionRecord::new(PlayerId::new(0), action.clone(), 3, 5);

        assert_eq!(record.player, PlayerId::new(0));
        assert_eq!(record.action, action);
        assert_eq!(record.turn, 3);
        assert_eq!(record.sequence, 5);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(
            PlayerId::new(1),
            LoggedAction::Launched {
                rolls: smallvec![2, 6],
                success: true,
            },
            2,
            3,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
