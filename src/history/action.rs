//! Reversible actions.
//!
//! Each committed command within a turn is captured as an immutable value
//! carrying everything needed to restore the session to its state just
//! before the command ran.

use serde::{Deserialize, Serialize};

use crate::core::{Die, GameSession};
use crate::grid::{Position, RocketGrid};

/// A committed, undoable action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReversibleAction {
    /// A die was seated in the grid.
    Place {
        die: Die,
        position: Position,
        /// Grid snapshot before the placement (shares structure with the live grid).
        prior_grid: RocketGrid,
        prior_height: u8,
        prior_lock: bool,
    },

    /// A die was sent to the fire pile.
    Discard { die: Die, prior_fire_pile: u8 },
}

impl ReversibleAction {
    /// The die this action committed.
    #[must_use]
    pub fn die(&self) -> &Die {
        match self {
            ReversibleAction::Place { die, .. } | ReversibleAction::Discard { die, .. } => die,
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ReversibleAction::Place { .. } => "place",
            ReversibleAction::Discard { .. } => "discard",
        }
    }

    /// Restore `session` to its state before this action.
    ///
    /// The die returns to the hand unplaced. Phase and history are left
    /// to the caller.
    pub fn revert(self, session: &mut GameSession) {
        let die_id = self.die().id;

        match self {
            ReversibleAction::Place {
                prior_grid,
                prior_height,
                prior_lock,
                ..
            } => {
                session.grid = prior_grid;
                session.rocket_height = prior_height;
                session.booster_row_locked = prior_lock;
            }
            ReversibleAction::Discard { prior_fire_pile, .. } => {
                session.fire_pile = prior_fire_pile;
            }
        }

        if let Some(die) = session.hand.iter_mut().find(|d| d.id == die_id) {
            die.placed = false;
        }
    }
}
