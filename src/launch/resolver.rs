//! Launch eligibility and the booster roll.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::tier::VictoryTier;
use crate::core::die::BOOSTER_VALUE;
use crate::core::{DiceSource, Die};
use crate::grid::{Position, RocketGrid};

/// One roll per booster, in row-major booster order.
pub type LaunchRolls = SmallVec<[u8; 6]>;

/// Result of rolling the boosters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchRoll {
    /// The rolls, one per booster.
    pub rolls: LaunchRolls,

    /// Did any booster roll a 6?
    pub success: bool,

    /// The booster removed on failure.
    pub sacrificed: Option<(Position, Die)>,
}

/// What `attempt_launch` reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchOutcome {
    /// A booster rolled a 6; the game is won.
    Success { rolls: LaunchRolls, tier: VictoryTier },

    /// No 6; one booster went to the fire pile.
    Failure {
        rolls: LaunchRolls,
        /// Slot the sacrificed booster was removed from.
        sacrificed: Position,
        /// Fire pile after the sacrifice.
        fire_pile: u8,
        /// The sacrifice filled the fire pile.
        exploded: bool,
    },

    /// The rocket is not launchable; nothing changed.
    NotReady,
}

impl LaunchOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, LaunchOutcome::Success { .. })
    }
}

/// Can the rocket on `grid` attempt a launch?
///
/// Requires at least one booster, and every row above the booster row
/// (the lowest-numbered row holding one) must be completely filled.
#[must_use]
pub fn can_launch(grid: &RocketGrid) -> bool {
    match grid.booster_row() {
        Some(booster_row) => (1..booster_row).all(|row| grid.is_row_full(row)),
        None => false,
    }
}

/// Roll once per booster on `grid`.
///
/// Any 6 is a success and leaves the grid untouched. Otherwise the first
/// booster in row-major order is removed from the grid and returned.
/// With no boosters nothing is rolled and the result is a failure with
/// nothing sacrificed; callers check `can_launch` first.
pub fn resolve<D: DiceSource + ?Sized>(grid: &mut RocketGrid, dice: &mut D) -> LaunchRoll {
    let boosters: SmallVec<[Position; 6]> = grid.boosters().collect();
    let rolls: LaunchRolls = boosters.iter().map(|_| dice.roll()).collect();

    if rolls.contains(&BOOSTER_VALUE) {
        debug!(?rolls, "launch roll succeeded");
        return LaunchRoll {
            rolls,
            success: true,
            sacrificed: None,
        };
    }

    let sacrificed = boosters
        .first()
        .and_then(|&pos| grid.remove(pos).map(|die| (pos, die)));
    debug!(?rolls, sacrificed = ?sacrificed.as_ref().map(|(pos, _)| *pos), "launch roll failed");

    LaunchRoll {
        rolls,
        success: false,
        sacrificed,
    }
}
