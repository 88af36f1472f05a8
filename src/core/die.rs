//! Dice and die identifiers.
//!
//! A die is created when its owner's turn begins and lives in the current
//! hand until it is committed: seated in the grid or sent to the fire pile.
//!
//! ## Values
//!
//! - `1..=5`: body dice, each restricted to the grid column matching its value
//! - `6`: booster dice, restricted to the single booster row
//!
//! ```
//! use liftoff::core::{Die, DieId, PlayerId};
//!
//! let die = Die::new(DieId(7), 6, PlayerId::new(0), "Ada");
//! assert!(die.is_booster());
//! assert!(!die.placed);
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Lowest face of a die.
pub const MIN_DIE_VALUE: u8 = 1;

/// Highest body value (dice 1..=5 build the rocket body).
pub const MAX_BODY_VALUE: u8 = 5;

/// The booster face.
pub const BOOSTER_VALUE: u8 = 6;

/// Unique identifier for a die within a game.
///
/// Allocated sequentially by the session; never reused until the game resets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DieId(pub u32);

impl DieId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for DieId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Die({})", self.0)
    }
}

/// Check whether `value` is a body value (1..=5).
#[must_use]
pub const fn is_body_value(value: u8) -> bool {
    value >= MIN_DIE_VALUE && value <= MAX_BODY_VALUE
}

/// A rolled die.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    /// Unique ID within the game.
    pub id: DieId,

    /// Face value, 1..=6.
    pub value: u8,

    /// The player who rolled this die.
    pub owner: PlayerId,

    /// Owner's display name at roll time.
    pub owner_name: String,

    /// True once seated in the grid or discarded to the fire pile.
    pub placed: bool,
}

impl Die {
    /// Create an unplaced die.
    ///
    /// Panics if `value` is not a die face.
    pub fn new(id: DieId, value: u8, owner: PlayerId, owner_name: impl Into<String>) -> Self {
        assert!(
            (MIN_DIE_VALUE..=BOOSTER_VALUE).contains(&value),
            "Die value must be in 1..=6"
        );

        Self {
            id,
            value,
            owner,
            owner_name: owner_name.into(),
            placed: false,
        }
    }

    /// Is this a booster (a 6)?
    #[must_use]
    pub fn is_booster(&self) -> bool {
        self.value == BOOSTER_VALUE
    }

    /// Is this a body die (1..=5)?
    #[must_use]
    pub fn is_body(&self) -> bool {
        is_body_value(self.value)
    }

    /// Copy of this die marked as placed.
    #[must_use]
    pub fn committed(&self) -> Self {
        Self {
            placed: true,
            ..self.clone()
        }
    }
}
