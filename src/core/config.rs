//! Engine configuration.
//!
//! The grid shape is fixed; what varies between tables is how forgiving the
//! fire pile is and how large a roster the setup accepts.

use serde::{Deserialize, Serialize};

use super::error::SetupError;
use super::player::PlayerSetup;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Dice in the fire pile that make the rocket explode (default: 5).
    pub fire_limit: u8,

    /// Largest roster accepted by `start_game` (default: 8).
    pub max_players: usize,

    /// Most dice a single player may start with (default: 20).
    pub max_dice_per_player: u32,

    /// Whether a solo player re-rolls unplaced dice when a turn ends
    /// (default: true). When false the first roll is the whole game, and
    /// ending the turn behaves as if every die were spent.
    pub solo_reroll: bool,

    /// Seed for engines built with `TurnEngine::seeded`.
    /// Same seed produces the same rolls.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fire_limit: 5,
            max_players: 8,
            max_dice_per_player: 20,
            solo_reroll: true,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Set the fire limit.
    ///
    /// Panics if `limit` is zero.
    #[must_use]
    pub fn with_fire_limit(mut self, limit: u8) -> Self {
        assert!(limit > 0, "Fire limit must be at least 1");
        self.fire_limit = limit;
        self
    }

    /// Set the roster size limit.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        assert!(max > 0, "Must allow at least 1 player");
        assert!(max <= 255, "At most 255 players supported");
        self.max_players = max;
        self
    }

    /// Set the per-player dice limit.
    #[must_use]
    pub fn with_max_dice_per_player(mut self, max: u32) -> Self {
        self.max_dice_per_player = max;
        self
    }

    /// Enable or disable solo re-rolls.
    #[must_use]
    pub fn with_solo_reroll(mut self, enabled: bool) -> Self {
        self.solo_reroll = enabled;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check a roster against this configuration.
    pub fn validate_roster(&self, roster: &[PlayerSetup]) -> Result<(), SetupError> {
        if roster.is_empty() {
            return Err(SetupError::NoPlayers);
        }
        if roster.len() > self.max_players {
            return Err(SetupError::TooManyPlayers {
                count: roster.len(),
                max: self.max_players,
            });
        }

        for (seat, entry) in roster.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(SetupError::BlankName { seat });
            }
            if entry.dice_count == 0 || entry.dice_count > self.max_dice_per_player {
                return Err(SetupError::DiceCount {
                    name: entry.name.clone(),
                    count: entry.dice_count,
                    max: self.max_dice_per_player,
                });
            }
        }

        Ok(())
    }
}
