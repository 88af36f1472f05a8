//! Mission statistics across games.
//!
//! Pure in-memory aggregate; storing it is up to the caller (it derives
//! serde traits).
//!
//! ## Usage
//!
//! ```
//! use liftoff::core::GameOutcome;
//! use liftoff::launch::VictoryTier;
//! use liftoff::stats::MissionStats;
//!
//! let mut stats = MissionStats::new();
//! stats.record(&GameOutcome::Victory { tier: VictoryTier::Mars, rolls: Default::default() });
//! stats.record(&GameOutcome::Explosion);
//!
//! assert_eq!(stats.games_played, 2);
//! assert_eq!(stats.max_streak, 1);
//! assert_eq!(stats.current_streak, 0);
//! assert_eq!(stats.destination_count(VictoryTier::Mars), 1);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::GameOutcome;
use crate::launch::VictoryTier;

/// Running totals over finished games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionStats {
    /// Games recorded.
    pub games_played: u32,

    /// Games that ended in a successful launch.
    pub missions_accomplished: u32,

    /// Consecutive successful launches up to the latest game.
    pub current_streak: u32,

    /// Longest streak seen.
    pub max_streak: u32,

    /// Successful launches per destination.
    pub destinations: FxHashMap<VictoryTier, u32>,
}

impl MissionStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game.
    pub fn record(&mut self, outcome: &GameOutcome) {
        self.games_played += 1;

        match outcome {
            GameOutcome::Victory { tier, .. } => {
                self.missions_accomplished += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                *self.destinations.entry(*tier).or_insert(0) += 1;
            }
            GameOutcome::Explosion | GameOutcome::NoBuildableLayout => {
                self.current_streak = 0;
            }
        }
    }

    /// Successful launches that reached `tier`.
    #[must_use]
    pub fn destination_count(&self, tier: VictoryTier) -> u32 {
        self.destinations.get(&tier).copied().unwrap_or(0)
    }

    /// Fraction of games won, 0.0 when none have been played.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.missions_accomplished) / f64::from(self.games_played)
    }
}
