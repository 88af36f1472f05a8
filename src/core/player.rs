//! Players and the setup roster.
//!
//! ## PlayerId
//!
//! Seat index in the ordered player list, 0-based.
//!
//! ## Player
//!
//! A seated player and the number of dice they roll on their next turn.
//! Dice left unplaced at the end of a turn carry over; a player with zero
//! dice is skipped by turn rotation.

use serde::{Deserialize, Serialize};

/// Player identifier (seat index).
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use liftoff::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat index.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Dice rolled at the start of this player's next turn.
    pub dice_count: u32,
}

impl Player {
    /// Does this player still take turns?
    #[must_use]
    pub fn has_dice(&self) -> bool {
        self.dice_count > 0
    }
}

/// A roster entry supplied to `TurnEngine::start_game`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    /// Display name (must not be blank).
    pub name: String,

    /// Starting dice.
    pub dice_count: u32,
}

impl PlayerSetup {
    /// Create a roster entry.
    pub fn new(name: impl Into<String>, dice_count: u32) -> Self {
        Self {
            name: name.into(),
            dice_count,
        }
    }

    /// The setup screen's default roster for `player_count` seats.
    ///
    /// Seats 1-4 start with 2 dice, seats 5-7 with 3, seat 8 with 4,
    /// and any further seats with 2.
    ///
    /// ```
    /// use liftoff::core::PlayerSetup;
    ///
    /// let roster = PlayerSetup::default_roster(8);
    /// let dice: Vec<_> = roster.iter().map(|p| p.dice_count).collect();
    /// assert_eq!(dice, vec![2, 2, 2, 2, 3, 3, 3, 4]);
    /// assert_eq!(roster[0].name, "Player 1");
    /// ```
    #[must_use]
    pub fn default_roster(player_count: usize) -> Vec<PlayerSetup> {
        (0..player_count)
            .map(|i| {
                let dice_count = match i {
                    4..=6 => 3,
                    7 => 4,
                    _ => 2,
                };
                PlayerSetup::new(format!("Player {}", i + 1), dice_count)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    }

    #[test]
    fn test_has_dice() {
        let mut player = Player {
            id: PlayerId::new(0),
            name: "Ada".to_string(),
            dice_count: 1,
        };
        assert!(player.has_dice());

        player.dice_count = 0;
        assert!(!player.has_dice());
    }

    #[test]
    fn test_default_roster_small() {
        let roster = PlayerSetup::default_roster(2);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[1], PlayerSetup::new("Player 2", 2));
    }

    #[test]
    fn test_default_roster_beyond_eight() {
        let roster = PlayerSetup::default_roster(10);
        assert_eq!(roster[7].dice_count, 4);
        assert_eq!(roster[8].dice_count, 2);
        assert_eq!(roster[9].name, "Player 10");
    }

    #[test]
    fn test_player_serialization() {
        let player = Player {
            id: PlayerId::new(2),
            name: "Cy".to_string(),
            dice_count: 3,
        };
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
