//! The daily puzzle catalog.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::die::BOOSTER_VALUE;
use crate::core::{EngineConfig, EngineError, GameRng, GameSession, PlayerSetup, ScriptedDice, SetupError};
use crate::launch::{self, VictoryTier};
use crate::turn::TurnEngine;

/// Name given to the single puzzle player.
pub const PUZZLE_PLAYER: &str = "Puzzle";

/// A fixed hand and a target height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Puzzle {
    /// Catalog number, from 1.
    pub id: u8,

    /// Target rocket height shown to the player.
    pub height: u8,

    /// How many dice show each face; index 0 is face 1.
    pub dice: [u8; BOOSTER_VALUE as usize],
}

const CATALOG: [Puzzle; 3] = [
    Puzzle {
        id: 1,
        height: 3,
        dice: [1, 2, 3, 2, 1, 3],
    },
    Puzzle {
        id: 2,
        height: 4,
        dice: [2, 2, 4, 2, 1, 4],
    },
    Puzzle {
        id: 3,
        height: 5,
        dice: [2, 3, 3, 3, 2, 5],
    },
];

/// Failure to set up a puzzle game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl Puzzle {
    /// Every puzzle, in id order.
    #[must_use]
    pub fn catalog() -> &'static [Puzzle] {
        &CATALOG
    }

    /// Look up a puzzle by id.
    #[must_use]
    pub fn by_id(id: u8) -> Option<&'static Puzzle> {
        CATALOG.iter().find(|p| p.id == id)
    }

    /// The puzzle of the day.
    ///
    /// `month` is 1-based. The catalog cycles on `year + (month - 1) + day`.
    ///
    /// ```
    /// use liftoff::puzzle::Puzzle;
    ///
    /// // 2024 + 0 + 1 = 2025, 2025 % 3 == 0
    /// assert_eq!(Puzzle::for_date(2024, 1, 1).id, 1);
    /// assert_eq!(Puzzle::for_date(2024, 1, 2).id, 2);
    /// ```
    ///
    /// Panics if `month` is not in 1..=12 or `day` is not in 1..=31.
    #[must_use]
    pub fn for_date(year: i32, month: u32, day: u32) -> &'static Puzzle {
        assert!((1..=12).contains(&month), "Month must be in 1..=12");
        assert!((1..=31).contains(&day), "Day must be in 1..=31");

        let index = i64::from(year) + i64::from(month - 1) + i64::from(day);
        &CATALOG[index.rem_euclid(CATALOG.len() as i64) as usize]
    }

    /// Total dice in the hand.
    #[must_use]
    pub fn dice_count(&self) -> u32 {
        self.dice.iter().map(|&n| u32::from(n)).sum()
    }

    /// The hand as face values, ascending.
    #[must_use]
    pub fn hand(&self) -> Vec<u8> {
        self.dice
            .iter()
            .zip(1u8..)
            .flat_map(|(&count, face)| std::iter::repeat(face).take(count as usize))
            .collect()
    }

    /// Set up a solo game holding this puzzle's hand.
    ///
    /// The hand is dealt once: ending the turn spends it, leaving either a
    /// pending launch or a lost game. Launch rolls come from a `GameRng`
    /// seeded with `config.seed`.
    pub fn start(&self, config: EngineConfig) -> Result<TurnEngine<ScriptedDice>, PuzzleError> {
        let config = config.with_solo_reroll(false);
        let dice = ScriptedDice::new(self.hand()).then(GameRng::new(config.seed));
        let mut engine = TurnEngine::new(config, dice);

        engine.start_game(vec![PlayerSetup::new(PUZZLE_PLAYER, self.dice_count())])?;
        engine.start_turn()?;

        info!(puzzle = self.id, height = self.height, dice = self.dice_count(), "puzzle started");
        Ok(engine)
    }

    /// Has `session` built a launchable rocket that would reach a destination?
    #[must_use]
    pub fn is_solved(&self, session: &GameSession) -> bool {
        launch::can_launch(&session.grid) && VictoryTier::for_grid(&session.grid).is_victory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;

    #[test]
    fn test_catalog() {
        let ids: Vec<_> = Puzzle::catalog().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(Puzzle::by_id(2).map(|p| p.height), Some(4));
        assert!(Puzzle::by_id(4).is_none());
    }

    #[test]
    fn test_hand_is_ascending() {
        let puzzle = Puzzle::by_id(1).unwrap();
        assert_eq!(puzzle.hand(), vec![1, 2, 2, 3, 3, 3, 4, 4, 5, 6, 6, 6]);
        assert_eq!(puzzle.dice_count(), 12);
    }

    #[test]
    fn test_for_date_cycles() {
        // 2025 + 9 (October) + 16 = 2050, 2050 % 3 == 1
        assert_eq!(Puzzle::for_date(2025, 10, 16).id, 2);
        assert_eq!(Puzzle::for_date(2025, 10, 17).id, 3);
        assert_eq!(Puzzle::for_date(2025, 10, 18).id, 1);
    }

    #[test]
    #[should_panic(expected = "Month must be in 1..=12")]
    fn test_for_date_rejects_month_zero() {
        let _ = Puzzle::for_date(2025, 0, 1);
    }

    #[test]
    fn test_start_deals_the_hand() {
        let puzzle = Puzzle::by_id(3).unwrap();
        let engine = puzzle.start(EngineConfig::default()).unwrap();

        let values: Vec<_> = engine.hand().iter().map(|d| d.value).collect();
        assert_eq!(values, puzzle.hand());
        assert_eq!(engine.phase(), &Phase::InTurn);
        assert_eq!(engine.current_player().map(|p| p.name.as_str()), Some(PUZZLE_PLAYER));
    }

    #[test]
    fn test_start_respects_dice_limit() {
        let puzzle = Puzzle::by_id(3).unwrap();
        let config = EngineConfig::default().with_max_dice_per_player(10);
        assert!(matches!(
            puzzle.start(config),
            Err(PuzzleError::Setup(SetupError::DiceCount { count: 18, .. }))
        ));
    }

    #[test]
    fn test_empty_session_is_unsolved() {
        let puzzle = Puzzle::by_id(1).unwrap();
        assert!(!puzzle.is_solved(&GameSession::default()));
    }
}
