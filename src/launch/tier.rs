//! Victory tiers: how far a launched rocket gets.
//!
//! Derived from the number of completed rows (body rows 1-5, any die values)
//! and the presence of boosters. The ladder is monotonic in completed rows.
//!
//! | Completed rows | Tier    |
//! |----------------|---------|
//! | 5              | Jupiter |
//! | 3-4            | Mars    |
//! | 1-2            | Moon    |
//! | 0, or no booster | Grounded |

use serde::{Deserialize, Serialize};

use crate::grid::RocketGrid;

/// Destination reached by a rocket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VictoryTier {
    Grounded,
    Moon,
    Mars,
    Jupiter,
}

impl VictoryTier {
    /// Tier for a rocket with `completed_rows` full rows and `boosters` sixes.
    ///
    /// ```
    /// use liftoff::launch::VictoryTier;
    ///
    /// assert_eq!(VictoryTier::from_rocket(2, 1), VictoryTier::Moon);
    /// assert_eq!(VictoryTier::from_rocket(5, 0), VictoryTier::Grounded);
    /// ```
    #[must_use]
    pub fn from_rocket(completed_rows: usize, boosters: usize) -> Self {
        if boosters == 0 {
            return VictoryTier::Grounded;
        }
        match completed_rows {
            0 => VictoryTier::Grounded,
            1..=2 => VictoryTier::Moon,
            3..=4 => VictoryTier::Mars,
            _ => VictoryTier::Jupiter,
        }
    }

    /// Tier for the rocket currently on `grid`.
    #[must_use]
    pub fn for_grid(grid: &RocketGrid) -> Self {
        Self::from_rocket(grid.completed_rows().len(), grid.booster_count())
    }

    /// Numeric level, 0 for `Grounded` up to 3 for `Jupiter`.
    #[must_use]
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Anything above `Grounded`.
    #[must_use]
    pub fn is_victory(self) -> bool {
        self != VictoryTier::Grounded
    }
}

impl std::fmt::Display for VictoryTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VictoryTier::Grounded => "Grounded",
            VictoryTier::Moon => "Moon",
            VictoryTier::Mars => "Mars",
            VictoryTier::Jupiter => "Jupiter",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Die, DieId, PlayerId};
    use crate::grid::Position;

    #[test]
    fn test_ladder() {
        assert_eq!(VictoryTier::from_rocket(0, 3), VictoryTier::Grounded);
        assert_eq!(VictoryTier::from_rocket(1, 1), VictoryTier::Moon);
        assert_eq!(VictoryTier::from_rocket(2, 1), VictoryTier::Moon);
        assert_eq!(VictoryTier::from_rocket(3, 1), VictoryTier::Mars);
        assert_eq!(VictoryTier::from_rocket(4, 2), VictoryTier::Mars);
        assert_eq!(VictoryTier::from_rocket(5, 1), VictoryTier::Jupiter);
    }

    #[test]
    fn test_no_boosters_is_grounded() {
        for rows in 0..=5 {
            assert_eq!(VictoryTier::from_rocket(rows, 0), VictoryTier::Grounded);
        }
    }

    #[test]
    fn test_monotonic_in_rows() {
        let levels: Vec<_> = (0..=5).map(|r| VictoryTier::from_rocket(r, 1).level()).collect();
        assert!(levels.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(levels, vec![0, 1, 1, 2, 2, 3]);
    }

    #[test]
    fn test_for_grid() {
        let mut grid = RocketGrid::new();
        let die = |v| Die::new(DieId(0), v, PlayerId::new(0), "P1").committed();
        grid.place(Position::new(1, 1), die(1));
        assert_eq!(VictoryTier::for_grid(&grid), VictoryTier::Grounded);

        grid.place(Position::new(2, 1), die(6));
        assert_eq!(VictoryTier::for_grid(&grid), VictoryTier::Moon);
        assert!(VictoryTier::for_grid(&grid).is_victory());
    }

    #[test]
    fn test_display() {
        assert_eq!(VictoryTier::Jupiter.to_string(), "Jupiter");
    }
}
