//! Triangular coordinates.
//!
//! Row `r` has `r` slots numbered `1..=r`. Row 1 is the nose cone; rows grow
//! downwards to row 6. Only rows 1-5 are ever placement targets.
//!
//! ```text
//! row 1:          1
//! row 2:        1   2
//! row 3:      1   2   3
//! row 4:    1   2   3   4
//! row 5:  1   2   3   4   5
//! ```
//!
//! Slots are stored row-major, so `(r, c)` lives at index `r*(r-1)/2 + c-1`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of rows in the grid.
pub const GRID_ROWS: u8 = 6;

/// Rows that can hold dice (1..=5).
pub const BODY_ROWS: u8 = 5;

/// Total slots in rows 1..=6.
pub const SLOT_COUNT: usize = (GRID_ROWS as usize * (GRID_ROWS as usize + 1)) / 2;

/// A slot in the triangular grid, `1 <= col <= row <= 6`.
///
/// Only constructible through `new`, `try_new`, parsing or deserialization,
/// all of which check the bounds, so `index()` is always in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition", into = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Unchecked wire form of `Position`.
#[derive(Clone, Copy, Serialize, Deserialize)]
struct RawPosition {
    row: u8,
    col: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = ParsePositionError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::try_new(raw.row, raw.col).ok_or(ParsePositionError::OutOfRange {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl From<Position> for RawPosition {
    fn from(pos: Position) -> Self {
        Self {
            row: pos.row,
            col: pos.col,
        }
    }
}

impl Position {
    /// Create a position.
    ///
    /// Panics if the coordinates are outside the grid.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(
            row >= 1 && row <= GRID_ROWS && col >= 1 && col <= row,
            "Position must satisfy 1 <= col <= row <= 6"
        );
        Self { row, col }
    }

    /// Create a position, or `None` if the coordinates are outside the grid.
    #[must_use]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row >= 1 && row <= GRID_ROWS && col >= 1 && col <= row {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Row, 1 at the nose cone.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column within the row, from 1.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        let r = self.row as usize;
        r * (r - 1) / 2 + (self.col as usize - 1)
    }

    /// Inverse of `index`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().nth(index)
    }

    /// Is this slot in a row that can hold dice?
    #[must_use]
    pub const fn is_body(self) -> bool {
        self.row <= BODY_ROWS
    }

    /// Every slot in `row`, left to right. Empty for rows outside the grid.
    pub fn in_row(row: u8) -> impl Iterator<Item = Position> {
        let cols = if (1..=GRID_ROWS).contains(&row) { row } else { 0 };
        (1..=cols).map(move |col| Position { row, col })
    }

    /// Every slot in the grid, row-major.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=GRID_ROWS).flat_map(Self::in_row)
    }

    /// Every placement target (rows 1..=5), row-major.
    pub fn body() -> impl Iterator<Item = Position> {
        (1..=BODY_ROWS).flat_map(Self::in_row)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// Errors from parsing `"row-col"` text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParsePositionError {
    #[error("expected `row-col`, got {0:?}")]
    Format(String),

    #[error("invalid number {0:?}")]
    Number(String),

    #[error("{row}-{col} is outside the grid")]
    OutOfRange { row: u8, col: u8 },
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once('-')
            .ok_or_else(|| ParsePositionError::Format(s.to_string()))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<u8>()
                .map_err(|_| ParsePositionError::Number(part.to_string()))
        };
        let (row, col) = (parse(row)?, parse(col)?);

        Position::try_new(row, col).ok_or(ParsePositionError::OutOfRange { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_count() {
        assert_eq!(SLOT_COUNT, 21);
        assert_eq!(Position::all().count(), 21);
        assert_eq!(Position::body().count(), 15);
    }

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::all().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), Some(pos));
        }
        assert_eq!(Position::from_index(SLOT_COUNT), None);
    }

    #[test]
    fn test_try_new_bounds() {
        assert!(Position::try_new(1, 1).is_some());
        assert!(Position::try_new(6, 6).is_some());
        assert!(Position::try_new(0, 0).is_none());
        assert!(Position::try_new(2, 3).is_none());
        assert!(Position::try_new(7, 1).is_none());
        assert!(Position::try_new(3, 0).is_none());
    }

    #[test]
    #[should_panic(expected = "Position must satisfy")]
    fn test_new_out_of_range() {
        let _ = Position::new(2, 3);
    }

    #[test]
    fn test_in_row() {
        let row3: Vec<_> = Position::in_row(3).collect();
        assert_eq!(row3, vec![Position::new(3, 1), Position::new(3, 2), Position::new(3, 3)]);
        assert_eq!(Position::in_row(0).count(), 0);
        assert_eq!(Position::in_row(7).count(), 0);
    }

    #[test]
    fn test_is_body() {
        assert!(Position::new(5, 5).is_body());
        assert!(!Position::new(6, 1).is_body());
    }

    #[test]
    fn test_display_and_parse() {
        let pos = Position::new(4, 2);
        assert_eq!(pos.to_string(), "4-2");
        assert_eq!("4-2".parse::<Position>(), Ok(pos));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "42".parse::<Position>(),
            Err(ParsePositionError::Format("42".to_string()))
        );
        assert_eq!(
            "a-1".parse::<Position>(),
            Err(ParsePositionError::Number("a".to_string()))
        );
        assert_eq!(
            "2-3".parse::<Position>(),
            Err(ParsePositionError::OutOfRange { row: 2, col: 3 })
        );
    }

    #[test]
    fn test_serde_checks_bounds() {
        let pos = Position::new(3, 2);
        let json = serde_json::to_string(&pos).unwrap();
        assert_eq!(json, r#"{"row":3,"col":2}"#);
        assert_eq!(serde_json::from_str::<Position>(&json).unwrap(), pos);

        assert!(serde_json::from_str::<Position>(r#"{"row":3,"col":0}"#).is_err());
        assert!(serde_json::from_str::<Position>(r#"{"row":2,"col":5}"#).is_err());
        assert!(serde_json::from_str::<Position>(r#"{"row":7,"col":1}"#).is_err());
    }

    #[test]
    fn test_ordering_is_row_major() {
        let mut positions: Vec<_> = Position::all().collect();
        positions.reverse();
        positions.sort();
        assert_eq!(positions, Position::all().collect::<Vec<_>>());
    }
}
