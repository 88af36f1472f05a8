//! Placement legality.
//!
//! ## Body dice (1-5)
//!
//! - The slot's column must equal the die value.
//! - The row must be above any row holding boosters.
//! - Once the booster row is locked, the row must not be below the rocket
//!   height captured when it locked.
//!
//! ## Boosters (6)
//!
//! - Never in row 1, never in a row holding body dice.
//! - While boosters sit on the grid (locked, or left behind by a failed
//!   launch): only in the row already holding them.
//! - Otherwise: only in the row directly beneath the bottom body row.
//!
//! Every placement must share an edge with a placed die, except the first die
//! of the game, which must go to (1,1).

use tracing::trace;

use crate::core::die::{is_body_value, BOOSTER_VALUE};
use crate::grid::{adjacent_positions, Position, RocketGrid};

/// Check whether a die showing `die_value` may be placed at `position`.
///
/// Pure: reads the grid and flags, mutates nothing.
#[must_use]
pub fn is_valid_placement(
    position: Position,
    die_value: u8,
    grid: &RocketGrid,
    rocket_height: u8,
    booster_row_locked: bool,
) -> bool {
    if grid.is_occupied(position) {
        return false;
    }

    let row = position.row();

    if is_body_value(die_value) {
        if grid.booster_row().is_some_and(|booster_row| row >= booster_row) {
            return false;
        }
        if die_value != position.col() {
            return false;
        }
        if booster_row_locked && row > rocket_height {
            return false;
        }
        return touches_rocket(position, grid);
    }

    if die_value == BOOSTER_VALUE {
        if row == 1 {
            return false;
        }
        if grid.row_has_body(row) {
            return false;
        }

        let booster_row = match grid.booster_row() {
            Some(existing) => Some(existing),
            None if booster_row_locked => None,
            None => Some(grid.body_bottom_row() + 1),
        };
        if booster_row != Some(row) {
            trace!(%position, ?booster_row, "booster outside the booster row");
            return false;
        }
        return touches_rocket(position, grid);
    }

    false
}

/// Every legal target for `die_value`, row-major over rows 1-5.
///
/// Row 6 is never a target. Deterministic, so callers can use the result both
/// for gating and for highlighting.
#[must_use]
pub fn valid_positions(
    die_value: u8,
    grid: &RocketGrid,
    rocket_height: u8,
    booster_row_locked: bool,
) -> Vec<Position> {
    Position::body()
        .filter(|&pos| is_valid_placement(pos, die_value, grid, rocket_height, booster_row_locked))
        .collect()
}

/// Body rows whose every slot is occupied, regardless of die value.
#[must_use]
pub fn completed_rows(grid: &RocketGrid) -> Vec<u8> {
    grid.completed_rows()
}

/// Adjacency requirement, with the first-die exception.
fn touches_rocket(position: Position, grid: &RocketGrid) -> bool {
    if grid.is_empty() {
        return position == Position::new(1, 1);
    }
    adjacent_positions(position)
        .iter()
        .any(|&neighbour| grid.is_occupied(neighbour))
}
