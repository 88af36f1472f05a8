//! The rocket grid: which die sits in which slot.
//!
//! Backed by an `im::Vector` so a snapshot for the undo history is an O(1)
//! clone that shares structure with the live grid.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::position::{Position, BODY_ROWS, SLOT_COUNT};
use crate::core::Die;

/// Mapping from `Position` to the die occupying it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RocketGrid {
    slots: Vector<Option<Die>>,
}

impl Default for RocketGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl RocketGrid {
    /// An empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: std::iter::repeat(None).take(SLOT_COUNT).collect(),
        }
    }

    /// The die at `pos`, if any.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Die> {
        self.slots.get(pos.index()).and_then(Option::as_ref)
    }

    /// Is `pos` occupied?
    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Seat `die` at `pos`, returning whatever was there.
    pub fn place(&mut self, pos: Position, die: Die) -> Option<Die> {
        self.slots.set(pos.index(), Some(die))
    }

    /// Empty `pos`, returning the die that was there.
    pub fn remove(&mut self, pos: Position) -> Option<Die> {
        self.slots.set(pos.index(), None)
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// True if no die has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Occupied slots in row-major order.
    pub fn dice(&self) -> impl Iterator<Item = (Position, &Die)> {
        Position::all().zip(self.slots.iter()).filter_map(|(pos, slot)| slot.as_ref().map(|d| (pos, d)))
    }

    /// Dice in `row`, left to right.
    pub fn row_dice(&self, row: u8) -> impl Iterator<Item = (Position, &Die)> {
        Position::in_row(row).filter_map(move |pos| self.get(pos).map(|d| (pos, d)))
    }

    /// Does `row` hold a booster?
    #[must_use]
    pub fn row_has_booster(&self, row: u8) -> bool {
        self.row_dice(row).any(|(_, d)| d.is_booster())
    }

    /// Does `row` hold a body die?
    #[must_use]
    pub fn row_has_body(&self, row: u8) -> bool {
        self.row_dice(row).any(|(_, d)| d.is_body())
    }

    /// Is every slot of `row` occupied?
    #[must_use]
    pub fn is_row_full(&self, row: u8) -> bool {
        Position::in_row(row).all(|pos| self.is_occupied(pos))
    }

    /// Bottom of the built body: the highest-numbered row holding a body die,
    /// or 0 for none.
    #[must_use]
    pub fn body_bottom_row(&self) -> u8 {
        self.dice()
            .filter(|(_, d)| d.is_body())
            .map(|(pos, _)| pos.row())
            .max()
            .unwrap_or(0)
    }

    /// Booster positions in row-major order.
    pub fn boosters(&self) -> impl Iterator<Item = Position> + '_ {
        self.dice().filter(|(_, d)| d.is_booster()).map(|(pos, _)| pos)
    }

    /// Number of boosters on the grid.
    #[must_use]
    pub fn booster_count(&self) -> usize {
        self.boosters().count()
    }

    /// The row holding boosters (the first one in row-major order), if any.
    #[must_use]
    pub fn booster_row(&self) -> Option<u8> {
        self.boosters().next().map(|pos| pos.row())
    }

    /// Body rows (1..=5) whose every slot is occupied, regardless of value.
    #[must_use]
    pub fn completed_rows(&self) -> Vec<u8> {
        (1..=BODY_ROWS).filter(|&row| self.is_row_full(row)).collect()
    }
}
