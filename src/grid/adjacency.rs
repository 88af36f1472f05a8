//! Edge adjacency on the triangular grid.
//!
//! A slot `(r, c)` shares an edge with:
//! - `(r, c-1)` and `(r, c+1)` in its own row
//! - `(r+1, c)` and `(r+1, c+1)` in the row below
//! - `(r-1, c-1)` and `(r-1, c)` in the row above
//!
//! Neighbours outside the grid are dropped, so boundary columns have a single
//! same-row neighbour and row 6 has nothing below it. Corner-only contact
//! never counts.

use smallvec::SmallVec;

use super::position::{Position, GRID_ROWS};

/// Neighbours of one slot. At most six, so this never allocates.
pub type Neighbours = SmallVec<[Position; 6]>;

/// Every slot sharing an edge with `pos`.
///
/// ```
/// use liftoff::grid::{adjacent_positions, Position};
///
/// let neighbours = adjacent_positions(Position::new(1, 1));
/// assert_eq!(neighbours.as_slice(), &[Position::new(2, 1), Position::new(2, 2)]);
/// ```
#[must_use]
pub fn adjacent_positions(pos: Position) -> Neighbours {
    let (row, col) = (pos.row(), pos.col());
    let mut out = Neighbours::new();

    let mut push = |r: u8, c: u8| {
        if let Some(p) = Position::try_new(r, c) {
            out.push(p);
        }
    };

    // Same row
    if col > 1 {
        push(row, col - 1);
    }
    push(row, col + 1);

    // Row below
    if row < GRID_ROWS {
        push(row + 1, col);
        push(row + 1, col + 1);
    }

    // Row above
    if row > 1 {
        push(row - 1, col);
        if col > 1 {
            push(row - 1, col - 1);
        }
    }

    out
}

/// Do `a` and `b` share an edge?
#[must_use]
pub fn are_adjacent(a: Position, b: Position) -> bool {
    adjacent_positions(a).contains(&b)
}
