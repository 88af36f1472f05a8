//! Grid model: triangular coordinates, adjacency, and the rocket grid.
//!
//! The coordinate space is fixed. Positions are never created or destroyed;
//! only the die occupying each slot changes.

pub mod adjacency;
pub mod position;
pub mod rocket;

pub use adjacency::{adjacent_positions, are_adjacent, Neighbours};
pub use position::{ParsePositionError, Position, BODY_ROWS, GRID_ROWS, SLOT_COUNT};
pub use rocket::RocketGrid;
