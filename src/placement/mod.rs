//! Placement validator: the legality predicate and target enumeration.
//!
//! Consumed by `TurnEngine` to gate placements and by callers to highlight
//! legal slots. Any legal position is as good as any other; there is no
//! scoring.

pub mod validator;

pub use validator::{completed_rows, is_valid_placement, valid_positions};
