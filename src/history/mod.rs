//! Undo history.
//!
//! ## Design
//!
//! Every placement or discard within a turn pushes a `ReversibleAction`
//! holding the prior values it overwrote. Undo pops the newest entry and
//! reverts it. Grid snapshots are persistent vectors, so keeping one per
//! placement costs a pointer copy rather than a full grid copy.

mod action;
mod stack;

pub use action::ReversibleAction;
pub use stack::HistoryStack;
