//! Launching the rocket.
//!
//! ## Eligibility
//!
//! At least one booster, and every row above the booster row fully built.
//!
//! ## Resolution
//!
//! Each booster is rolled once. Any 6 wins. Otherwise the first booster in
//! row-major order is sacrificed to the fire pile and its slot can be refilled.

mod resolver;
mod tier;

pub use resolver::{can_launch, resolve, LaunchOutcome, LaunchRoll, LaunchRolls};
pub use tier::VictoryTier;
