//! Dice sources: the engine's only way to obtain randomness.
//!
//! ## Key Features
//!
//! - **Injectable**: `TurnEngine` is generic over `DiceSource`, never global
//! - **Deterministic**: `GameRng` with the same seed produces identical rolls
//! - **Checkpointable**: O(1) state capture and restore via `GameRngState`
//! - **Scripted**: `ScriptedDice` replays a fixed sequence for tests and puzzles
//!
//! ## Usage
//!
//! ```
//! use liftoff::core::{DiceSource, GameRng, ScriptedDice};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.roll();
//! assert!((1..=6).contains(&roll));
//!
//! let mut scripted = ScriptedDice::new(vec![6, 3]);
//! assert_eq!(scripted.roll(), 6);
//! assert_eq!(scripted.roll(), 3);
//! assert_eq!(scripted.roll(), 6); // cycles
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::die::{BOOSTER_VALUE, MIN_DIE_VALUE};

/// A source of six-sided die rolls.
///
/// Implementations must return values in `1..=6`.
pub trait DiceSource {
    /// Roll one die.
    fn roll(&mut self) -> u8;
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// Seeded dice source backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from system entropy.
    ///
    /// The chosen seed is still observable through `state()`, so a game
    /// started this way can be replayed afterwards.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> u8 {
        self.inner.gen_range(MIN_DIE_VALUE..=BOOSTER_VALUE)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many dice have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Seed the generator was created with
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Dice source that replays a fixed sequence of values.
///
/// Once the script is exhausted it either hands over to a fallback RNG
/// (see `then`) or starts again from the beginning.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    values: Vec<u8>,
    cursor: usize,
    fallback: Option<GameRng>,
}

impl ScriptedDice {
    /// Create a scripted source.
    ///
    /// Panics if `values` is empty or contains a value outside `1..=6`.
    #[must_use]
    pub fn new(values: Vec<u8>) -> Self {
        assert!(!values.is_empty(), "Dice script must not be empty");
        assert!(
            values.iter().all(|v| (MIN_DIE_VALUE..=BOOSTER_VALUE).contains(v)),
            "Dice script values must be in 1..=6"
        );

        Self {
            values,
            cursor: 0,
            fallback: None,
        }
    }

    /// Continue with `rng` once the script runs out instead of cycling.
    #[must_use]
    pub fn then(mut self, rng: GameRng) -> Self {
        self.fallback = Some(rng);
        self
    }

    /// Number of scripted values not yet consumed in the current pass.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len().saturating_sub(self.cursor)
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        if self.cursor >= self.values.len() {
            if let Some(rng) = self.fallback.as_mut() {
                return rng.roll();
            }
            self.cursor = 0;
        }

        let value = self.values[self.cursor];
        self.cursor += 1;
        value
    }
}
