//! Rand-backed dice oracle.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use combat_core::DiceOracle;

/// Uniform dice over [`StdRng`].
///
/// Seeded dice replay the same encounter exactly; unseeded dice draw from OS
/// entropy.
#[derive(Debug, Clone)]
pub struct RandDice {
    rng: StdRng,
}

impl RandDice {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Dice for one encounter: derived from `seed` when configured.
    pub fn for_encounter(seed: Option<u64>, encounter: u64) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed ^ encounter.rotate_left(32)),
            None => Self::from_entropy(),
        }
    }
}

impl DiceOracle for RandDice {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn roll_die(&mut self, sides: u32) -> u32 {
        self.rng.gen_range(1..=sides.max(1))
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len.max(1))
    }
}
