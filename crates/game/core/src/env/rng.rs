//! Dice oracle for attack rolls and target selection.
//!
//! The engine never owns a random source: every roll comes from a
//! [`DiceOracle`] handed in by the caller. Any uniform generator satisfies the
//! contract. [`PcgDice`] is a small seeded implementation for replays and
//! offline tools; [`ScriptedDice`] replays fixed values.

/// Source of uniformly distributed dice results.
pub trait DiceOracle {
    /// Generate the next raw random value.
    fn next_u32(&mut self) -> u32;

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&mut self, sides: u32) -> u32 {
        (self.next_u32() % sides.max(1)) + 1
    }

    /// Roll a d20 (1-20 inclusive), the attack die.
    fn roll_d20(&mut self) -> u32 {
        self.roll_die(20)
    }

    /// Pick an index in `0..len` uniformly. `len` must be non-zero.
    fn choose_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "choose_index called with an empty range");
        self.next_u32() as usize % len.max(1)
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Deterministic: the same seed always produces the same sequence.
#[derive(Clone, Copy, Debug)]
pub struct PcgDice {
    state: u64,
}

impl PcgDice {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl DiceOracle for PcgDice {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::step(self.state);
        Self::output(self.state)
    }
}

/// Replays a fixed sequence of raw values, cycling when exhausted.
///
/// `roll_d20` maps a raw value `v` to `v % 20 + 1`, so scripting `14` yields a
/// roll of 15. Use [`ScriptedDice::d20`] to script roll results directly.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedDice {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Scripts d20 results (1-20) instead of raw values.
    pub fn d20(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self::new(
            rolls
                .into_iter()
                .map(|roll| roll.clamp(1, 20) - 1)
                .collect::<Vec<_>>(),
        )
    }
}

impl DiceOracle for ScriptedDice {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic_and_in_range() {
        let mut a = PcgDice::new(42);
        let mut b = PcgDice::new(42);

        for _ in 0..256 {
            let roll = a.roll_d20();
            assert_eq!(roll, b.roll_d20());
            assert!((1..=20).contains(&roll));
        }
    }

    #[test]
    fn scripted_d20_replays_rolls() {
        let mut dice = ScriptedDice::d20([15, 5, 20, 1]);
        assert_eq!(dice.roll_d20(), 15);
        assert_eq!(dice.roll_d20(), 5);
        assert_eq!(dice.roll_d20(), 20);
        assert_eq!(dice.roll_d20(), 1);
        // cycles
        assert_eq!(dice.roll_d20(), 15);
    }

    #[test]
    fn choose_index_stays_in_range() {
        let mut dice = ScriptedDice::new([7]);
        assert_eq!(dice.choose_index(3), 1);
    }
}
