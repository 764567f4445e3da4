//! Resource pools (health, mana).
//!
//! The current value is the only part mutated during an encounter. Every
//! mutator clamps so that `0 ≤ current ≤ maximum` holds at any externally
//! observable point.

/// Enum representing individual resource types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceKind {
    #[strum(to_string = "HP")]
    Health,
    #[strum(to_string = "MP")]
    Mana,
}

/// A clamped current/maximum pair.
///
/// Deserialization goes through [`ResourcePool::new`], so stored snapshots are
/// clamped like every other write.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawPool"))]
pub struct ResourcePool {
    current: f64,
    maximum: f64,
}

/// Unchecked wire form of [`ResourcePool`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPool {
    current: f64,
    maximum: f64,
}

#[cfg(feature = "serde")]
impl From<RawPool> for ResourcePool {
    fn from(raw: RawPool) -> Self {
        Self::new(raw.current, raw.maximum)
    }
}

impl ResourcePool {
    /// Creates a pool, clamping both values into range.
    pub fn new(current: f64, maximum: f64) -> Self {
        let maximum = maximum.max(0.0);
        Self {
            current: current.clamp(0.0, maximum),
            maximum,
        }
    }

    /// Creates a pool filled to its maximum.
    pub fn full(maximum: f64) -> Self {
        Self::new(maximum, maximum)
    }

    pub const fn current(&self) -> f64 {
        self.current
    }

    pub const fn maximum(&self) -> f64 {
        self.maximum
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Removes up to `amount` (negative amounts are ignored). Returns the new current value.
    pub fn damage(&mut self, amount: f64) -> f64 {
        self.current = (self.current - amount.max(0.0)).max(0.0);
        self.current
    }

    /// Adds up to `amount`, capped at the maximum. Returns the new current value.
    pub fn restore(&mut self, amount: f64) -> f64 {
        self.current = (self.current + amount.max(0.0)).min(self.maximum);
        self.current
    }

    pub fn set_current(&mut self, value: f64) {
        self.current = value.clamp(0.0, self.maximum);
    }

    /// Raises the maximum by `delta` without touching the current value.
    pub fn raise_maximum(&mut self, delta: f64) {
        self.maximum = (self.maximum + delta).max(0.0);
        self.current = self.current.min(self.maximum);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_clamps() {
        let pool = ResourcePool::new(150.0, 100.0);
        assert_eq!(pool.current(), 100.0);

        let pool = ResourcePool::new(-5.0, 100.0);
        assert_eq!(pool.current(), 0.0);
        assert!(pool.is_depleted());
    }

    #[test]
    fn damage_floors_at_zero() {
        let mut pool = ResourcePool::full(30.0);
        assert_eq!(pool.damage(12.5), 17.5);
        assert_eq!(pool.damage(100.0), 0.0);
        assert_eq!(pool.damage(-10.0), 0.0);
    }

    #[test]
    fn restore_caps_at_maximum() {
        let mut pool = ResourcePool::new(10.0, 50.0);
        assert_eq!(pool.restore(100.0), 50.0);

        pool.raise_maximum(10.0);
        assert_eq!(pool.maximum(), 60.0);
        assert_eq!(pool.current(), 50.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn stored_pools_are_clamped_on_load() {
        let pool: ResourcePool = ron::from_str("(current: 150.0, maximum: 100.0)").unwrap();
        assert_eq!(pool, ResourcePool::new(100.0, 100.0));

        let pool: ResourcePool = ron::from_str("(current: -5.0, maximum: 10.0)").unwrap();
        assert_eq!(pool.current(), 0.0);
        assert_eq!(pool.maximum(), 10.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn stored_combatant_keeps_pools_in_range() {
        use crate::stats::Combatant;

        let stored = r#"(
            name: "Ayla",
            health: (current: 150.0, maximum: 100.0),
            mana: (current: -5.0, maximum: 10.0),
            attributes: (power: 5.0, agility: 5.0, mind: 5.0, precision: 5.0, fortitude: 5.0),
            non_player: false,
        )"#;

        let combatant: Combatant = ron::from_str(stored).unwrap();
        assert_eq!(combatant.health.current(), 100.0);
        assert_eq!(combatant.mana.current(), 0.0);
        assert_eq!(combatant.mana.maximum(), 10.0);
    }
}
