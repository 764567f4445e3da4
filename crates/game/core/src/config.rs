//! Tunable rule tables.
//!
//! Every constant used by the formulas lives here with its contract default.
//! Content may override any subset of fields from `rules.toml`; missing fields
//! keep the defaults below.

use std::collections::BTreeMap;

/// Complete rule set consumed by the engine.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatRules {
    pub attack: AttackRules,
    pub rewards: RewardRules,
    pub growth: LevelGrowth,
}

/// Constants of the opposed-roll attack formula.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttackRules {
    /// `to_hit = die + agility / agility_divisor`
    pub agility_divisor: f64,
    /// Fortitude reduction divisor for regular attacks.
    pub fortitude_divisor: f64,
    /// Fortitude reduction divisor when the attack pierces armor.
    pub piercing_fortitude_divisor: f64,
    /// Magic rolls strictly above this value surge.
    pub magic_surge_threshold: u32,
    pub magic_surge_multiplier: f64,
    pub magic_weak_multiplier: f64,
    pub ranged_multiplier: f64,
    pub physical_counter_multiplier: f64,
    pub magic_counter_multiplier: f64,
    pub ranged_counter_multiplier: f64,
}

impl AttackRules {
    pub const STANDARD: Self = Self {
        agility_divisor: 10.0,
        fortitude_divisor: 10.0,
        piercing_fortitude_divisor: 100.0,
        magic_surge_threshold: 15,
        magic_surge_multiplier: 1.2,
        magic_weak_multiplier: 0.9,
        ranged_multiplier: 0.95,
        physical_counter_multiplier: 1.0,
        magic_counter_multiplier: 0.7,
        ranged_counter_multiplier: 0.5,
    };
}

impl Default for AttackRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Experience reward percentages and level-gap adjustments.
///
/// Percentages are expressed in percent units (`1.5` means 1.5%).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RewardRules {
    pub common_percentage: f64,
    pub rare_percentage: f64,
    pub elite_percentage: f64,
    pub boss_percentage: f64,
    /// Archetype key → fixed base percentage.
    pub named_overrides: BTreeMap<String, f64>,
    /// Bosses at or above this level grant `flat_boss_percentage` unmodified.
    pub flat_boss_level: u32,
    pub flat_boss_percentage: f64,
    /// Non-boss targets more than this many levels below the player grant nothing.
    pub max_level_gap: u32,
    pub quarter_gap: u32,
    pub half_gap: u32,
    /// Additive percentage per level the target is above the player.
    pub underdog_bonus_per_level: f64,
    pub underdog_bonus_cap: u32,
    pub event_multiplier: f64,
    /// Fallback curve `base * growth^(level - 1)` when the caller omits the threshold.
    pub fallback_xp_base: f64,
    pub fallback_xp_growth: f64,
}

impl RewardRules {
    /// Signature dungeon boss with a fixed reward.
    pub const HYDRA_KEY: &'static str = "hydra_dungeon.hydre_au_poison";
}

impl Default for RewardRules {
    fn default() -> Self {
        let mut named_overrides = BTreeMap::new();
        named_overrides.insert(Self::HYDRA_KEY.to_string(), 12.5);

        Self {
            common_percentage: 1.5,
            rare_percentage: 3.5,
            elite_percentage: 5.0,
            boss_percentage: 15.0,
            named_overrides,
            flat_boss_level: 60,
            flat_boss_percentage: 50.0,
            max_level_gap: 10,
            quarter_gap: 10,
            half_gap: 5,
            underdog_bonus_per_level: 0.6,
            underdog_bonus_cap: 5,
            event_multiplier: 1.2,
            fallback_xp_base: 100.0,
            fallback_xp_growth: 1.5,
        }
    }
}

/// Per-level growth and the threshold curve used by level-ups.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LevelGrowth {
    pub max_health_per_level: f64,
    pub stat_points_per_level: u32,
    /// `threshold(L) = quadratic * L² + linear * L`
    pub threshold_quadratic: u64,
    pub threshold_linear: u64,
    pub starting_max_health: f64,
}

impl LevelGrowth {
    pub const STANDARD: Self = Self {
        max_health_per_level: 10.0,
        stat_points_per_level: 5,
        threshold_quadratic: 100,
        threshold_linear: 1000,
        starting_max_health: 100.0,
    };
}

impl Default for LevelGrowth {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let rules = CombatRules::default();
        assert_eq!(rules.attack.agility_divisor, 10.0);
        assert_eq!(rules.attack.piercing_fortitude_divisor, 100.0);
        assert_eq!(rules.rewards.boss_percentage, 15.0);
        assert_eq!(
            rules.rewards.named_overrides.get(RewardRules::HYDRA_KEY),
            Some(&12.5)
        );
        assert_eq!(rules.growth.stat_points_per_level, 5);
    }
}
