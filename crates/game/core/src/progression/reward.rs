//! Level-difference-aware experience rewards.

use crate::config::RewardRules;
use crate::env::ArchetypeDefinition;

/// Reward tier of a defeated target, ordered by rank.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TargetCategory {
    Common,
    Rare,
    Elite,
    Boss,
}

impl TargetCategory {
    /// Base percentage before any adjustment.
    pub fn base_percentage(self, rules: &RewardRules) -> f64 {
        match self {
            TargetCategory::Common => rules.common_percentage,
            TargetCategory::Rare => rules.rare_percentage,
            TargetCategory::Elite => rules.elite_percentage,
            TargetCategory::Boss => rules.boss_percentage,
        }
    }
}

/// Reward percentage (percent units) with a human-readable explanation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardPercentage {
    pub percentage: f64,
    pub explanation: String,
}

/// Percentage and integer amount granted for one kill.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperienceAward {
    pub percentage: f64,
    pub amount: u64,
    pub explanation: String,
}

/// [`xp_percentage_with`] under the default reward rules.
pub fn xp_percentage(
    player_level: u32,
    target_level: u32,
    category: TargetCategory,
    is_event: bool,
    special_key: Option<&str>,
) -> RewardPercentage {
    xp_percentage_with(
        &RewardRules::default(),
        player_level,
        target_level,
        category,
        is_event,
        special_key,
    )
}

/// Percentage of the next-level threshold granted for defeating a target.
///
/// # Precedence
///
/// 1. Boss at or above `flat_boss_level`: flat percentage, returned as-is
/// 2. Base: named override for `special_key`, else the category base
/// 3. Player above target: zero past `max_level_gap` (non-boss only), else
///    base / 4 from `quarter_gap` and base / 2 from `half_gap`
/// 4. Target above player: `+ min(gap, cap) * underdog_bonus_per_level`
/// 5. Event, non-boss: `* event_multiplier`
pub fn xp_percentage_with(
    rules: &RewardRules,
    player_level: u32,
    target_level: u32,
    category: TargetCategory,
    is_event: bool,
    special_key: Option<&str>,
) -> RewardPercentage {
    let is_boss = category == TargetCategory::Boss;

    if is_boss && target_level >= rules.flat_boss_level {
        return RewardPercentage {
            percentage: rules.flat_boss_percentage,
            explanation: format!(
                "boss level {}+: flat {:.2}%",
                rules.flat_boss_level, rules.flat_boss_percentage
            ),
        };
    }

    let override_base = special_key
        .and_then(|key| rules.named_overrides.get(key).map(|pct| (key, *pct)));
    let mut notes = Vec::new();
    let mut percentage = match override_base {
        Some((key, pct)) => {
            notes.push(format!("{key} base {pct:.2}%"));
            pct
        }
        None => {
            let pct = category.base_percentage(rules);
            notes.push(format!("{category} base {pct:.2}%"));
            pct
        }
    };

    if player_level > target_level {
        let excess = player_level - target_level;
        if excess > rules.max_level_gap && !is_boss {
            return RewardPercentage {
                percentage: 0.0,
                explanation: "no reward: level gap too large".to_string(),
            };
        }
        if excess >= rules.quarter_gap {
            percentage /= 4.0;
            notes.push(format!("{excess} levels above target: / 4"));
        } else if excess >= rules.half_gap {
            percentage /= 2.0;
            notes.push(format!("{excess} levels above target: / 2"));
        }
    } else if target_level > player_level {
        let gap = (target_level - player_level).min(rules.underdog_bonus_cap);
        let bonus = f64::from(gap) * rules.underdog_bonus_per_level;
        percentage += bonus;
        notes.push(format!("target {gap} levels higher: +{bonus:.2}%"));
    }

    if is_event && !is_boss {
        percentage *= rules.event_multiplier;
        notes.push(format!("event target: x{}", rules.event_multiplier));
    }

    RewardPercentage {
        percentage,
        explanation: notes.join("; "),
    }
}

/// Approximate next-level threshold `base * growth^(level - 1)`.
pub fn fallback_xp_next(rules: &RewardRules, player_level: u32) -> f64 {
    let exponent = i32::try_from(player_level.saturating_sub(1)).unwrap_or(i32::MAX);
    rules.fallback_xp_base * rules.fallback_xp_growth.powi(exponent)
}

/// [`xp_amount_with`] under the default reward rules.
pub fn xp_amount(percentage: f64, player_level: u32, xp_next: Option<u64>) -> u64 {
    xp_amount_with(&RewardRules::default(), percentage, player_level, xp_next)
}

/// Integer experience for a percentage of the next-level threshold.
///
/// Truncated, with a floor of 1 whenever the percentage is strictly positive.
pub fn xp_amount_with(
    rules: &RewardRules,
    percentage: f64,
    player_level: u32,
    xp_next: Option<u64>,
) -> u64 {
    if percentage <= 0.0 {
        return 0;
    }
    let next = match xp_next {
        Some(next) => next as f64,
        None => fallback_xp_next(rules, player_level),
    };
    let amount = (percentage / 100.0 * next).trunc() as u64;
    amount.max(1)
}

/// Reward for defeating an archetype instance at `target_level`.
///
/// Category, event flag and override key come from the archetype itself.
pub fn award_experience(
    rules: &RewardRules,
    player_level: u32,
    xp_next: Option<u64>,
    archetype: &ArchetypeDefinition,
    target_level: u32,
) -> ExperienceAward {
    let reward = xp_percentage_with(
        rules,
        player_level,
        target_level,
        archetype.category(),
        archetype.is_event(),
        Some(&archetype.key),
    );
    ExperienceAward {
        amount: xp_amount_with(rules, reward.percentage, player_level, xp_next),
        percentage: reward.percentage,
        explanation: reward.explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn equal_levels_use_the_base() {
        let reward = xp_percentage(10, 10, TargetCategory::Elite, false, None);
        assert_eq!(reward.percentage, 5.0);
        assert_eq!(reward.explanation, "elite base 5.00%");
    }

    #[test]
    fn huge_gap_against_common_yields_nothing() {
        let reward = xp_percentage(60, 1, TargetCategory::Common, false, None);
        assert_eq!(reward.percentage, 0.0);
        assert_eq!(reward.explanation, "no reward: level gap too large");
        assert_eq!(xp_amount(reward.percentage, 60, None), 0);
    }

    #[test]
    fn gap_divisions() {
        assert_eq!(xp_percentage(20, 10, TargetCategory::Rare, false, None).percentage, 0.875);
        assert_eq!(xp_percentage(15, 10, TargetCategory::Rare, false, None).percentage, 1.75);
        assert_eq!(xp_percentage(14, 10, TargetCategory::Rare, false, None).percentage, 3.5);
        assert_eq!(xp_percentage(11, 10, TargetCategory::Rare, false, None).percentage, 3.5);
    }

    #[test]
    fn bosses_are_never_zeroed_but_still_divided() {
        let reward = xp_percentage(40, 20, TargetCategory::Boss, false, None);
        assert_eq!(reward.percentage, 3.75);
    }

    #[test]
    fn underdog_bonus_is_capped() {
        let reward = xp_percentage(1, 3, TargetCategory::Common, false, None);
        assert!(close(reward.percentage, 2.7));

        let capped = xp_percentage(1, 30, TargetCategory::Common, false, None);
        assert!(close(capped.percentage, 4.5));
    }

    #[test]
    fn high_level_boss_is_flat() {
        let reward = xp_percentage(5, 60, TargetCategory::Boss, true, None);
        assert_eq!(reward.percentage, 50.0);

        let elite = xp_percentage(5, 60, TargetCategory::Elite, false, None);
        assert!(close(elite.percentage, 8.0));
    }

    #[test]
    fn named_override_replaces_the_base() {
        let reward = xp_percentage(
            20,
            20,
            TargetCategory::Boss,
            false,
            Some(RewardRules::HYDRA_KEY),
        );
        assert_eq!(reward.percentage, 12.5);
        assert!(reward.explanation.contains(RewardRules::HYDRA_KEY));

        let unknown = xp_percentage(20, 20, TargetCategory::Boss, false, Some("forest.rabbit"));
        assert_eq!(unknown.percentage, 15.0);
    }

    #[test]
    fn events_boost_non_bosses_only() {
        let event = xp_percentage(10, 10, TargetCategory::Common, true, None);
        assert!(close(event.percentage, 1.8));

        let boss = xp_percentage(10, 10, TargetCategory::Boss, true, None);
        assert_eq!(boss.percentage, 15.0);
    }

    #[test]
    fn amounts_truncate_with_a_floor() {
        assert_eq!(xp_amount(1.5, 1, Some(1100)), 16);
        assert_eq!(xp_amount(0.01, 1, Some(100)), 1);
        assert_eq!(xp_amount(0.0, 1, Some(100)), 0);
        // Fallback threshold at level 3: 100 * 1.5^2 = 225
        assert_eq!(xp_amount(10.0, 3, None), 22);
    }

    #[test]
    fn fallback_threshold_grows_for_extreme_levels() {
        let rules = RewardRules::default();
        assert_eq!(fallback_xp_next(&rules, 1), 100.0);
        assert!(fallback_xp_next(&rules, u32::MAX).is_infinite());
        assert_eq!(xp_amount(1.0, u32::MAX, None), u64::MAX);
    }

    #[test]
    fn award_reads_the_archetype() {
        use crate::stats::{Attributes, StatBlock};

        let stats = StatBlock::new(150.0, 60.0, Attributes::new(30.0, 28.0, 15.0, 25.0, 20.0));
        let wolf = ArchetypeDefinition::new("forest_plains.loup_alpha", "Loup Alpha")
            .with_rarity("Boss")
            .with_anchor(10, stats);

        let award = award_experience(&RewardRules::default(), 10, Some(1100), &wolf, 10);

        assert_eq!(award.percentage, 15.0);
        assert_eq!(award.amount, 165);
    }
}
