//! Player progress record and the level-up loop.

use crate::config::LevelGrowth;
use crate::stats::{Attributes, StatBlock};

/// Persistent progression state of a player.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressRecord {
    pub level: u32,
    pub xp: u64,
    /// Experience required to reach the next level.
    pub xp_next: u64,
    pub max_health: f64,
    /// Unspent attribute points.
    pub stat_points: u32,
}

impl ProgressRecord {
    /// Level 1 with an empty bar.
    pub fn new_character(growth: &LevelGrowth) -> Self {
        Self {
            level: 1,
            xp: 0,
            xp_next: xp_threshold(growth, 1),
            max_health: growth.starting_max_health,
            stat_points: 0,
        }
    }
}

/// Stat block a freshly created character starts with.
pub const fn starting_stats() -> StatBlock {
    StatBlock::new(100.0, 50.0, Attributes::new(10.0, 10.0, 10.0, 10.0, 10.0))
}

/// Experience needed to leave `level`: `quadratic * L² + linear * L`.
pub fn xp_threshold(growth: &LevelGrowth, level: u32) -> u64 {
    let level = u64::from(level);
    growth
        .threshold_quadratic
        .saturating_mul(level)
        .saturating_mul(level)
        .saturating_add(growth.threshold_linear.saturating_mul(level))
}

/// Levels gained by one call to [`apply_experience`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUpReport {
    pub levels_gained: u32,
    pub max_health_gained: f64,
    pub stat_points_gained: u32,
}

impl LevelUpReport {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Add experience, then level up while the bar is full.
///
/// Each level subtracts the current threshold, recomputes it for the new level
/// and grants the per-level growth.
pub fn apply_experience(
    record: &mut ProgressRecord,
    amount: u64,
    growth: &LevelGrowth,
) -> LevelUpReport {
    let mut report = LevelUpReport::default();
    record.xp = record.xp.saturating_add(amount);

    // A zero threshold would never drain the bar.
    while record.xp_next > 0 && record.xp >= record.xp_next {
        record.xp -= record.xp_next;
        record.level += 1;
        record.xp_next = xp_threshold(growth, record.level);
        record.max_health += growth.max_health_per_level;
        record.stat_points += growth.stat_points_per_level;

        report.levels_gained += 1;
        report.max_health_gained += growth.max_health_per_level;
        report.stat_points_gained += growth.stat_points_per_level;
    }

    report
}
