//! Experience for defeated monsters.

use combat_core::{
    ArchetypeCatalog, CombatRules, ExperienceAward, LevelUpReport, ProgressRecord,
    apply_experience, award_experience,
};

use crate::encounter::DefeatedMonster;
use crate::error::Result;

/// What one kill granted.
#[derive(Clone, Debug, PartialEq)]
pub struct KillReward {
    pub award: ExperienceAward,
    pub level_up: LevelUpReport,
}

/// Award experience for `defeated` and apply it to `progress`.
pub fn grant_kill_reward(
    rules: &CombatRules,
    catalog: &ArchetypeCatalog,
    progress: &mut ProgressRecord,
    defeated: &DefeatedMonster,
) -> Result<KillReward> {
    let archetype = catalog.require(&defeated.archetype_key)?;
    let award = award_experience(
        &rules.rewards,
        progress.level,
        Some(progress.xp_next),
        archetype,
        defeated.level,
    );
    let level_up = apply_experience(progress, award.amount, &rules.growth);

    tracing::debug!(
        "{} (level {}) grants {} xp: {}",
        defeated.instance_name,
        defeated.level,
        award.amount,
        award.explanation
    );
    if level_up.leveled_up() {
        tracing::info!(
            "Level up: {} levels gained, now level {}",
            level_up.levels_gained,
            progress.level
        );
    }

    Ok(KillReward { award, level_up })
}
