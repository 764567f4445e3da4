//! Experience rewards and the leveling curve.
//!
//! - [`reward`]: percentage of the next-level threshold granted for a kill
//! - [`leveling`]: applying experience to a player's progress record
//!
//! Both are pure. The collaborator persists the resulting record.
pub mod leveling;
pub mod reward;

pub use leveling::{LevelUpReport, ProgressRecord, apply_experience, starting_stats, xp_threshold};
pub use reward::{
    ExperienceAward, RewardPercentage, TargetCategory, award_experience, fallback_xp_next,
    xp_amount, xp_amount_with, xp_percentage, xp_percentage_with,
};
