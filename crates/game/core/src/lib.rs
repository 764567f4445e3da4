//! Deterministic combat and progression rules for a chat-driven tabletop RPG.
//!
//! `combat-core` defines the canonical formulas (opposed-roll attacks, leveled
//! archetype stats, turn order, experience rewards) and exposes pure APIs that
//! the runtime and offline tools reuse. Nothing here performs I/O or logging:
//! callers hand in combatant snapshots and dice, and read back mutated pools
//! and resolution values.
//!
//! All encounter state mutation flows through [`engine::CombatSession`].
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod progression;
pub mod stats;

pub use combat::{
    AttackOutcome, AttackResolution, Channel, ChannelError, resolve_attack, resolve_attack_with,
};
pub use config::{AttackRules, CombatRules, LevelGrowth, RewardRules};
pub use engine::{
    CombatSession, ExternalIdentity, NonPlayerTurn, Participant, ParticipantId, RoundOutcome,
    RoundReport, SessionError, SessionPhase,
};
pub use env::{
    ArchetypeCatalog, ArchetypeDefinition, CatalogError, DiceOracle, PcgDice, ScriptedDice,
    resolve_level, spawn_combatant,
};
pub use error::{CombatErrorKind, ErrorSeverity};
pub use progression::{
    ExperienceAward, LevelUpReport, ProgressRecord, RewardPercentage, TargetCategory,
    apply_experience, award_experience, fallback_xp_next, starting_stats, xp_amount,
    xp_amount_with, xp_percentage, xp_percentage_with, xp_threshold,
};
pub use stats::{Attribute, Attributes, Combatant, ResourcePool, StatBlock};
