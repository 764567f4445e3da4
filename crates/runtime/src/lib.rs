//! Runtime orchestration around the combat engine.
//!
//! This crate plays the collaborator role for `combat-core`: it loads content,
//! keeps one [`Encounter`] per chat thread behind an async mutex, spawns
//! monsters with unique instance names, supplies dice and applies rewards.
//!
//! Modules are organized by responsibility:
//! - [`config`] reads environment configuration
//! - [`registry`] owns active encounters and serializes access to each
//! - [`encounter`] drives a single session and keeps its combat log
//! - [`bestiary`] materializes monsters from the archetype catalog
//! - [`rewards`] turns defeated monsters into experience
//! - [`dice`] provides the rand-backed dice oracle
pub mod bestiary;
pub mod config;
pub mod dice;
pub mod encounter;
pub mod error;
pub mod registry;
pub mod rewards;

pub use bestiary::{MonsterSpec, SpawnedMonster, next_instance_name, spawn_monster};
pub use config::RuntimeConfig;
pub use dice::RandDice;
pub use encounter::{DefeatedMonster, Encounter, EncounterId, PlayerAttack};
pub use error::{Result, RuntimeError};
pub use registry::{EncounterHandle, EncounterRegistry};
pub use rewards::{KillReward, grant_kill_reward};
