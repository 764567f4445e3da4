//! Static content and external collaborators consumed by the engine.
//!
//! - [`catalog`]: archetype definitions, loaded once from content
//! - [`levels`]: materializing an archetype at a level
//! - [`rng`]: the dice oracle supplied by the caller
pub mod catalog;
pub mod levels;
pub mod rng;

pub use catalog::{ArchetypeCatalog, ArchetypeDefinition, CatalogError};
pub use levels::{resolve_level, spawn_combatant};
pub use rng::{DiceOracle, PcgDice, ScriptedDice};
