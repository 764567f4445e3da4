//! Stat system.
//!
//! ```text
//! [ StatBlock (authored anchor) ]
//!      ↓  spawn / interpolate
//! [ Combatant (live snapshot: pools + attributes) ]
//! ```
//!
//! ## Principles
//!
//! 1. **Attributes are fixed** for the duration of an encounter
//! 2. **Pools are clamped**: `0 ≤ current ≤ maximum` after every mutation
//! 3. **Floats throughout**: authored content and interpolation use fractional values

pub mod actor;
pub mod core;
pub mod resources;

pub use actor::Combatant;
pub use core::{Attribute, Attributes, StatBlock};
pub use resources::{ResourceKind, ResourcePool};
