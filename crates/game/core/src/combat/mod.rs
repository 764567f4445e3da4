//! Combat resolution system.
//!
//! Pure functions for resolving an opposed-roll exchange between two
//! combatants. The only side effect is the in-place mutation of the two
//! health pools handed in.
//!
//! # Core Functions
//!
//! - `resolve_attack`: complete exchange (to-hit, damage or counter, effect lines)
//! - `to_hit_score` / `check_hit`: opposed d20 + agility comparison
//! - `calculate_damage`, `defense_value`, `counter_damage`: channel-scaled figures

pub mod channel;
pub mod damage;
pub mod hit;
pub mod result;

pub use channel::{Channel, ChannelError};
pub use damage::{calculate_damage, counter_damage, defense_value, fortitude_term};
pub use hit::{check_hit, to_hit_score};
pub use result::{AttackOutcome, AttackResolution, resolve_attack, resolve_attack_with};
