//! Live combatant snapshot.

use super::core::{Attributes, StatBlock};
use super::resources::{ResourceKind, ResourcePool};
use crate::engine::ParticipantId;

/// A combatant as seen by the resolvers: identity, pools, attributes.
///
/// Attributes are fixed for the encounter; only the pools and the provocation
/// reference change while it runs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub name: String,
    pub health: ResourcePool,
    pub mana: ResourcePool,
    pub attributes: Attributes,

    /// Controlled by the engine rather than a player.
    pub non_player: bool,

    /// Participant this combatant is forced to target.
    ///
    /// A lookup key into the session roster, never an owning reference. It is
    /// cleared whenever the referenced participant is no longer a valid target.
    #[cfg_attr(feature = "serde", serde(default))]
    pub provoked_by: Option<ParticipantId>,
}

impl Combatant {
    pub fn new(
        name: impl Into<String>,
        health: ResourcePool,
        mana: ResourcePool,
        attributes: Attributes,
    ) -> Self {
        Self {
            name: name.into(),
            health,
            mana,
            attributes,
            non_player: false,
            provoked_by: None,
        }
    }

    /// Player-controlled combatant at full pools.
    pub fn player(name: impl Into<String>, stats: &StatBlock) -> Self {
        Self::new(
            name,
            ResourcePool::full(stats.health),
            ResourcePool::full(stats.mana),
            stats.attributes(),
        )
    }

    /// Engine-controlled combatant at full pools.
    pub fn non_player(name: impl Into<String>, stats: &StatBlock) -> Self {
        let mut combatant = Self::player(name, stats);
        combatant.non_player = true;
        combatant
    }

    /// Replaces current health (clamped), e.g. with a persisted value.
    pub fn with_health(mut self, current: f64) -> Self {
        self.health.set_current(current);
        self
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }

    pub fn pool(&self, kind: ResourceKind) -> &ResourcePool {
        match kind {
            ResourceKind::Health => &self.health,
            ResourceKind::Mana => &self.mana,
        }
    }

    /// `"{name} HP: current/maximum"` with two decimals.
    pub fn health_line(&self) -> String {
        format!(
            "{} {}: {:.2}/{:.2}",
            self.name,
            ResourceKind::Health,
            self.health.current(),
            self.health.maximum()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawned_at_full_pools() {
        let stats = StatBlock::new(80.0, 20.0, Attributes::new(12.0, 9.0, 3.0, 5.0, 7.0));
        let wolf = Combatant::non_player("Wolf#1", &stats);

        assert!(wolf.non_player);
        assert!(wolf.is_alive());
        assert_eq!(wolf.health.current(), 80.0);
        assert_eq!(wolf.pool(ResourceKind::Mana).maximum(), 20.0);
        assert_eq!(wolf.health_line(), "Wolf#1 HP: 80.00/80.00");
    }

    #[test]
    fn persisted_health_is_clamped() {
        let stats = StatBlock::new(50.0, 0.0, Attributes::default());
        let hero = Combatant::player("Hero", &stats).with_health(75.0);
        assert_eq!(hero.health.current(), 50.0);

        let fallen = Combatant::player("Fallen", &stats).with_health(0.0);
        assert!(!fallen.is_alive());
    }
}
