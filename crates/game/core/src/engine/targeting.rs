//! Target selection, provocation and attacks inside a session.

use super::{CombatSession, ExternalIdentity, ParticipantId, SessionError};
use crate::combat::{AttackResolution, Channel, resolve_attack_with};
use crate::env::DiceOracle;

/// Result of an automatic non-player turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NonPlayerTurn {
    /// The actor attacked; the caller persists the target's pools under `identity`.
    Attacked {
        target: ParticipantId,
        identity: ExternalIdentity,
        resolution: AttackResolution,
    },
    /// No living player was available.
    NoTarget,
    /// The actor was already down; nothing happened.
    ActorIncapacitated,
}

impl CombatSession {
    /// Choose the target of a non-player actor.
    ///
    /// A provocation pointing at a living player wins. Otherwise the stale
    /// provocation is cleared and a living player is chosen uniformly.
    /// `Ok(None)` when no player is alive.
    pub fn select_target(
        &mut self,
        actor: ParticipantId,
        dice: &mut dyn DiceOracle,
    ) -> Result<Option<ParticipantId>, SessionError> {
        let index = self.index_of(actor)?;
        let candidates = self.living_players();
        if candidates.is_empty() {
            return Ok(None);
        }

        let combatant = &mut self.roster[index].combatant;
        if let Some(provoker) = combatant.provoked_by {
            if candidates.contains(&provoker) {
                return Ok(Some(provoker));
            }
        }
        combatant.provoked_by = None;

        Ok(Some(candidates[dice.choose_index(candidates.len())]))
    }

    /// Force `monster` to target `player` until the player goes down.
    pub fn provoke(
        &mut self,
        monster: ParticipantId,
        player: ParticipantId,
    ) -> Result<(), SessionError> {
        let monster_index = self.index_of(monster)?;
        let player_index = self.index_of(player)?;

        let target = &self.roster[player_index];
        if !target.is_player() {
            return Err(SessionError::NotPlayer(player));
        }
        if !target.is_alive() {
            return Err(SessionError::Incapacitated(player));
        }

        let provoked = &mut self.roster[monster_index];
        if provoked.is_player() {
            return Err(SessionError::NotNonPlayer(monster));
        }
        if !provoked.is_alive() {
            return Err(SessionError::Incapacitated(monster));
        }
        provoked.combatant.provoked_by = Some(player);
        Ok(())
    }

    /// Run the automatic turn of a non-player actor.
    ///
    /// The channel follows attribute dominance; both d20 are drawn from `dice`
    /// after target selection.
    pub fn execute_non_player_turn(
        &mut self,
        actor: ParticipantId,
        dice: &mut dyn DiceOracle,
    ) -> Result<NonPlayerTurn, SessionError> {
        let index = self.index_of(actor)?;
        let participant = &self.roster[index];
        if participant.is_player() {
            return Err(SessionError::NotNonPlayer(actor));
        }
        if !participant.is_alive() {
            return Ok(NonPlayerTurn::ActorIncapacitated);
        }

        let Some(target) = self.select_target(actor, dice)? else {
            return Ok(NonPlayerTurn::NoTarget);
        };
        let channel = Channel::dominant_for(&self.roster[index].combatant.attributes);
        let die_a = dice.roll_d20();
        let die_b = dice.roll_d20();

        let target_index = self.index_of(target)?;
        let rules = self.rules;
        let (attacker, defender) = self.pair_mut(index, target_index);
        let resolution = resolve_attack_with(
            &rules,
            &mut attacker.combatant,
            &mut defender.combatant,
            die_a,
            die_b,
            channel,
            false,
        );

        Ok(NonPlayerTurn::Attacked {
            target,
            identity: defender.identity.clone(),
            resolution,
        })
    }

    /// Resolve an attack between two participants with caller-supplied rolls.
    pub fn attack(
        &mut self,
        attacker: ParticipantId,
        defender: ParticipantId,
        die_a: u32,
        die_b: u32,
        channel: Channel,
        armor_piercing: bool,
    ) -> Result<AttackResolution, SessionError> {
        if attacker == defender {
            return Err(SessionError::SelfTarget(attacker));
        }
        let attacker_index = self.index_of(attacker)?;
        let defender_index = self.index_of(defender)?;

        for (id, index) in [(attacker, attacker_index), (defender, defender_index)] {
            if !self.roster[index].is_alive() {
                return Err(SessionError::Incapacitated(id));
            }
        }

        let rules = self.rules;
        let (a, d) = self.pair_mut(attacker_index, defender_index);
        Ok(resolve_attack_with(
            &rules,
            &mut a.combatant,
            &mut d.combatant,
            die_a,
            die_b,
            channel,
            armor_piercing,
        ))
    }
}
