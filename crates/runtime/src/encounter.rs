//! A single live encounter: session, spawned monsters, dice and combat log.

use std::collections::BTreeMap;
use std::fmt;

use combat_core::{
    AttackResolution, AttackRules, Channel, CombatSession, Combatant, DiceOracle,
    ExternalIdentity, NonPlayerTurn, ParticipantId, RoundOutcome, RoundReport,
};

use crate::bestiary::SpawnedMonster;
use crate::dice::RandDice;
use crate::error::{Result, RuntimeError};

/// Opaque encounter key (the chat thread id).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EncounterId(pub u64);

impl fmt::Display for EncounterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A monster that reached zero health, with what rewards need to know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefeatedMonster {
    pub instance_name: String,
    pub archetype_key: String,
    pub level: u32,
}

/// Outcome of a player-driven attack.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerAttack {
    pub resolution: AttackResolution,
    /// Set when this attack brought the monster down.
    pub defeated: Option<DefeatedMonster>,
}

#[derive(Clone, Debug)]
struct MonsterOrigin {
    archetype_key: String,
    level: u32,
}

/// Authoritative state of one encounter.
///
/// Accessed through the registry's per-encounter mutex only.
#[derive(Debug)]
pub struct Encounter {
    id: EncounterId,
    session: CombatSession,
    monsters: BTreeMap<String, MonsterOrigin>,
    dice: RandDice,
    log: Vec<String>,
}

impl Encounter {
    pub(crate) fn new(
        id: EncounterId,
        players: Vec<(u64, Combatant)>,
        monsters: Vec<SpawnedMonster>,
        rules: AttackRules,
        dice: RandDice,
    ) -> Self {
        let mut origins = BTreeMap::new();
        let mut roster = Vec::with_capacity(players.len() + monsters.len());

        for (account, combatant) in players {
            roster.push((ExternalIdentity::Player(account), combatant));
        }
        for monster in monsters {
            let name = monster.instance_name().to_string();
            origins.insert(
                name.clone(),
                MonsterOrigin {
                    archetype_key: monster.archetype_key,
                    level: monster.level,
                },
            );
            roster.push((ExternalIdentity::Monster(name), monster.combatant));
        }

        Self {
            id,
            session: CombatSession::new(roster).with_rules(rules),
            monsters: origins,
            dice,
            log: Vec::new(),
        }
    }

    pub fn id(&self) -> EncounterId {
        self.id
    }

    pub fn session(&self) -> &CombatSession {
        &self.session
    }

    /// Effect lines in the order they happened.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn is_concluded(&self) -> bool {
        self.session.is_concluded()
    }

    pub fn all_monsters_defeated(&self) -> bool {
        self.session.all_non_players_defeated()
    }

    /// Instance names of every spawned monster, sorted.
    pub fn monster_names(&self) -> impl Iterator<Item = &str> {
        self.monsters.keys().map(String::as_str)
    }

    /// Instance names of monsters still standing, sorted.
    pub fn living_monster_names(&self) -> Vec<String> {
        self.monsters
            .keys()
            .filter(|name| self.monster_alive(name))
            .cloned()
            .collect()
    }

    /// Monsters currently at zero health.
    pub fn defeated_monsters(&self) -> Vec<DefeatedMonster> {
        self.monsters
            .keys()
            .filter(|name| !self.monster_alive(name))
            .filter_map(|name| self.defeated(name))
            .collect()
    }

    /// Advance to the next living player, resolving monster turns on the way.
    pub fn next_turn(&mut self) -> RoundReport {
        let report = self.session.run_until_player_turn(&mut self.dice);

        for (actor, turn) in &report.turns {
            let actor_name = self.display_name(*actor);
            match turn {
                NonPlayerTurn::Attacked {
                    identity,
                    resolution,
                    ..
                } => {
                    tracing::debug!(
                        "Encounter {}: {} attacked {} ({}, {} vs {})",
                        self.id,
                        actor_name,
                        identity,
                        resolution.channel,
                        resolution.die_a,
                        resolution.die_b
                    );
                    self.log.extend(resolution.effects.iter().cloned());
                }
                NonPlayerTurn::NoTarget => {
                    tracing::debug!("Encounter {}: {} finds no one to attack", self.id, actor_name);
                    self.log.push(format!("{actor_name} finds no one to attack."));
                }
                NonPlayerTurn::ActorIncapacitated => {
                    tracing::debug!("Encounter {}: {} is down, turn skipped", self.id, actor_name);
                }
            }
        }

        match report.outcome {
            RoundOutcome::PlayerTurn(id) => {
                let name = self.display_name(id);
                self.log.push(format!("It is {name}'s turn."));
            }
            RoundOutcome::Concluded => {
                tracing::info!("Encounter {} concluded: every player is down", self.id);
                self.log
                    .push("Every player is down. The encounter is over.".to_string());
            }
            RoundOutcome::NoActor => {
                tracing::warn!("Encounter {}: no living participant can act", self.id);
            }
            RoundOutcome::Exhausted => {
                tracing::warn!(
                    "Encounter {}: automatic turns exhausted before a player turn",
                    self.id
                );
            }
        }

        report
    }

    /// Attack a monster with freshly rolled dice.
    pub fn player_attack(
        &mut self,
        account: u64,
        monster_name: &str,
        channel: &str,
        armor_piercing: bool,
    ) -> Result<PlayerAttack> {
        let channel = Channel::parse(channel).inspect_err(|e| {
            tracing::warn!("Encounter {}: rejected attack: {}", self.id, e);
        })?;
        let attacker = self.player_id(account)?;
        let defender = self.require_monster(monster_name)?;

        let die_a = self.dice.roll_d20();
        let die_b = self.dice.roll_d20();
        let resolution = self
            .session
            .attack(attacker, defender, die_a, die_b, channel, armor_piercing)
            .inspect_err(|e| {
                tracing::warn!("Encounter {}: rejected attack: {}", self.id, e);
            })?;
        self.log.extend(resolution.effects.iter().cloned());

        let defeated = self
            .session
            .combatant(defender)
            .filter(|combatant| !combatant.is_alive())
            .and_then(|_| self.defeated(monster_name));
        if let Some(defeated) = &defeated {
            tracing::info!(
                "Encounter {}: {} defeated by player {}",
                self.id,
                defeated.instance_name,
                account
            );
            self.log.push(format!("{} is defeated.", defeated.instance_name));
        }

        Ok(PlayerAttack {
            resolution,
            defeated,
        })
    }

    /// Force a monster to target the given player.
    pub fn provoke(&mut self, account: u64, monster_name: &str) -> Result<()> {
        let player = self.player_id(account)?;
        let monster = self.require_monster(monster_name)?;

        self.session.provoke(monster, player).inspect_err(|e| {
            tracing::warn!("Encounter {}: rejected provoke: {}", self.id, e);
        })?;

        let name = self.display_name(player);
        self.log.push(format!("{name} provokes {monster_name}."));
        Ok(())
    }

    fn player_id(&self, account: u64) -> Result<ParticipantId> {
        self.session
            .find_by_identity(&ExternalIdentity::Player(account))
            .ok_or_else(|| {
                tracing::warn!("Encounter {}: unknown player {}", self.id, account);
                RuntimeError::UnknownPlayer(account)
            })
    }

    fn monster_id(&self, name: &str) -> Option<ParticipantId> {
        self.session
            .find_by_identity(&ExternalIdentity::Monster(name.to_string()))
    }

    fn monster_alive(&self, name: &str) -> bool {
        self.monster_id(name)
            .and_then(|id| self.session.combatant(id))
            .is_some_and(Combatant::is_alive)
    }

    fn require_monster(&self, name: &str) -> Result<ParticipantId> {
        self.monster_id(name).ok_or_else(|| {
            tracing::warn!("Encounter {}: unknown monster '{}'", self.id, name);
            RuntimeError::UnknownMonster(name.to_string())
        })
    }

    fn defeated(&self, name: &str) -> Option<DefeatedMonster> {
        let origin = self.monsters.get(name)?;
        Some(DefeatedMonster {
            instance_name: name.to_string(),
            archetype_key: origin.archetype_key.clone(),
            level: origin.level,
        })
    }

    fn display_name(&self, id: ParticipantId) -> String {
        self.session
            .combatant(id)
            .map(|combatant| combatant.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{Attributes, StatBlock};

    fn hero(power: f64) -> Combatant {
        Combatant::player(
            "Ayla",
            &StatBlock::new(5000.0, 10.0, Attributes::new(power, 10.0, 1.0, 1.0, 10.0)),
        )
    }

    fn rabbit(name: &str) -> SpawnedMonster {
        let stats = StatBlock::new(10.0, 5.0, Attributes::new(3.0, 8.0, 2.0, 5.0, 2.0));
        SpawnedMonster {
            archetype_key: "forest.lapin_vegetal".into(),
            level: 1,
            combatant: Combatant::non_player(name, &stats),
        }
    }

    fn encounter() -> Encounter {
        Encounter::new(
            EncounterId(1),
            vec![(10, hero(500.0))],
            vec![rabbit("Lapin#1")],
            AttackRules::STANDARD,
            RandDice::seeded(3),
        )
    }

    #[test]
    fn unknown_targets_are_rejected() {
        let mut encounter = encounter();

        assert!(matches!(
            encounter.player_attack(10, "Lapin#9", "phys", false),
            Err(RuntimeError::UnknownMonster(_))
        ));
        assert!(matches!(
            encounter.player_attack(11, "Lapin#1", "phys", false),
            Err(RuntimeError::UnknownPlayer(11))
        ));
        assert!(matches!(
            encounter.player_attack(10, "Lapin#1", "psychic", false),
            Err(RuntimeError::Channel(_))
        ));
    }

    #[test]
    fn repeated_attacks_defeat_the_monster() {
        let mut encounter = encounter();

        let mut defeated = None;
        for _ in 0..200 {
            let attack = encounter.player_attack(10, "Lapin#1", "phys", false).unwrap();
            if attack.defeated.is_some() {
                defeated = attack.defeated;
                break;
            }
        }

        let defeated = defeated.unwrap();
        assert_eq!(defeated.archetype_key, "forest.lapin_vegetal");
        assert!(encounter.all_monsters_defeated());
        assert!(encounter.living_monster_names().is_empty());
        assert_eq!(encounter.defeated_monsters(), vec![defeated]);
        assert!(encounter.log().iter().any(|line| line == "Lapin#1 is defeated."));
    }

    #[test]
    fn provoke_is_logged() {
        let mut encounter = encounter();
        encounter.provoke(10, "Lapin#1").unwrap();
        assert_eq!(encounter.log().last().unwrap(), "Ayla provokes Lapin#1.");
    }
}
