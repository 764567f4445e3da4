//! Encounter turn engine.
//!
//! [`CombatSession`] owns the roster of one encounter for its whole duration.
//! Resolvers borrow combatants mutably out of the roster, so the pools a
//! caller persists are always the pools the engine mutated.
mod errors;
mod round;
mod targeting;
mod turns;

use std::fmt;

pub use errors::SessionError;
pub use round::{RoundOutcome, RoundReport};
pub use targeting::NonPlayerTurn;
pub use turns::SessionPhase;

use crate::config::AttackRules;
use crate::stats::Combatant;

/// Stable handle of a participant, assigned in load order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticipantId(pub u32);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Key the collaborator uses to persist a participant's pools.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExternalIdentity {
    /// Player account id.
    Player(u64),
    /// Unique monster instance name within the encounter.
    Monster(String),
}

impl fmt::Display for ExternalIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExternalIdentity::Player(account) => write!(f, "player:{account}"),
            ExternalIdentity::Monster(name) => write!(f, "monster:{name}"),
        }
    }
}

/// One roster slot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    pub id: ParticipantId,
    pub identity: ExternalIdentity,
    pub combatant: Combatant,
}

impl Participant {
    pub fn is_player(&self) -> bool {
        !self.combatant.non_player
    }

    pub fn is_alive(&self) -> bool {
        self.combatant.is_alive()
    }
}

/// Authoritative in-memory state of one encounter.
///
/// Single-writer: callers serialize access per session.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatSession {
    roster: Vec<Participant>,
    cursor: usize,
    started: bool,
    rules: AttackRules,
}

impl CombatSession {
    /// Build a session from participants in load order.
    ///
    /// The roster is sorted once by descending agility. Ties keep load order.
    pub fn new(entries: impl IntoIterator<Item = (ExternalIdentity, Combatant)>) -> Self {
        let mut roster: Vec<Participant> = entries
            .into_iter()
            .enumerate()
            .map(|(index, (identity, combatant))| Participant {
                id: ParticipantId(index as u32),
                identity,
                combatant,
            })
            .collect();

        // `sort_by` is stable.
        roster.sort_by(|a, b| {
            b.combatant
                .attributes
                .agility
                .total_cmp(&a.combatant.attributes.agility)
        });

        Self {
            roster,
            cursor: 0,
            started: false,
            rules: AttackRules::STANDARD,
        }
    }

    /// Replace the attack constants used for every exchange in this session.
    pub fn with_rules(mut self, rules: AttackRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> &AttackRules {
        &self.rules
    }

    /// Participants in turn order.
    pub fn participants(&self) -> &[Participant] {
        &self.roster
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.roster.iter().find(|p| p.id == id)
    }

    pub fn combatant(&self, id: ParticipantId) -> Option<&Combatant> {
        self.participant(id).map(|p| &p.combatant)
    }

    pub fn identity_of(&self, id: ParticipantId) -> Option<&ExternalIdentity> {
        self.participant(id).map(|p| &p.identity)
    }

    pub fn find_by_identity(&self, identity: &ExternalIdentity) -> Option<ParticipantId> {
        self.roster
            .iter()
            .find(|p| &p.identity == identity)
            .map(|p| p.id)
    }

    /// Living player-controlled participants, in turn order.
    pub fn living_players(&self) -> Vec<ParticipantId> {
        self.roster
            .iter()
            .filter(|p| p.is_player() && p.is_alive())
            .map(|p| p.id)
            .collect()
    }

    /// Living engine-controlled participants, in turn order.
    pub fn living_non_players(&self) -> Vec<ParticipantId> {
        self.roster
            .iter()
            .filter(|p| !p.is_player() && p.is_alive())
            .map(|p| p.id)
            .collect()
    }

    /// True once every non-player participant is down. False without any.
    pub fn all_non_players_defeated(&self) -> bool {
        let mut non_players = self.roster.iter().filter(|p| !p.is_player()).peekable();
        non_players.peek().is_some() && non_players.all(|p| !p.is_alive())
    }

    fn index_of(&self, id: ParticipantId) -> Result<usize, SessionError> {
        self.roster
            .iter()
            .position(|p| p.id == id)
            .ok_or(SessionError::UnknownParticipant(id))
    }

    /// Two distinct roster slots borrowed mutably at once.
    fn pair_mut(&mut self, first: usize, second: usize) -> (&mut Participant, &mut Participant) {
        debug_assert_ne!(first, second);
        if first < second {
            let (head, tail) = self.roster.split_at_mut(second);
            (&mut head[first], &mut tail[0])
        } else {
            let (head, tail) = self.roster.split_at_mut(first);
            (&mut tail[0], &mut head[second])
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{monster, player};
    use super::*;

    #[test]
    fn roster_sorted_by_agility_with_stable_ties() {
        let session = CombatSession::new([
            player(1, "Ayla", 10.0, 100.0),
            monster("Wolf#1", 25.0, 100.0),
            player(2, "Brann", 10.0, 100.0),
            monster("Wolf#2", 10.0, 100.0),
        ]);

        let names: Vec<&str> = session
            .participants()
            .iter()
            .map(|p| p.combatant.name.as_str())
            .collect();
        assert_eq!(names, ["Wolf#1", "Ayla", "Brann", "Wolf#2"]);
    }

    #[test]
    fn ids_follow_load_order_and_identities_round_trip() {
        let session =
            CombatSession::new([player(7, "Ayla", 5.0, 100.0), monster("Wolf#1", 9.0, 100.0)]);

        let wolf = ExternalIdentity::Monster("Wolf#1".into());
        let id = session.find_by_identity(&wolf).unwrap();
        assert_eq!(id, ParticipantId(1));
        assert_eq!(session.identity_of(id), Some(&wolf));
        assert_eq!(id.to_string(), "#1");
        assert_eq!(session.find_by_identity(&ExternalIdentity::Player(8)), None);
    }

    #[test]
    fn side_queries() {
        let session = CombatSession::new([
            player(1, "Ayla", 10.0, 100.0),
            player(2, "Brann", 5.0, 0.0),
            monster("Wolf#1", 8.0, 0.0),
        ]);

        assert_eq!(session.living_players(), [ParticipantId(0)]);
        assert!(session.living_non_players().is_empty());
        assert!(session.all_non_players_defeated());

        let players_only = CombatSession::new([player(1, "Ayla", 10.0, 100.0)]);
        assert!(!players_only.all_non_players_defeated());
    }
}
