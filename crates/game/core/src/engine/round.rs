//! Automatic resolution of non-player turns.

use super::{CombatSession, NonPlayerTurn, ParticipantId};
use crate::env::DiceOracle;

/// How a round of automatic resolution stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundOutcome {
    /// A living player holds the turn.
    PlayerTurn(ParticipantId),
    /// Every player is down.
    Concluded,
    /// The roster is empty or nobody is alive.
    NoActor,
    /// The automatic-turn bound was reached without reaching a player.
    ///
    /// Only a guard: a living player always stops the loop earlier.
    Exhausted,
}

/// Non-player turns resolved during one call, in order, and why it stopped.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    pub turns: Vec<(ParticipantId, NonPlayerTurn)>,
    pub outcome: RoundOutcome,
}

impl RoundReport {
    fn stop(turns: Vec<(ParticipantId, NonPlayerTurn)>, outcome: RoundOutcome) -> Self {
        Self { turns, outcome }
    }
}

impl CombatSession {
    /// Advance and auto-resolve non-player turns until a living player acts.
    ///
    /// Resolves at most `len` automatic turns per call, so a roster without
    /// living players cannot spin.
    pub fn run_until_player_turn(&mut self, dice: &mut dyn DiceOracle) -> RoundReport {
        let mut turns = Vec::new();

        if !self.advance_turn() {
            return RoundReport::stop(turns, RoundOutcome::NoActor);
        }

        loop {
            let Some(actor) = self.current_actor() else {
                return RoundReport::stop(turns, RoundOutcome::NoActor);
            };
            let id = actor.id;
            if actor.is_player() {
                return RoundReport::stop(turns, RoundOutcome::PlayerTurn(id));
            }
            if turns.len() >= self.len() {
                return RoundReport::stop(turns, RoundOutcome::Exhausted);
            }

            match self.execute_non_player_turn(id, dice) {
                Ok(turn) => turns.push((id, turn)),
                // The cursor only rests on known non-players here.
                Err(_) => return RoundReport::stop(turns, RoundOutcome::NoActor),
            }

            if self.is_concluded() {
                return RoundReport::stop(turns, RoundOutcome::Concluded);
            }
            if !self.advance_turn() {
                return RoundReport::stop(turns, RoundOutcome::NoActor);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{monster, player};
    use super::super::SessionPhase;
    use super::*;
    use crate::env::{PcgDice, ScriptedDice};

    #[test]
    fn stops_on_the_next_living_player() {
        // Order: Ayla, Wolf#1, Wolf#2, Brann
        let mut session = CombatSession::new([
            player(1, "Ayla", 40.0, 100.0),
            monster("Wolf#1", 30.0, 100.0),
            monster("Wolf#2", 20.0, 100.0),
            player(2, "Brann", 10.0, 100.0),
        ]);
        // Every roll ties at 1 vs 1; agility decides, nobody falls.
        let mut dice = ScriptedDice::d20([1]);

        let report = session.run_until_player_turn(&mut dice);

        assert_eq!(report.outcome, RoundOutcome::PlayerTurn(ParticipantId(3)));
        let actors: Vec<ParticipantId> = report.turns.iter().map(|(id, _)| *id).collect();
        assert_eq!(actors, [ParticipantId(1), ParticipantId(2)]);
        assert!(
            report
                .turns
                .iter()
                .all(|(_, turn)| matches!(turn, NonPlayerTurn::Attacked { .. }))
        );
        assert_eq!(session.phase(), SessionPhase::ActiveTurn(3));
    }

    #[test]
    fn concludes_when_the_last_player_falls() {
        // Order: Ogre, Ayla
        let mut session = CombatSession::new([
            player(1, "Ayla", 1.0, 1.0),
            monster("Ogre", 50.0, 100.0),
        ]);
        let ayla = ParticipantId(0);
        let ogre = ParticipantId(1);
        session.provoke(ogre, ayla).unwrap();

        // Move to Ayla so the round starts on the ogre.
        assert!(session.advance_turn());
        assert_eq!(session.current_actor().unwrap().id, ayla);

        let mut dice = ScriptedDice::d20([20, 1]);
        let report = session.run_until_player_turn(&mut dice);

        assert_eq!(report.outcome, RoundOutcome::Concluded);
        assert_eq!(report.turns.len(), 1);
        assert_eq!(report.turns[0].0, ogre);
        assert!(session.is_concluded());
        assert_eq!(session.phase(), SessionPhase::Concluded);
        assert!(!session.combatant(ayla).unwrap().is_alive());
    }

    #[test]
    fn concludes_after_the_first_turn_without_players() {
        let mut session = CombatSession::new([
            monster("Slime#1", 3.0, 100.0),
            monster("Slime#2", 2.0, 100.0),
            monster("Slime#3", 1.0, 100.0),
        ]);
        let mut dice = ScriptedDice::d20([10]);

        let report = session.run_until_player_turn(&mut dice);

        assert_eq!(report.outcome, RoundOutcome::Concluded);
        assert_eq!(report.turns, [(ParticipantId(1), NonPlayerTurn::NoTarget)]);
        assert_eq!(session.phase(), SessionPhase::Concluded);
    }

    #[test]
    fn seeded_dice_replay_the_same_round() {
        let roster = || {
            CombatSession::new([
                player(1, "Ayla", 12.0, 100.0),
                monster("Wolf#1", 30.0, 100.0),
                player(2, "Brann", 20.0, 100.0),
                monster("Wolf#2", 25.0, 100.0),
            ])
        };

        let mut first = roster();
        let mut second = roster();
        let a = first.run_until_player_turn(&mut PcgDice::new(99));
        let b = second.run_until_player_turn(&mut PcgDice::new(99));

        assert_eq!(a, b);
        assert_eq!(first.participants(), second.participants());
    }

    #[test]
    fn nothing_to_do_on_an_empty_roster() {
        let mut session = CombatSession::new(Vec::new());
        let mut dice = ScriptedDice::d20([10]);
        let report = session.run_until_player_turn(&mut dice);
        assert_eq!(report.outcome, RoundOutcome::NoActor);
        assert!(report.turns.is_empty());
    }
}
