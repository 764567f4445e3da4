use super::{CombatSession, Participant, SessionError};

/// Lifecycle of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionPhase {
    /// No turn has been advanced yet.
    AwaitingFirstTurn,
    /// The participant at this roster index is acting.
    ActiveTurn(usize),
    /// No player participant is alive.
    Concluded,
}

/// Turn cursor methods for CombatSession.
impl CombatSession {
    /// Participant whose turn it is, `None` on an empty roster.
    pub fn current_actor(&self) -> Option<&Participant> {
        self.roster.get(self.cursor)
    }

    /// Like [`Self::current_actor`] for callers that treat an empty roster as an error.
    pub fn require_actor(&self) -> Result<&Participant, SessionError> {
        self.current_actor().ok_or(SessionError::EmptyRoster)
    }

    /// Roster index of the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_concluded() {
            SessionPhase::Concluded
        } else if !self.started {
            SessionPhase::AwaitingFirstTurn
        } else {
            SessionPhase::ActiveTurn(self.cursor)
        }
    }

    /// True once a non-empty roster has no living player left.
    pub fn is_concluded(&self) -> bool {
        !self.roster.is_empty() && !self.roster.iter().any(|p| p.is_player() && p.is_alive())
    }

    /// Move the cursor to the next living participant.
    ///
    /// Steps forward modulo the roster length, skipping incapacitated
    /// participants, for at most `len + 1` steps. Returns `false` on an empty
    /// roster or when nobody is alive.
    pub fn advance_turn(&mut self) -> bool {
        let len = self.roster.len();
        if len == 0 {
            return false;
        }
        self.started = true;

        for _ in 0..=len {
            self.cursor = (self.cursor + 1) % len;
            if self.roster[self.cursor].is_alive() {
                return true;
            }
        }
        false
    }
}
