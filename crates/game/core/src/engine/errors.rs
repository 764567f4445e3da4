//! Errors surfaced by the turn engine.

use super::ParticipantId;
use crate::error::{CombatErrorKind, ErrorSeverity};

/// Rejected session commands.
///
/// An empty roster is a valid transient state, so the query methods report
/// "no actor" instead; only [`super::CombatSession::require_actor`] raises
/// [`SessionError::EmptyRoster`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionError {
    #[error("the encounter has no participants")]
    EmptyRoster,

    #[error("participant {0} is not part of this encounter")]
    UnknownParticipant(ParticipantId),

    #[error("participant {0} is not engine-controlled")]
    NotNonPlayer(ParticipantId),

    #[error("participant {0} is not a player")]
    NotPlayer(ParticipantId),

    #[error("participant {0} is incapacitated")]
    Incapacitated(ParticipantId),

    #[error("participant {0} cannot target itself")]
    SelfTarget(ParticipantId),
}

impl CombatErrorKind for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SessionError::EmptyRoster => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SessionError::EmptyRoster => "EMPTY_ROSTER",
            SessionError::UnknownParticipant(_) => "UNKNOWN_PARTICIPANT",
            SessionError::NotNonPlayer(_) => "NOT_NON_PLAYER",
            SessionError::NotPlayer(_) => "NOT_PLAYER",
            SessionError::Incapacitated(_) => "INCAPACITATED",
            SessionError::SelfTarget(_) => "SELF_TARGET",
        }
    }
}
