//! Unified error type surfaced by the runtime API.
//!
//! Wraps engine, catalog and content failures so callers can bubble them up
//! with consistent context.
use thiserror::Error;

use combat_core::{CatalogError, ChannelError, SessionError};

use crate::encounter::EncounterId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("encounter {0} is already active")]
    EncounterAlreadyActive(EncounterId),

    #[error("no active encounter {0}")]
    UnknownEncounter(EncounterId),

    #[error("player {0} is not part of this encounter")]
    UnknownPlayer(u64),

    #[error("no monster named '{0}' in this encounter")]
    UnknownMonster(String),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error(transparent)]
    Content(#[from] anyhow::Error),
}
