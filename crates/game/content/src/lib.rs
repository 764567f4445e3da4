//! Data-driven content and loaders.
//!
//! This crate houses the static combat content and the loaders that read it:
//! - Monster archetypes (data-driven via RON)
//! - Combat rule tables (data-driven via TOML)
//!
//! Content is loaded once at startup and never appears in encounter state.
//! Loaders deserialize combat-core types directly through its `serde` feature.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ArchetypeLoader, ContentFactory, LoadResult, RulesLoader};

use std::path::PathBuf;

/// Directory holding the content shipped with this crate.
pub fn bundled_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}
