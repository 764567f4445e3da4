//! Content factory for loading everything from a data directory.

use std::path::{Path, PathBuf};

use combat_core::{ArchetypeCatalog, CombatRules};

use crate::loaders::{ArchetypeLoader, LoadResult, RulesLoader};

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── archetypes.ron
/// └── rules.toml      (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the content shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(crate::bundled_data_dir())
    }

    /// Load the archetype catalog from `archetypes.ron`.
    pub fn load_catalog(&self) -> LoadResult<ArchetypeCatalog> {
        ArchetypeLoader::load(&self.data_dir.join("archetypes.ron"))
    }

    /// Load rule tables from `rules.toml`, or the defaults when the file is absent.
    pub fn load_rules(&self) -> LoadResult<CombatRules> {
        let path = self.data_dir.join("rules.toml");
        if !path.exists() {
            return Ok(CombatRules::default());
        }
        RulesLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
