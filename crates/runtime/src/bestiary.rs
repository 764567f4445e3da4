//! Monster spawning from the archetype catalog.

use combat_core::{ArchetypeCatalog, Combatant, spawn_combatant};

use crate::error::Result;

/// Request for one monster in an encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonsterSpec {
    pub archetype_key: String,
    pub level: i32,
}

impl MonsterSpec {
    pub fn new(archetype_key: impl Into<String>, level: i32) -> Self {
        Self {
            archetype_key: archetype_key.into(),
            level,
        }
    }
}

/// A materialized monster with its unique instance name.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnedMonster {
    pub archetype_key: String,
    /// Effective level after clamping to the authored anchors.
    pub level: u32,
    pub combatant: Combatant,
}

impl SpawnedMonster {
    pub fn instance_name(&self) -> &str {
        &self.combatant.name
    }
}

/// `"{base}#N"` where N is one more than the highest suffix already used for `base`.
pub fn next_instance_name<'a>(base: &str, existing: impl IntoIterator<Item = &'a str>) -> String {
    let highest = existing
        .into_iter()
        .filter_map(|name| name.strip_prefix(base)?.strip_prefix('#')?.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{base}#{}", highest + 1)
}

/// Spawn a monster at full pools, named uniquely among `existing` names.
pub fn spawn_monster<'a>(
    catalog: &ArchetypeCatalog,
    spec: &MonsterSpec,
    existing: impl IntoIterator<Item = &'a str>,
) -> Result<SpawnedMonster> {
    let archetype = catalog.require(&spec.archetype_key)?;
    let name = next_instance_name(&archetype.display_name, existing);
    let (level, combatant) = spawn_combatant(archetype, spec.level, Some(&name))?;

    tracing::debug!(
        "Spawned {} from {} at level {}",
        name,
        archetype.key,
        level
    );

    Ok(SpawnedMonster {
        archetype_key: archetype.key.clone(),
        level,
        combatant,
    })
}
