//! Active encounters keyed by thread id.
//!
//! The map itself sits behind an [`RwLock`]; each encounter has its own
//! [`Mutex`] so commands on one thread never wait on another.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use combat_content::ContentFactory;
use combat_core::{ArchetypeCatalog, CombatRules, Combatant, ProgressRecord};

use crate::bestiary::{MonsterSpec, SpawnedMonster, spawn_monster};
use crate::config::RuntimeConfig;
use crate::dice::RandDice;
use crate::encounter::{DefeatedMonster, Encounter, EncounterId};
use crate::error::{Result, RuntimeError};
use crate::rewards::{KillReward, grant_kill_reward};

/// Shared, serialized access to one encounter.
pub type EncounterHandle = Arc<Mutex<Encounter>>;

/// Owns the static content and every live encounter.
#[derive(Debug)]
pub struct EncounterRegistry {
    catalog: Arc<ArchetypeCatalog>,
    rules: Arc<CombatRules>,
    dice_seed: Option<u64>,
    encounters: RwLock<HashMap<EncounterId, EncounterHandle>>,
}

impl EncounterRegistry {
    pub fn new(catalog: ArchetypeCatalog, rules: CombatRules, dice_seed: Option<u64>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            rules: Arc::new(rules),
            dice_seed,
            encounters: RwLock::new(HashMap::new()),
        }
    }

    /// Load content from `config.content_dir`.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let factory = ContentFactory::new(config.content_dir.clone());
        let catalog = factory.load_catalog()?;
        let rules = factory.load_rules()?;

        tracing::info!(
            "Loaded {} archetypes from {}",
            catalog.len(),
            config.content_dir.display()
        );

        Ok(Self::new(catalog, rules, config.dice_seed))
    }

    pub fn catalog(&self) -> &ArchetypeCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &CombatRules {
        &self.rules
    }

    /// Start an encounter on `id` with the given players and monsters.
    ///
    /// Monsters are spawned in order, each named uniquely among those before it.
    pub async fn open(
        &self,
        id: EncounterId,
        players: Vec<(u64, Combatant)>,
        monsters: &[MonsterSpec],
    ) -> Result<EncounterHandle> {
        let mut encounters = self.encounters.write().await;
        if encounters.contains_key(&id) {
            tracing::warn!("Encounter {} is already active", id);
            return Err(RuntimeError::EncounterAlreadyActive(id));
        }

        let mut spawned: Vec<SpawnedMonster> = Vec::with_capacity(monsters.len());
        for spec in monsters {
            let monster = spawn_monster(
                &self.catalog,
                spec,
                spawned.iter().map(SpawnedMonster::instance_name),
            )?;
            spawned.push(monster);
        }

        let player_count = players.len();
        let monster_count = spawned.len();
        let encounter = Encounter::new(
            id,
            players,
            spawned,
            self.rules.attack,
            RandDice::for_encounter(self.dice_seed, id.0),
        );
        let handle = Arc::new(Mutex::new(encounter));
        encounters.insert(id, Arc::clone(&handle));

        tracing::info!(
            "Encounter {} opened with {} players and {} monsters",
            id,
            player_count,
            monster_count
        );
        Ok(handle)
    }

    pub async fn get(&self, id: EncounterId) -> Result<EncounterHandle> {
        self.encounters
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RuntimeError::UnknownEncounter(id))
    }

    /// Drop an encounter; handles already held stay usable.
    pub async fn close(&self, id: EncounterId) -> Result<()> {
        match self.encounters.write().await.remove(&id) {
            Some(_) => {
                tracing::info!("Encounter {} closed", id);
                Ok(())
            }
            None => Err(RuntimeError::UnknownEncounter(id)),
        }
    }

    /// Active encounter ids in ascending order.
    pub async fn active(&self) -> Vec<EncounterId> {
        let mut ids: Vec<_> = self.encounters.read().await.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Grant experience for a kill under the loaded rules.
    pub fn reward_kill(
        &self,
        progress: &mut ProgressRecord,
        defeated: &DefeatedMonster,
    ) -> Result<KillReward> {
        grant_kill_reward(&self.rules, &self.catalog, progress, defeated)
    }
}
