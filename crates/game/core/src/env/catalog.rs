//! Archetype definitions and the immutable catalog holding them.
//!
//! The catalog is static content loaded once at process start. It never
//! appears in encounter state; monsters are materialized from it through
//! [`super::spawn_combatant`].

use std::collections::BTreeMap;

use crate::error::{CombatErrorKind, ErrorSeverity};
use crate::progression::TargetCategory;
use crate::stats::StatBlock;

/// Errors raised while registering or instantiating archetypes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("archetype '{key}' has no stat anchors defined")]
    NoAnchorsDefined { key: String },

    #[error("archetype '{key}' is already registered")]
    DuplicateArchetype { key: String },

    #[error("unknown archetype '{key}'")]
    UnknownArchetype { key: String },
}

impl CombatErrorKind for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoAnchorsDefined { .. } | Self::DuplicateArchetype { .. } => {
                ErrorSeverity::Fatal
            }
            Self::UnknownArchetype { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoAnchorsDefined { .. } => "NO_ANCHORS_DEFINED",
            Self::DuplicateArchetype { .. } => "DUPLICATE_ARCHETYPE",
            Self::UnknownArchetype { .. } => "UNKNOWN_ARCHETYPE",
        }
    }
}

/// A named template for a class of monster, parameterized by level.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeDefinition {
    /// Stable identifier, e.g. `forest.lapin_vegetal`.
    pub key: String,
    pub display_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub zone: String,
    /// Free-form rarity label from content (`"Boss"`, `"Élite"`, `"event"`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub rarity: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub drops: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub abilities: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub level_min: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub level_max: Option<u32>,
    /// Authored (level → stats) control points.
    #[cfg_attr(feature = "serde", serde(default))]
    pub anchors: BTreeMap<u32, StatBlock>,
}

impl ArchetypeDefinition {
    pub fn new(key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            zone: String::new(),
            rarity: None,
            tags: Vec::new(),
            drops: Vec::new(),
            abilities: Vec::new(),
            level_min: None,
            level_max: None,
            anchors: BTreeMap::new(),
        }
    }

    pub fn with_anchor(mut self, level: u32, stats: StatBlock) -> Self {
        self.anchors.insert(level, stats);
        self
    }

    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Anchor levels in ascending order.
    pub fn available_levels(&self) -> Vec<u32> {
        self.anchors.keys().copied().collect()
    }

    /// Explicit level bounds when authored, otherwise the anchor range.
    pub fn level_bounds(&self) -> Option<(u32, u32)> {
        let lowest = self.anchors.keys().next().copied();
        let highest = self.anchors.keys().next_back().copied();
        Some((self.level_min.or(lowest)?, self.level_max.or(highest)?))
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = normalize_label(tag);
        self.labels().any(|label| label == wanted)
    }

    /// Reward category from rarity and tags; the highest rank found wins.
    pub fn category(&self) -> TargetCategory {
        self.labels()
            .filter_map(|label| match label.as_str() {
                "boss" => Some(TargetCategory::Boss),
                "elite" => Some(TargetCategory::Elite),
                "rare" => Some(TargetCategory::Rare),
                _ => None,
            })
            .max()
            .unwrap_or(TargetCategory::Common)
    }

    /// Event encounters are tagged `event` or live under an `event` key namespace.
    pub fn is_event(&self) -> bool {
        let namespace = self.key.split('.').next().unwrap_or_default();
        namespace == "event" || namespace == "event_secret" || self.has_tag("event")
    }

    fn labels(&self) -> impl Iterator<Item = String> + '_ {
        self.rarity
            .iter()
            .chain(self.tags.iter())
            .map(|label| normalize_label(label))
    }
}

/// Lowercases and folds the accented spellings used by authored content.
fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase().replace(['é', 'è', 'ê'], "e")
}

/// Immutable key → archetype registry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArchetypeCatalog {
    archetypes: BTreeMap<String, ArchetypeDefinition>,
}

impl ArchetypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog, rejecting duplicate keys.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ArchetypeDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.register(definition)?;
        }
        Ok(catalog)
    }

    pub fn register(&mut self, definition: ArchetypeDefinition) -> Result<(), CatalogError> {
        if self.archetypes.contains_key(&definition.key) {
            return Err(CatalogError::DuplicateArchetype {
                key: definition.key,
            });
        }
        self.archetypes.insert(definition.key.clone(), definition);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&ArchetypeDefinition> {
        self.archetypes.get(key)
    }

    pub fn require(&self, key: &str) -> Result<&ArchetypeDefinition, CatalogError> {
        self.get(key).ok_or_else(|| CatalogError::UnknownArchetype {
            key: key.to_string(),
        })
    }

    /// All archetypes sorted by key.
    pub fn all(&self) -> impl Iterator<Item = &ArchetypeDefinition> {
        self.archetypes.values()
    }

    /// Archetypes authored for `zone`, sorted by key.
    pub fn in_zone<'a>(&'a self, zone: &'a str) -> impl Iterator<Item = &'a ArchetypeDefinition> {
        self.all().filter(move |archetype| archetype.zone == zone)
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Attributes;

    fn stats(health: f64) -> StatBlock {
        StatBlock::new(health, 0.0, Attributes::new(5.0, 5.0, 5.0, 5.0, 5.0))
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut catalog = ArchetypeCatalog::new();
        catalog
            .register(ArchetypeDefinition::new("forest.slime", "Slime"))
            .unwrap();

        let err = catalog
            .register(ArchetypeDefinition::new("forest.slime", "Other Slime"))
            .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateArchetype {
                key: "forest.slime".into()
            }
        );
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
    }

    #[test]
    fn all_is_sorted_by_key() {
        let catalog = ArchetypeCatalog::from_definitions([
            ArchetypeDefinition::new("zone.b", "B"),
            ArchetypeDefinition::new("zone.a", "A"),
        ])
        .unwrap();

        let keys: Vec<_> = catalog.all().map(|a| a.key.as_str()).collect();
        assert_eq!(keys, ["zone.a", "zone.b"]);
        assert_eq!(catalog.in_zone("zone").count(), 0);
        assert!(matches!(
            catalog.require("zone.c"),
            Err(CatalogError::UnknownArchetype { .. })
        ));
    }

    #[test]
    fn category_from_rarity_and_tags() {
        let elite = ArchetypeDefinition::new("misc.roi_squelette", "Roi").with_rarity("Élite");
        assert_eq!(elite.category(), TargetCategory::Elite);

        let boss = ArchetypeDefinition::new("forest.alpha", "Alpha")
            .with_rarity("rare")
            .with_tag("BOSS");
        assert_eq!(boss.category(), TargetCategory::Boss);

        let plain = ArchetypeDefinition::new("forest.rabbit", "Rabbit").with_rarity("normal");
        assert_eq!(plain.category(), TargetCategory::Common);
    }

    #[test]
    fn event_detection() {
        assert!(ArchetypeDefinition::new("event.kraken", "Kraken").is_event());
        assert!(ArchetypeDefinition::new("event_secret.clown", "Clown").is_event());
        assert!(
            ArchetypeDefinition::new("misc.x", "X")
                .with_rarity("Event")
                .is_event()
        );
        assert!(!ArchetypeDefinition::new("eventide.x", "X").is_event());
    }

    #[test]
    fn level_bounds_fall_back_to_anchors() {
        let def = ArchetypeDefinition::new("forest.wolf", "Wolf")
            .with_anchor(3, stats(40.0))
            .with_anchor(10, stats(90.0));
        assert_eq!(def.level_bounds(), Some((3, 10)));
        assert_eq!(def.available_levels(), vec![3, 10]);

        let mut explicit = def.clone();
        explicit.level_max = Some(12);
        assert_eq!(explicit.level_bounds(), Some((3, 12)));

        assert_eq!(
            ArchetypeDefinition::new("misc.empty", "Empty").level_bounds(),
            None
        );
    }
}
