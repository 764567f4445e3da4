//! Monster archetype catalog loader.

use std::path::Path;

use combat_core::{ArchetypeCatalog, ArchetypeDefinition, CatalogError};

use crate::loaders::{LoadResult, read_file};

/// Loader for the archetype catalog from RON files.
pub struct ArchetypeLoader;

impl ArchetypeLoader {
    /// Load the archetype catalog from a RON file.
    ///
    /// RON format: `Vec<ArchetypeDefinition>`
    ///
    /// Duplicate keys and archetypes without any stat anchor are rejected, so
    /// a loaded catalog can always instantiate every entry.
    pub fn load(path: &Path) -> LoadResult<ArchetypeCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid archetype catalog {}: {}", path.display(), e))
    }

    /// Parse a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<ArchetypeCatalog> {
        let definitions: Vec<ArchetypeDefinition> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse archetype RON: {}", e))?;

        if let Some(empty) = definitions.iter().find(|d| d.anchors.is_empty()) {
            return Err(CatalogError::NoAnchorsDefined {
                key: empty.key.clone(),
            }
            .into());
        }

        Ok(ArchetypeCatalog::from_definitions(definitions)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const WOLF: &str = r#"[
        (
            key: "forest_plains.loup_alpha",
            display_name: "Loup Alpha",
            zone: "forest_plains",
            rarity: Some("Boss"),
            level_min: Some(10),
            level_max: Some(15),
            anchors: {
                10: (health: 150.0, mana: 60.0, power: 30.0, agility: 28.0, mind: 15.0, precision: 25.0, fortitude: 20.0),
                15: (health: 250.0, mana: 90.0, power: 45.0, agility: 38.0, mind: 20.0, precision: 35.0, fortitude: 30.0, base_attack: 12.0),
            },
        ),
    ]"#;

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(WOLF.as_bytes()).unwrap();

        let catalog = ArchetypeLoader::load(file.path()).unwrap();

        let wolf = catalog.require("forest_plains.loup_alpha").unwrap();
        assert_eq!(wolf.available_levels(), vec![10, 15]);
        assert_eq!(wolf.category(), combat_core::TargetCategory::Boss);
        assert_eq!(wolf.anchors[&10].base_attack, 0.0);
        assert_eq!(wolf.anchors[&15].base_attack, 12.0);
    }

    #[test]
    fn rejects_duplicates() {
        let entry = &WOLF[WOLF.find('(').unwrap()..WOLF.rfind(')').unwrap() + 1];
        let doubled = format!("[{entry}, {entry}]");
        let err = ArchetypeLoader::parse(&doubled).unwrap_err();
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn rejects_archetypes_without_anchors() {
        let err = ArchetypeLoader::parse(r#"[(key: "misc.ghost", display_name: "Ghost")]"#)
            .unwrap_err();
        assert!(err.to_string().contains("misc.ghost"));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = ArchetypeLoader::load(Path::new("/nonexistent/archetypes.ron")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/archetypes.ron"));
    }
}
