//! Combat rules loader.

use std::path::Path;

use combat_core::CombatRules;

use crate::loaders::{LoadResult, read_file};

/// Loader for rule tables from TOML files.
pub struct RulesLoader;

impl RulesLoader {
    /// Load rules from a TOML file.
    ///
    /// Every table and field is optional; anything missing keeps its default.
    pub fn load(path: &Path) -> LoadResult<CombatRules> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CombatRules> {
        let rules: CombatRules = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))?;

        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::RewardRules;

    #[test]
    fn empty_file_keeps_defaults() {
        let rules = RulesLoader::parse("").unwrap();
        assert_eq!(rules, CombatRules::default());
    }

    #[test]
    fn partial_overrides() {
        let rules = RulesLoader::parse(
            r#"
            [attack]
            magic_surge_threshold = 18

            [rewards]
            boss_percentage = 20.0

            [rewards.named_overrides]
            "event.kraken" = 30.0
            "#,
        )
        .unwrap();

        assert_eq!(rules.attack.magic_surge_threshold, 18);
        assert_eq!(rules.attack.agility_divisor, 10.0);
        assert_eq!(rules.rewards.boss_percentage, 20.0);
        assert_eq!(rules.rewards.named_overrides.get("event.kraken"), Some(&30.0));
        // A provided table replaces the default map.
        assert!(!rules.rewards.named_overrides.contains_key(RewardRules::HYDRA_KEY));
        assert_eq!(rules.growth.stat_points_per_level, 5);
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = RulesLoader::parse("[attack\nagility_divisor = 10").unwrap_err();
        assert!(err.to_string().contains("Failed to parse rules TOML"));
    }
}
