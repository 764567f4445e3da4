//! Runtime configuration read from the environment.

use std::env;
use std::path::PathBuf;

/// Where content comes from and how dice are seeded.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Directory holding `archetypes.ron` and `rules.toml`.
    pub content_dir: PathBuf,
    /// Fixed seed for reproducible encounters; entropy when unset.
    pub dice_seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            content_dir: combat_content::bundled_data_dir(),
            dice_seed: None,
        }
    }
}

impl RuntimeConfig {
    /// Defaults overridden by `COMBAT_CONTENT_DIR` and `COMBAT_DICE_SEED`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("COMBAT_CONTENT_DIR") {
            config.content_dir = dir;
        }
        if let Some(seed) = read_env::<u64>("COMBAT_DICE_SEED") {
            config.dice_seed = Some(seed);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
