//! Demo encounter settings.
use std::env;

/// What the demo fights and how long it may last.
#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub archetype_key: String,
    pub monster_level: i32,
    pub monster_count: usize,
    pub channel: String,
    pub max_rounds: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            archetype_key: "forest.lapin_vegetal".to_string(),
            monster_level: 1,
            monster_count: 1,
            channel: "phys".to_string(),
            max_rounds: 50,
        }
    }
}

impl DemoConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `COMBAT_DEMO_ARCHETYPE` / `COMBAT_DEMO_LEVEL` / `COMBAT_DEMO_COUNT`
    /// - `COMBAT_DEMO_CHANNEL`
    /// - `COMBAT_DEMO_ROUNDS`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(key) = read_env::<String>("COMBAT_DEMO_ARCHETYPE") {
            config.archetype_key = key;
        }
        if let Some(level) = read_env::<i32>("COMBAT_DEMO_LEVEL") {
            config.monster_level = level;
        }
        if let Some(count) = read_env::<usize>("COMBAT_DEMO_COUNT") {
            config.monster_count = count.max(1);
        }
        if let Some(channel) = read_env::<String>("COMBAT_DEMO_CHANNEL") {
            config.channel = channel;
        }
        if let Some(rounds) = read_env::<usize>("COMBAT_DEMO_ROUNDS") {
            config.max_rounds = rounds.max(1);
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
