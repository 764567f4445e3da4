//! Command-line combat driver.
//!
//! Loads content, opens one encounter between a fresh character and the
//! configured monsters, then alternates monster turns and player attacks
//! until one side is down, printing every effect line.
//!
//! ```bash
//! COMBAT_DICE_SEED=7 COMBAT_DEMO_ARCHETYPE=misc.golem COMBAT_DEMO_LEVEL=5 \
//!     cargo run -p combat-cli
//! ```
mod config;

use anyhow::Result;
use combat_core::{Combatant, ProgressRecord, RoundOutcome, starting_stats};
use combat_runtime::{EncounterId, EncounterRegistry, MonsterSpec, RuntimeConfig};

use config::DemoConfig;

const PLAYER_ACCOUNT: u64 = 1;
const ENCOUNTER: EncounterId = EncounterId(1);

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runtime_config = RuntimeConfig::from_env();
    let demo = DemoConfig::from_env();
    tracing::info!("Content directory: {}", runtime_config.content_dir.display());
    tracing::info!("Dice seed: {:?}", runtime_config.dice_seed);

    let registry = EncounterRegistry::from_config(&runtime_config)?;
    run_demo(&registry, &demo).await
}

async fn run_demo(registry: &EncounterRegistry, demo: &DemoConfig) -> Result<()> {
    let mut progress = ProgressRecord::new_character(&registry.rules().growth);
    let hero = Combatant::player("Hero", &starting_stats());
    let monsters =
        vec![MonsterSpec::new(demo.archetype_key.as_str(), demo.monster_level); demo.monster_count];

    let handle = registry
        .open(ENCOUNTER, vec![(PLAYER_ACCOUNT, hero)], &monsters)
        .await?;
    let mut encounter = handle.lock().await;
    let mut printed = 0;

    for participant in encounter.session().participants() {
        println!("{}", participant.combatant.health_line());
    }

    for _ in 0..demo.max_rounds {
        let report = encounter.next_turn();
        printed = print_new_lines(encounter.log(), printed);
        if !matches!(report.outcome, RoundOutcome::PlayerTurn(_)) {
            break;
        }

        let Some(target) = encounter.living_monster_names().into_iter().next() else {
            break;
        };
        encounter.player_attack(PLAYER_ACCOUNT, &target, &demo.channel, false)?;
        printed = print_new_lines(encounter.log(), printed);

        if encounter.all_monsters_defeated() {
            break;
        }
    }

    if encounter.all_monsters_defeated() {
        println!("Victory.");
    }
    // Kills count whether they came from an attack or a counter.
    for defeated in encounter.defeated_monsters() {
        let reward = registry.reward_kill(&mut progress, &defeated)?;
        println!(
            "{}: +{} xp ({})",
            defeated.instance_name, reward.award.amount, reward.award.explanation
        );
        if reward.level_up.leveled_up() {
            println!("Level up! Hero is now level {}.", progress.level);
        }
    }
    drop(encounter);

    registry.close(ENCOUNTER).await?;
    println!(
        "Hero: level {}, {}/{} xp, {} stat points",
        progress.level, progress.xp, progress.xp_next, progress.stat_points
    );
    Ok(())
}

/// Print log lines from `from` onward and return the new high-water mark.
fn print_new_lines(log: &[String], from: usize) -> usize {
    for line in log.iter().skip(from) {
        println!("{line}");
    }
    log.len()
}
