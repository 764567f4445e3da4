//! Attack resolution result and the resolver entry points.

use arrayvec::ArrayVec;

use super::channel::Channel;
use super::damage::{calculate_damage, counter_damage, defense_value, fortitude_term};
use super::hit::{check_hit, to_hit_score};
use crate::config::AttackRules;
use crate::stats::Combatant;

/// What happened in an exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// The attacker hit; the defender took damage (possibly zero).
    Hit,
    /// The attacker missed and the defender struck back.
    Countered,
    /// The attacker missed and nobody took damage.
    Blocked,
}

/// Result of one opposed-roll exchange.
///
/// Transient: produced and consumed within a single resolution call. The
/// caller persists the pools it reads back from the combatants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResolution {
    pub outcome: AttackOutcome,
    pub channel: Channel,
    pub armor_piercing: bool,

    pub die_a: u32,
    pub die_b: u32,
    pub hit_a: f64,
    pub hit_b: f64,

    /// Attribute value that drove damage.
    pub attack_stat: f64,
    pub vit_term: f64,

    /// Damage dealt to the defender (hit only).
    pub damage: Option<f64>,
    /// Defense value computed on a miss.
    pub defense_value: Option<f64>,
    /// Damage returned to the attacker (counter only).
    pub counter_damage: Option<f64>,

    /// Primary outcome line, then the resulting-health line when a pool changed.
    pub effects: ArrayVec<String, 2>,
}

impl AttackResolution {
    pub fn is_hit(&self) -> bool {
        self.outcome == AttackOutcome::Hit
    }
}

/// Resolve an attack with the standard rule constants.
pub fn resolve_attack(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    die_a: u32,
    die_b: u32,
    channel: Channel,
    armor_piercing: bool,
) -> AttackResolution {
    resolve_attack_with(
        &AttackRules::STANDARD,
        attacker,
        defender,
        die_a,
        die_b,
        channel,
        armor_piercing,
    )
}

/// Resolve a complete exchange, mutating health in place.
///
/// # Sequence
///
/// 1. `hit_a = die_a + AGI_a / 10`, `hit_b = die_b + AGI_b / 10`
/// 2. Hit (`hit_a > hit_b`): defender loses the channel-scaled damage
/// 3. Miss: a positive defense value is returned to the attacker as
///    counter-damage; otherwise nobody is hurt
///
/// Both health pools stay within `[0, maximum]`.
pub fn resolve_attack_with(
    rules: &AttackRules,
    attacker: &mut Combatant,
    defender: &mut Combatant,
    die_a: u32,
    die_b: u32,
    channel: Channel,
    armor_piercing: bool,
) -> AttackResolution {
    let hit_a = to_hit_score(die_a, attacker.attributes.agility, rules);
    let hit_b = to_hit_score(die_b, defender.attributes.agility, rules);
    let attack_stat = attacker.attributes.get(channel.attack_attribute());
    let vit_term = fortitude_term(defender.attributes.fortitude, armor_piercing, rules);

    let mut resolution = AttackResolution {
        outcome: AttackOutcome::Blocked,
        channel,
        armor_piercing,
        die_a,
        die_b,
        hit_a,
        hit_b,
        attack_stat,
        vit_term,
        damage: None,
        defense_value: None,
        counter_damage: None,
        effects: ArrayVec::new(),
    };

    if check_hit(hit_a, hit_b) {
        let damage = calculate_damage(hit_a, hit_b, attack_stat, vit_term, channel, die_a, rules);
        defender.health.damage(damage);

        resolution.outcome = AttackOutcome::Hit;
        resolution.damage = Some(damage);
        resolution
            .effects
            .push(hit_line(channel, &attacker.name, &defender.name, damage));
        resolution.effects.push(defender.health_line());
        return resolution;
    }

    let defense = defense_value(hit_a, hit_b, attack_stat, vit_term);
    resolution.defense_value = Some(defense);

    match counter_damage(defense, channel, rules) {
        Some(counter) => {
            attacker.health.damage(counter);

            resolution.outcome = AttackOutcome::Countered;
            resolution.counter_damage = Some(counter);
            resolution
                .effects
                .push(counter_line(channel, &attacker.name, &defender.name, counter));
            resolution.effects.push(attacker.health_line());
        }
        None => {
            resolution
                .effects
                .push(block_line(channel, &attacker.name, &defender.name));
        }
    }

    resolution
}

fn hit_line(channel: Channel, attacker: &str, defender: &str, damage: f64) -> String {
    let verb = match channel {
        Channel::Physical => "strikes",
        Channel::Magic => "casts a spell on",
        Channel::Ranged => "shoots",
    };
    format!("{attacker} {verb} {defender} and deals {damage:.2} damage.")
}

fn counter_line(channel: Channel, attacker: &str, defender: &str, counter: f64) -> String {
    match channel {
        Channel::Physical => format!(
            "{defender} counters the attack. {attacker} takes {counter:.2} recoil damage."
        ),
        Channel::Magic => format!(
            "{defender} resists the spell. {attacker} suffers {counter:.2} reflected magic damage."
        ),
        Channel::Ranged => {
            format!("{defender} dodges and strikes back. {attacker} takes {counter:.2} damage.")
        }
    }
}

fn block_line(channel: Channel, attacker: &str, defender: &str) -> String {
    match channel {
        Channel::Physical => {
            format!("{defender} blocks {attacker}'s attack. No damage in return.")
        }
        Channel::Magic => format!("{defender} dispels {attacker}'s spell. No damage in return."),
        Channel::Ranged => format!("{defender} evades {attacker}'s shot. No damage in return."),
    }
}
