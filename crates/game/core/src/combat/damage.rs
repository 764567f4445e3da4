//! Damage, defense and counter-damage formulas.

use super::channel::Channel;
use crate::config::AttackRules;

/// Fortitude reduction term.
///
/// ```text
/// vit_term = fortitude / fortitude_divisor           (regular)
/// vit_term = fortitude / piercing_fortitude_divisor  (armor piercing)
/// ```
pub fn fortitude_term(fortitude: f64, armor_piercing: bool, rules: &AttackRules) -> f64 {
    let divisor = if armor_piercing {
        rules.piercing_fortitude_divisor
    } else {
        rules.fortitude_divisor
    };
    fortitude / divisor
}

/// Damage dealt on a hit.
///
/// # Formula
///
/// ```text
/// damage = ((hit_a - hit_b) + attack_stat) * channel_multiplier - vit_term
/// final  = max(damage, 0)
/// ```
pub fn calculate_damage(
    hit_a: f64,
    hit_b: f64,
    attack_stat: f64,
    vit_term: f64,
    channel: Channel,
    die_a: u32,
    rules: &AttackRules,
) -> f64 {
    let raw = (hit_a - hit_b) + attack_stat;
    let scaled = raw * channel.hit_multiplier(die_a, rules);
    (scaled - vit_term).max(0.0)
}

/// Defense value on a miss; positive values turn into a counterattack.
///
/// ```text
/// defense = (hit_b - hit_a) + vit_term - attack_stat
/// ```
pub fn defense_value(hit_a: f64, hit_b: f64, attack_stat: f64, vit_term: f64) -> f64 {
    (hit_b - hit_a) + vit_term - attack_stat
}

/// Counter-damage taken by the attacker, `None` for a pure block/evade.
pub fn counter_damage(defense: f64, channel: Channel, rules: &AttackRules) -> Option<f64> {
    if defense <= 0.0 {
        return None;
    }
    Some((defense * channel.counter_multiplier(rules)).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armor_piercing_shrinks_the_fortitude_term() {
        let rules = AttackRules::STANDARD;
        assert_eq!(fortitude_term(30.0, false, &rules), 3.0);
        assert_eq!(fortitude_term(30.0, true, &rules), 0.3);
    }

    #[test]
    fn damage_never_goes_negative() {
        let rules = AttackRules::STANDARD;
        let damage = calculate_damage(5.1, 5.0, 0.0, 10.0, Channel::Physical, 5, &rules);
        assert_eq!(damage, 0.0);
    }

    #[test]
    fn ranged_damage_is_scaled_before_reduction() {
        let rules = AttackRules::STANDARD;
        // ((12 - 2) + 10) * 0.95 - 1 = 18
        let damage = calculate_damage(12.0, 2.0, 10.0, 1.0, Channel::Ranged, 11, &rules);
        assert!((damage - 18.0).abs() < 1e-9);
    }

    #[test]
    fn counters_only_on_positive_defense() {
        let rules = AttackRules::STANDARD;
        assert_eq!(counter_damage(0.0, Channel::Physical, &rules), None);
        assert_eq!(counter_damage(-3.0, Channel::Magic, &rules), None);
        let magic = counter_damage(10.0, Channel::Magic, &rules).unwrap();
        assert!((magic - 7.0).abs() < 1e-9);
        assert_eq!(counter_damage(10.0, Channel::Ranged, &rules), Some(5.0));
    }
}
