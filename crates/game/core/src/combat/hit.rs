//! Opposed to-hit rolls.

use crate::config::AttackRules;

/// Effective to-hit score of one side.
///
/// # Formula
///
/// ```text
/// score = die + agility / agility_divisor
/// ```
pub fn to_hit_score(die: u32, agility: f64, rules: &AttackRules) -> f64 {
    f64::from(die) + agility / rules.agility_divisor
}

/// The attacker hits only on a strictly greater score; ties favor the defender.
pub fn check_hit(hit_a: f64, hit_b: f64) -> bool {
    hit_a > hit_b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_favor_the_defender() {
        let rules = AttackRules::STANDARD;
        let a = to_hit_score(10, 20.0, &rules);
        let b = to_hit_score(11, 10.0, &rules);
        assert_eq!(a, b);
        assert!(!check_hit(a, b));
        assert!(check_hit(a + 0.1, b));
    }
}
