//! Attack channels.

use crate::config::AttackRules;
use crate::error::{CombatErrorKind, ErrorSeverity};
use crate::stats::{Attribute, Attributes};

/// Raised when a caller names a channel outside {physical, magic, ranged}.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    #[error("invalid attack channel '{0}' (expected phys, magic or ranged)")]
    InvalidChannel(String),
}

impl CombatErrorKind for ChannelError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "INVALID_CHANNEL"
    }
}

/// The damage-type category of an attack.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Channel {
    #[strum(to_string = "physical", serialize = "phys")]
    Physical,
    #[strum(to_string = "magic")]
    Magic,
    #[strum(to_string = "ranged")]
    Ranged,
}

impl Channel {
    /// Parse a user-supplied channel name.
    pub fn parse(input: &str) -> Result<Self, ChannelError> {
        input
            .trim()
            .parse()
            .map_err(|_| ChannelError::InvalidChannel(input.to_string()))
    }

    /// Attribute that scales damage for this channel.
    pub const fn attack_attribute(self) -> Attribute {
        match self {
            Channel::Physical => Attribute::Power,
            Channel::Magic => Attribute::Mind,
            Channel::Ranged => Attribute::Precision,
        }
    }

    /// Damage multiplier on a hit. Magic surges when the attacker's die is above the threshold.
    pub fn hit_multiplier(self, die_a: u32, rules: &AttackRules) -> f64 {
        match self {
            Channel::Physical => 1.0,
            Channel::Magic if die_a > rules.magic_surge_threshold => rules.magic_surge_multiplier,
            Channel::Magic => rules.magic_weak_multiplier,
            Channel::Ranged => rules.ranged_multiplier,
        }
    }

    /// Share of the defense value returned to the attacker as counter-damage.
    pub fn counter_multiplier(self, rules: &AttackRules) -> f64 {
        match self {
            Channel::Physical => rules.physical_counter_multiplier,
            Channel::Magic => rules.magic_counter_multiplier,
            Channel::Ranged => rules.ranged_counter_multiplier,
        }
    }

    /// Channel an engine-controlled combatant uses, by attribute dominance.
    ///
    /// Mind > Power ⇒ magic; else Precision > Power ⇒ ranged; else physical.
    pub fn dominant_for(attributes: &Attributes) -> Self {
        if attributes.mind > attributes.power {
            Channel::Magic
        } else if attributes.precision > attributes.power {
            Channel::Ranged
        } else {
            Channel::Physical
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases_case_insensitively() {
        assert_eq!(Channel::parse("phys"), Ok(Channel::Physical));
        assert_eq!(Channel::parse("Physical"), Ok(Channel::Physical));
        assert_eq!(Channel::parse(" MAGIC "), Ok(Channel::Magic));
        assert_eq!(Channel::parse("ranged"), Ok(Channel::Ranged));
    }

    #[test]
    fn rejects_unknown_channels() {
        let err = Channel::parse("psychic").unwrap_err();
        assert_eq!(err, ChannelError::InvalidChannel("psychic".into()));
        assert_eq!(err.error_code(), "INVALID_CHANNEL");
    }

    #[test]
    fn dominance_prefers_mind_then_precision() {
        let caster = Attributes::new(10.0, 5.0, 12.0, 20.0, 5.0);
        assert_eq!(Channel::dominant_for(&caster), Channel::Magic);

        let archer = Attributes::new(10.0, 5.0, 8.0, 11.0, 5.0);
        assert_eq!(Channel::dominant_for(&archer), Channel::Ranged);

        let brute = Attributes::new(10.0, 5.0, 10.0, 10.0, 5.0);
        assert_eq!(Channel::dominant_for(&brute), Channel::Physical);
    }

    #[test]
    fn magic_surge_is_strictly_above_threshold() {
        let rules = AttackRules::STANDARD;
        assert_eq!(Channel::Magic.hit_multiplier(16, &rules), 1.2);
        assert_eq!(Channel::Magic.hit_multiplier(15, &rules), 0.9);
        assert_eq!(Channel::Ranged.counter_multiplier(&rules), 0.5);
        assert_eq!(Channel::Physical.to_string(), "physical");
    }
}
