//! Core attributes and authored stat blocks.
//!
//! The five attributes drive every formula:
//! - **Power** (STR): physical damage
//! - **Agility** (AGI): to-hit score and turn order
//! - **Mind** (INT): magic damage
//! - **Precision** (DEX): ranged damage
//! - **Fortitude** (VIT): damage reduction and counterattacks

/// Identifies one of the five core attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    #[strum(to_string = "STR")]
    Power,
    #[strum(to_string = "AGI")]
    Agility,
    #[strum(to_string = "INT")]
    Mind,
    #[strum(to_string = "DEX")]
    Precision,
    #[strum(to_string = "VIT")]
    Fortitude,
}

/// The five core attributes of a combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub power: f64,
    pub agility: f64,
    pub mind: f64,
    pub precision: f64,
    pub fortitude: f64,
}

impl Attributes {
    pub const fn new(power: f64, agility: f64, mind: f64, precision: f64, fortitude: f64) -> Self {
        Self {
            power,
            agility,
            mind,
            precision,
            fortitude,
        }
    }

    pub const fn get(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Power => self.power,
            Attribute::Agility => self.agility,
            Attribute::Mind => self.mind,
            Attribute::Precision => self.precision,
            Attribute::Fortitude => self.fortitude,
        }
    }
}

/// An authored (level → stats) anchor, or the interpolated result for a level.
///
/// `base_attack` is carried for content compatibility and interpolated like
/// every other field; no formula reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub health: f64,
    pub mana: f64,
    pub power: f64,
    pub agility: f64,
    pub mind: f64,
    pub precision: f64,
    pub fortitude: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_attack: f64,
}

impl StatBlock {
    pub const fn new(health: f64, mana: f64, attributes: Attributes) -> Self {
        Self {
            health,
            mana,
            power: attributes.power,
            agility: attributes.agility,
            mind: attributes.mind,
            precision: attributes.precision,
            fortitude: attributes.fortitude,
            base_attack: 0.0,
        }
    }

    pub const fn attributes(&self) -> Attributes {
        Attributes::new(
            self.power,
            self.agility,
            self.mind,
            self.precision,
            self.fortitude,
        )
    }

    /// Field-wise `lo + (hi - lo) * t`.
    pub fn lerp(lo: &Self, hi: &Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            health: mix(lo.health, hi.health),
            mana: mix(lo.mana, hi.mana),
            power: mix(lo.power, hi.power),
            agility: mix(lo.agility, hi.agility),
            mind: mix(lo.mind, hi.mind),
            precision: mix(lo.precision, hi.precision),
            fortitude: mix(lo.fortitude, hi.fortitude),
            base_attack: mix(lo.base_attack, hi.base_attack),
        }
    }
}
