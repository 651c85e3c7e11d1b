use std::str::FromStr;

use serde::{
    Deserialize,
    Deserializer,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Growth rate, which determines how much experience is required for a species to level up.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum GrowthRate {
    #[string = "Fast"]
    Fast,
    #[string = "Medium Fast"]
    #[alias = "Medium"]
    #[alias = "medium-fast"]
    #[default]
    MediumFast,
    #[string = "Medium Slow"]
    #[alias = "medium-slow"]
    MediumSlow,
    #[string = "Slow"]
    Slow,
}

/// The highest level a combatant can reach.
pub const MAX_LEVEL: u8 = 100;

impl GrowthRate {
    /// Parses a growth rate name, falling back to [`GrowthRate::MediumFast`] for names outside
    /// the four supported curves.
    pub fn from_name(name: &str) -> Self {
        match Self::from_str(name) {
            Ok(rate) => rate,
            Err(_) => {
                log::warn!("unknown growth rate {name:?}, using medium-fast");
                Self::MediumFast
            }
        }
    }

    /// The total experience a combatant at the given level has.
    pub fn exp_at_level(&self, level: u8) -> u32 {
        if level <= 1 {
            return 0;
        }
        let n = level as i64;
        let exp = match self {
            Self::Fast => (4 * n * n * n) / 5,
            Self::MediumFast => n * n * n,
            Self::MediumSlow => (6 * n * n * n) / 5 - 15 * n * n + 100 * n - 140,
            Self::Slow => (5 * n * n * n) / 4,
        };
        exp.max(0) as u32
    }

    /// Calculates a combatant's level based on experience points.
    pub fn level_from_exp(&self, exp: u32) -> u8 {
        (2..=MAX_LEVEL)
            .take_while(|level| self.exp_at_level(*level) <= exp)
            .last()
            .unwrap_or(1)
    }
}

/// Deserializes a growth rate leniently, using [`GrowthRate::from_name`].
pub(crate) fn deserialize_growth_rate<'de, D>(deserializer: D) -> Result<GrowthRate, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(GrowthRate::from_name(&name))
}
