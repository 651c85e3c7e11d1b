use std::fmt;

use monbattle_data::Ailment;
use serde::{
    Deserialize,
    Serialize,
};

/// A non-volatile status condition on a combatant.
///
/// Sleep and bad poison carry their turn counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Status {
    Paralysis,
    Burn,
    Freeze,
    Poison,
    /// Turns of sleep remaining.
    Sleep { turns: u8 },
    /// End-of-turn ticks taken so far.
    BadlyPoisoned { counter: u8 },
}

impl Status {
    /// The ailment this status was inflicted by.
    pub fn ailment(&self) -> Ailment {
        match self {
            Self::Paralysis => Ailment::Paralysis,
            Self::Burn => Ailment::Burn,
            Self::Freeze => Ailment::Freeze,
            Self::Poison => Ailment::Poison,
            Self::Sleep { .. } => Ailment::Sleep,
            Self::BadlyPoisoned { .. } => Ailment::BadlyPoison,
        }
    }

    /// Is this either kind of poison?
    pub fn is_poison(&self) -> bool {
        matches!(self, Self::Poison | Self::BadlyPoisoned { .. })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abbreviation = match self {
            Self::Paralysis => "PAR",
            Self::Burn => "BRN",
            Self::Freeze => "FRZ",
            Self::Poison | Self::BadlyPoisoned { .. } => "PSN",
            Self::Sleep { .. } => "SLP",
        };
        write!(f, "{abbreviation}")
    }
}
