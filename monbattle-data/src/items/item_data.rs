use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Ailment,
    Boost,
    Fraction,
};

/// The battle effect of an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemEffect {
    /// Restores a fixed amount of HP.
    Heal { amount: u16 },
    /// Restores HP to max.
    FullHeal,
    /// Restores HP to max and cures any status.
    FullRestore,
    /// Cures any of the listed statuses.
    CureStatus { ailments: Vec<Ailment> },
    /// Cures any status.
    CureAllStatus,
    /// Revives a fainted combatant with half (or full) HP.
    Revive {
        #[serde(default)]
        full: bool,
    },
    /// Raises the stat stage of the active combatant by one.
    StatBoost { stat: Boost },
    /// A ball, used for catching wild combatants.
    Ball {
        bonus: Fraction,
        #[serde(default)]
        force_catch: bool,
    },
}

impl ItemEffect {
    /// Whether the item targets a member of the player's party, rather than the battle.
    pub fn targets_party(&self) -> bool {
        !matches!(self, Self::StatBoost { .. } | Self::Ball { .. })
    }
}

/// Data about a particular item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemData {
    pub id: String,
    /// Display name, as shown in battle messages.
    pub name: String,
    pub effect: ItemEffect,
}
