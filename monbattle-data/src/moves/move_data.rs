use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    Accuracy,
    Ailment,
    Boost,
    MoveCategory,
    Type,
};

/// Who a stat change applies to.
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
pub enum StatChangeTarget {
    #[string = "user"]
    #[default]
    User,
    #[string = "target"]
    Target,
}

/// A stage change to a single stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatChange {
    pub stat: Boost,
    pub change: i8,
    #[serde(default)]
    pub target: StatChangeTarget,
}

/// Secondary data about a move.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveMeta {
    /// Status ailment the move may inflict on the target.
    #[serde(default)]
    pub ailment: Option<Ailment>,
    /// Percent chance of the ailment. Zero means it always applies.
    #[serde(default)]
    pub ailment_chance: u8,
    /// Percent of damage dealt restored to the user.
    #[serde(default)]
    pub drain: u8,
    /// Percent of max HP restored to the user.
    #[serde(default)]
    pub healing: u8,
    /// High critical hit ratio when positive.
    #[serde(default)]
    pub crit_rate: u8,
    /// Percent chance of flinching the target.
    #[serde(default)]
    pub flinch_chance: u8,
    #[serde(default)]
    pub min_hits: Option<u8>,
    #[serde(default)]
    pub max_hits: Option<u8>,
    #[serde(default)]
    pub stat_changes: Vec<StatChange>,
}

/// Data about a particular move.
///
/// Moves are shared read-only across all combatants and looked up by ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub id: String,
    /// Display name, as shown in battle messages.
    pub name: String,
    #[serde(rename = "type")]
    pub primary_type: Type,
    /// Base power. Status moves have none.
    #[serde(default)]
    pub power: Option<u16>,
    #[serde(default)]
    pub accuracy: Accuracy,
    pub pp: u8,
    #[serde(default)]
    pub priority: i8,
    #[serde(default)]
    pub meta: Option<MoveMeta>,
}

impl MoveData {
    /// The move's category, derived from its type.
    pub fn category(&self) -> MoveCategory {
        if self.power.unwrap_or(0) == 0 {
            MoveCategory::Status
        } else if self.primary_type.is_physical() {
            MoveCategory::Physical
        } else {
            MoveCategory::Special
        }
    }

    /// Base power, with status moves reporting zero.
    pub fn base_power(&self) -> u16 {
        self.power.unwrap_or(0)
    }

    /// Whether the move has a high critical hit ratio.
    pub fn high_crit(&self) -> bool {
        self.meta.as_ref().is_some_and(|meta| meta.crit_rate > 0)
    }

    /// Stat changes the move makes, if any.
    pub fn stat_changes(&self) -> &[StatChange] {
        self.meta
            .as_ref()
            .map(|meta| meta.stat_changes.as_slice())
            .unwrap_or_default()
    }
}
