use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    GrowthRate,
    StatTable,
    Type,
    mons::growth_rate::deserialize_growth_rate,
};

/// A move learned by leveling up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpMove {
    pub level: u8,
    #[serde(rename = "move")]
    pub move_id: String,
}

/// Data about a particular species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    pub id: String,
    /// Display name, as shown in battle messages.
    pub name: String,
    /// One or two types.
    pub types: Vec<Type>,
    pub base_stats: StatTable,
    /// Experience yield when defeated.
    pub base_experience: u32,
    #[serde(deserialize_with = "deserialize_growth_rate")]
    pub growth_rate: GrowthRate,
    pub capture_rate: u8,
    /// Level-up learnset, in level order.
    #[serde(default)]
    pub learnset: Vec<LevelUpMove>,
}

impl SpeciesData {
    /// Moves learned exactly at the given level.
    pub fn moves_learned_at(&self, level: u8) -> impl Iterator<Item = &str> {
        self.learnset
            .iter()
            .filter(move |learn| learn.level == level)
            .map(|learn| learn.move_id.as_str())
    }

    /// The moves a wild or freshly generated combatant knows: the last four moves learned at or
    /// below its level.
    pub fn initial_moves(&self, level: u8) -> Vec<&str> {
        let mut learned = Vec::<&str>::new();
        for learn in self.learnset.iter().filter(|learn| learn.level <= level) {
            if !learned.contains(&learn.move_id.as_str()) {
                learned.push(&learn.move_id);
            }
        }
        let skip = learned.len().saturating_sub(4);
        learned.into_iter().skip(skip).collect()
    }
}
