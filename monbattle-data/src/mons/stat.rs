use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A single stat value.
///
/// The first generation has a single special stat, used for both attacking and defending.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Stat {
    #[string = "hp"]
    HP,
    #[string = "atk"]
    #[alias = "Attack"]
    Atk,
    #[string = "def"]
    #[alias = "Defense"]
    Def,
    #[string = "spc"]
    #[alias = "Special"]
    Spc,
    #[string = "spe"]
    #[alias = "Speed"]
    Spe,
}

/// A full stat table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatTable {
    #[serde(default)]
    pub hp: u16,
    #[serde(default)]
    pub atk: u16,
    #[serde(default)]
    pub def: u16,
    #[serde(default)]
    pub spc: u16,
    #[serde(default)]
    pub spe: u16,
}

impl StatTable {
    /// Returns the value for the given stat.
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::HP => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spc => self.spc,
            Stat::Spe => self.spe,
        }
    }

    /// Sets the value for the given stat.
    pub fn set(&mut self, stat: Stat, value: u16) {
        *self.get_mut(stat) = value;
    }

    /// Returns a mutable reference to the value for the given stat.
    pub fn get_mut(&mut self, stat: Stat) -> &mut u16 {
        match stat {
            Stat::HP => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::Spc => &mut self.spc,
            Stat::Spe => &mut self.spe,
        }
    }

    /// Iterates over all stats in a stable order.
    pub fn entries(&self) -> impl Iterator<Item = (Stat, u16)> + '_ {
        [Stat::HP, Stat::Atk, Stat::Def, Stat::Spc, Stat::Spe]
            .into_iter()
            .map(|stat| (stat, self.get(stat)))
    }
}
