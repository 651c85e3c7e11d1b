use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A non-volatile status ailment a move can inflict.
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
pub enum Ailment {
    #[string = "paralysis"]
    #[alias = "par"]
    Paralysis,
    #[string = "burn"]
    #[alias = "brn"]
    Burn,
    #[string = "freeze"]
    #[alias = "frz"]
    Freeze,
    #[string = "poison"]
    #[alias = "psn"]
    Poison,
    #[string = "sleep"]
    #[alias = "slp"]
    Sleep,
    #[string = "badly-poison"]
    #[alias = "toxic"]
    #[alias = "tox"]
    BadlyPoison,
}

impl Ailment {
    /// The label shown in battle messages ("X was PARALYZED!").
    pub fn inflicted_label(&self) -> &'static str {
        match self {
            Self::Paralysis => "PARALYZED",
            Self::Burn => "BURNED",
            Self::Freeze => "FROZEN",
            Self::Poison => "POISONED",
            Self::Sleep => "put to SLEEP",
            Self::BadlyPoison => "badly POISONED",
        }
    }
}
