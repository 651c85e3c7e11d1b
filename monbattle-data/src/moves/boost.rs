use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A stat that can be boosted or dropped in stages during battle.
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
pub enum Boost {
    #[string = "atk"]
    #[alias = "attack"]
    Atk,
    #[string = "def"]
    #[alias = "defense"]
    Def,
    #[string = "spc"]
    #[alias = "special"]
    #[alias = "special-attack"]
    #[alias = "special-defense"]
    Spc,
    #[string = "spe"]
    #[alias = "speed"]
    Spe,
    #[string = "accuracy"]
    #[alias = "acc"]
    Accuracy,
    #[string = "evasion"]
    #[alias = "eva"]
    Evasion,
}

impl Boost {
    /// All boostable stats, in display order.
    pub const ALL: [Boost; 6] = [
        Self::Atk,
        Self::Def,
        Self::Spc,
        Self::Spe,
        Self::Accuracy,
        Self::Evasion,
    ];

    /// The label shown in battle messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Atk => "ATTACK",
            Self::Def => "DEFENSE",
            Self::Spc => "SPECIAL",
            Self::Spe => "SPEED",
            Self::Accuracy => "ACCURACY",
            Self::Evasion => "EVADE",
        }
    }
}
