use ahash::{
    HashMap,
    HashMapExt,
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Fraction;

/// The type of a species or move, which determines weaknesses and resistances.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Fighting"]
    Fighting,
    #[string = "Flying"]
    Flying,
    #[string = "Poison"]
    Poison,
    #[string = "Ground"]
    Ground,
    #[string = "Rock"]
    Rock,
    #[string = "Bug"]
    Bug,
    #[string = "Ghost"]
    Ghost,
    #[string = "Fire"]
    Fire,
    #[string = "Water"]
    Water,
    #[string = "Grass"]
    Grass,
    #[string = "Electric"]
    Electric,
    #[string = "Psychic"]
    Psychic,
    #[string = "Ice"]
    Ice,
    #[string = "Dragon"]
    Dragon,
}

impl Type {
    /// Moves of physical types use attack and defense; every other type uses special.
    pub fn is_physical(&self) -> bool {
        matches!(
            self,
            Self::Normal
                | Self::Fighting
                | Self::Flying
                | Self::Poison
                | Self::Ground
                | Self::Rock
                | Self::Bug
                | Self::Ghost
        )
    }
}

/// How well an attacking type hits a single defending type.
///
/// Written in data as its damage multiplier: `0`, `0.5`, `1`, or `2`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub enum TypeEffectiveness {
    /// No effect.
    None,
    /// Not very effective.
    Weak,
    /// Normal effectiveness.
    #[default]
    Normal,
    /// Super effective.
    Strong,
}

impl TypeEffectiveness {
    /// The damage multiplier as a fraction.
    pub fn multiplier(&self) -> Fraction {
        match self {
            Self::None => Fraction::new(0, 1),
            Self::Weak => Fraction::new(1, 2),
            Self::Normal => Fraction::new(1, 1),
            Self::Strong => Fraction::new(2, 1),
        }
    }
}

impl From<f32> for TypeEffectiveness {
    fn from(value: f32) -> Self {
        match value {
            value if value <= 0.0 => Self::None,
            value if value <= 0.5 => Self::Weak,
            value if value <= 1.0 => Self::Normal,
            _ => Self::Strong,
        }
    }
}

impl From<TypeEffectiveness> for f32 {
    fn from(value: TypeEffectiveness) -> Self {
        match value {
            TypeEffectiveness::None => 0f32,
            TypeEffectiveness::Weak => 0.5,
            TypeEffectiveness::Normal => 1f32,
            TypeEffectiveness::Strong => 2f32,
        }
    }
}

/// A type table, keyed by the attacking type.
pub type TypeTable<T> = HashMap<Type, HashMap<T, TypeEffectiveness>>;

/// Effectiveness of every attacking type against every defending type.
///
/// Only non-neutral matchups are stored.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeChart {
    pub types: TypeTable<Type>,
}

impl TypeChart {
    /// The built-in first generation type chart.
    pub fn gen1() -> Self {
        use Type::*;
        use TypeEffectiveness::{
            None as Immune,
            Strong as Super,
            Weak as Resist,
        };
        let entries: &[(Type, &[(Type, TypeEffectiveness)])] = &[
            (Normal, &[(Rock, Resist), (Ghost, Immune)]),
            (
                Fighting,
                &[
                    (Normal, Super),
                    (Flying, Resist),
                    (Poison, Resist),
                    (Rock, Super),
                    (Bug, Resist),
                    (Ghost, Immune),
                    (Psychic, Resist),
                    (Ice, Super),
                ],
            ),
            (
                Flying,
                &[
                    (Fighting, Super),
                    (Rock, Resist),
                    (Bug, Super),
                    (Grass, Super),
                    (Electric, Resist),
                ],
            ),
            (
                Poison,
                &[
                    (Poison, Resist),
                    (Ground, Resist),
                    (Rock, Resist),
                    (Bug, Super),
                    (Ghost, Resist),
                    (Grass, Super),
                ],
            ),
            (
                Ground,
                &[
                    (Flying, Immune),
                    (Poison, Super),
                    (Rock, Super),
                    (Bug, Resist),
                    (Fire, Super),
                    (Grass, Resist),
                    (Electric, Super),
                ],
            ),
            (
                Rock,
                &[
                    (Fighting, Resist),
                    (Flying, Super),
                    (Ground, Resist),
                    (Bug, Super),
                    (Fire, Super),
                    (Ice, Super),
                ],
            ),
            (
                Bug,
                &[
                    (Fighting, Resist),
                    (Flying, Resist),
                    (Poison, Super),
                    (Ghost, Resist),
                    (Fire, Resist),
                    (Grass, Super),
                    (Psychic, Super),
                ],
            ),
            (Ghost, &[(Normal, Immune), (Ghost, Super), (Psychic, Immune)]),
            (
                Fire,
                &[
                    (Rock, Resist),
                    (Bug, Super),
                    (Fire, Resist),
                    (Water, Resist),
                    (Grass, Super),
                    (Ice, Super),
                    (Dragon, Resist),
                ],
            ),
            (
                Water,
                &[
                    (Ground, Super),
                    (Rock, Super),
                    (Fire, Super),
                    (Water, Resist),
                    (Grass, Resist),
                    (Dragon, Resist),
                ],
            ),
            (
                Grass,
                &[
                    (Flying, Resist),
                    (Poison, Resist),
                    (Ground, Super),
                    (Rock, Super),
                    (Bug, Resist),
                    (Fire, Resist),
                    (Water, Super),
                    (Grass, Resist),
                    (Dragon, Resist),
                ],
            ),
            (
                Electric,
                &[
                    (Flying, Super),
                    (Ground, Immune),
                    (Water, Super),
                    (Grass, Resist),
                    (Electric, Resist),
                    (Dragon, Resist),
                ],
            ),
            (
                Psychic,
                &[(Fighting, Super), (Poison, Super), (Psychic, Resist)],
            ),
            (
                Ice,
                &[
                    (Flying, Super),
                    (Ground, Super),
                    (Water, Resist),
                    (Grass, Super),
                    (Ice, Resist),
                    (Dragon, Super),
                ],
            ),
            (Dragon, &[(Dragon, Super)]),
        ];
        let mut types = TypeTable::new();
        for (attacking, row) in entries {
            types.insert(*attacking, row.iter().cloned().collect());
        }
        Self { types }
    }

    /// Effectiveness of an attacking type against a single defending type.
    pub fn effectiveness(&self, attacking: Type, defending: Type) -> TypeEffectiveness {
        self.types
            .get(&attacking)
            .and_then(|row| row.get(&defending))
            .cloned()
            .unwrap_or_default()
    }

    /// Effectiveness of an attacking type against every defending type, in order.
    pub fn effectiveness_against(
        &self,
        attacking: Type,
        defending: &[Type],
    ) -> Vec<TypeEffectiveness> {
        defending
            .iter()
            .map(|defending| self.effectiveness(attacking, *defending))
            .collect()
    }

    /// Combined multiplier of an attacking type against one or two defending types.
    pub fn multiplier(&self, attacking: Type, defending: &[Type]) -> Fraction {
        self.effectiveness_against(attacking, defending)
            .into_iter()
            .fold(Fraction::new(1, 1), |acc, effectiveness| {
                acc * effectiveness.multiplier()
            })
    }
}
