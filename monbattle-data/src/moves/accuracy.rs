use serde::{
    Deserialize,
    Serialize,
};

/// The base accuracy of a move.
///
/// Stored in data as a percentage, or `null` (or omitted) for moves that never miss.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<u8>", into = "Option<u8>")]
pub enum Accuracy {
    /// The base chance out of 100 for the move to hit.
    Chance(u8),
    /// The move skips the accuracy check entirely.
    #[default]
    Exempt,
}

impl Accuracy {
    pub fn percentage(&self) -> Option<u8> {
        (*self).into()
    }
}

impl From<u8> for Accuracy {
    fn from(value: u8) -> Self {
        Self::Chance(value)
    }
}

impl From<Option<u8>> for Accuracy {
    fn from(value: Option<u8>) -> Self {
        value.map_or(Self::Exempt, Self::Chance)
    }
}

impl From<Accuracy> for Option<u8> {
    fn from(value: Accuracy) -> Self {
        match value {
            Accuracy::Chance(chance) => Some(chance),
            Accuracy::Exempt => None,
        }
    }
}
