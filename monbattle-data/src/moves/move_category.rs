use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The category of a move.
///
/// In the first generation, the category is a property of the move's type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum MoveCategory {
    #[string = "Physical"]
    Physical,
    #[string = "Special"]
    Special,
    #[string = "Status"]
    Status,
}
