use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::mons::{
    Combatant,
    Party,
};

/// The player's choice for a turn, made from the battle menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnDecision {
    /// Use the move in the given slot of the active combatant.
    Fight { move_slot: usize },
    /// Use an item from the bag on a party member.
    UseItem { item: String, target: usize },
    /// Switch the active combatant out for another party member.
    Switch { party_index: usize },
    /// Try to escape.
    Run,
}

/// Identifies the sequence started for a turn decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceHandle {
    pub id: u64,
    /// Whether the decision used up the player's turn.
    ///
    /// Refused decisions (no PP, failed item, invalid switch) only show a message.
    pub consumed_turn: bool,
}

/// How a battle ended.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, SerializeLabeledStringEnum, DeserializeLabeledStringEnum,
)]
pub enum BattleOutcome {
    #[string = "won"]
    Won,
    #[string = "lost"]
    Lost,
    #[string = "escaped"]
    Escaped,
    #[string = "caught"]
    Caught,
}

/// Everything handed back to the owner once a battle is over.
#[derive(Debug, Clone)]
pub struct BattleResult {
    pub outcome: BattleOutcome,
    pub player: Party,
    pub enemy: Party,
    /// A caught combatant that did not fit in the player's party.
    pub caught: Option<Combatant>,
}
