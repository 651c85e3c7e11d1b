mod combatant;
mod party;
mod status;

pub use combatant::{
    Combatant,
    MAX_MOVES,
    MoveSlot,
};
pub use party::{
    MAX_PARTY_SIZE,
    Party,
};
pub use status::Status;
