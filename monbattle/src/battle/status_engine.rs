use monbattle_data::Ailment;
use monbattle_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::mons::{
    Combatant,
    Status,
};

/// Shortest sleep, in turns.
pub const MIN_SLEEP_TURNS: u64 = 1;
/// Longest sleep, in turns.
pub const MAX_SLEEP_TURNS: u64 = 7;

/// Result of the pre-move status gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveGate {
    /// Can the combatant use its move this turn?
    pub can_move: bool,
    /// Messages to show before the move, or in place of it.
    pub messages: Vec<String>,
}

impl MoveGate {
    fn allow() -> Self {
        Self {
            can_move: true,
            messages: Vec::new(),
        }
    }

    fn allow_with(message: String) -> Self {
        Self {
            can_move: true,
            messages: vec![message],
        }
    }

    fn block(message: String) -> Self {
        Self {
            can_move: false,
            messages: vec![message],
        }
    }
}

/// End-of-turn damage from a status condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDamage {
    pub amount: u16,
    pub message: String,
}

/// Creates the status a move's ailment inflicts, rolling the sleep counter if needed.
pub fn status_from_ailment(
    prng: &mut dyn PseudoRandomNumberGenerator,
    ailment: Ailment,
) -> Status {
    match ailment {
        Ailment::Paralysis => Status::Paralysis,
        Ailment::Burn => Status::Burn,
        Ailment::Freeze => Status::Freeze,
        Ailment::Poison => Status::Poison,
        Ailment::Sleep => Status::Sleep {
            turns: rand_util::range_inclusive(prng, MIN_SLEEP_TURNS, MAX_SLEEP_TURNS) as u8,
        },
        Ailment::BadlyPoison => Status::BadlyPoisoned { counter: 0 },
    }
}

/// Applies an ailment to a combatant.
///
/// Fails if the combatant has fainted or already has a status.
pub fn apply_status(
    prng: &mut dyn PseudoRandomNumberGenerator,
    combatant: &mut Combatant,
    ailment: Ailment,
) -> bool {
    if combatant.is_fainted() || combatant.status().is_some() {
        return false;
    }
    let status = status_from_ailment(prng, ailment);
    combatant.set_status(status)
}

/// Checks if a combatant's status lets it move this turn.
///
/// Sleep counts down here, and waking up allows the move.
pub fn check_before_move(
    prng: &mut dyn PseudoRandomNumberGenerator,
    combatant: &mut Combatant,
) -> MoveGate {
    let name = combatant.name.clone();
    match combatant.status_mut() {
        Some(Status::Paralysis) => {
            if rand_util::range_inclusive(prng, 1, 4) == 1 {
                MoveGate::block(format!("{name}'s\nfully paralyzed!"))
            } else {
                MoveGate::allow()
            }
        }
        Some(Status::Sleep { turns }) => {
            *turns = turns.saturating_sub(1);
            if *turns > 0 {
                MoveGate::block(format!("{name} is\nfast asleep!"))
            } else {
                combatant.clear_status();
                MoveGate::allow_with(format!("{name}\nwoke up!"))
            }
        }
        Some(Status::Freeze) => MoveGate::block(format!("{name} is\nfrozen solid!")),
        _ => MoveGate::allow(),
    }
}

/// Computes end-of-turn damage from burn and poison.
///
/// Bad poison counts up before its damage is computed. The damage itself is not applied.
pub fn end_of_turn_damage(combatant: &mut Combatant) -> Option<StatusDamage> {
    if combatant.is_fainted() {
        return None;
    }
    let name = combatant.name.clone();
    let sixteenth = combatant.max_hp() / 16;
    let base = sixteenth.max(1);
    match combatant.status_mut()? {
        Status::Burn => Some(StatusDamage {
            amount: base,
            message: format!("{name}'s\nhurt by the burn!"),
        }),
        Status::Poison => Some(StatusDamage {
            amount: base,
            message: format!("{name}'s\nhurt by poison!"),
        }),
        Status::BadlyPoisoned { counter } => {
            *counter = counter.saturating_add(1);
            Some(StatusDamage {
                amount: sixteenth.saturating_mul(*counter as u16).max(1),
                message: format!("{name} was\nbadly poisoned!"),
            })
        }
        _ => None,
    }
}
