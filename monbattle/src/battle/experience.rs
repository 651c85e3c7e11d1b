use monbattle_data::{
    GrowthRate,
    MoveData,
};

use crate::{
    error::Result,
    mons::{
        Combatant,
        MAX_MOVES,
        MoveSlot,
    },
};

/// Outcome of trying to teach a move on level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearnMoveOutcome {
    /// The combatant already knows the move.
    AlreadyKnown,
    /// The move was appended with full PP.
    Learned,
    /// The combatant knows four moves, so one must be forgotten first.
    NeedsReplacement,
}

/// Experience awarded for defeating a combatant.
///
/// Trainer-owned combatants give 1.5x. The total is split evenly between participants.
pub fn calculate_exp_gain(defeated: &Combatant, trainer_battle: bool, participants: usize) -> u32 {
    let participants = participants.max(1) as u64;
    let (numerator, denominator) = if trainer_battle { (3, 2) } else { (1, 1) };
    let total = defeated.base_experience as u64 * defeated.level() as u64 * numerator;
    (total / (7 * denominator * participants)) as u32
}

/// Total experience needed to be at the given level.
pub fn get_exp_for_level(growth_rate: GrowthRate, level: u8) -> u32 {
    growth_rate.exp_at_level(level)
}

/// Awards experience, returning every level crossed in order.
///
/// Each level recalculates stats and restores HP to max.
pub fn gain_experience(combatant: &mut Combatant, amount: u32) -> Vec<u8> {
    combatant.add_experience(amount);
    let mut levels = Vec::new();
    while let Some(next) = combatant.next_level_experience() {
        if combatant.experience() < next {
            break;
        }
        combatant.level_up();
        levels.push(combatant.level());
    }
    levels
}

/// Tries to teach a move, appending it if there is room.
pub fn try_learn_move(combatant: &mut Combatant, move_data: &MoveData) -> Result<LearnMoveOutcome> {
    if combatant.knows_move(&move_data.id) {
        return Ok(LearnMoveOutcome::AlreadyKnown);
    }
    if combatant.moves().len() >= MAX_MOVES {
        return Ok(LearnMoveOutcome::NeedsReplacement);
    }
    combatant.push_move(move_data)?;
    Ok(LearnMoveOutcome::Learned)
}

/// Forgets the move in the given slot in favor of a new one, keeping slot order.
pub fn replace_move(
    combatant: &mut Combatant,
    slot: usize,
    move_data: &MoveData,
) -> Result<MoveSlot> {
    combatant.replace_move(slot, move_data)
}
