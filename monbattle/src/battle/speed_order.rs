use std::cmp::Ordering;

use monbattle_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::battle::{
    Side,
    SpeedTieResolution,
};

/// An object that can be ordered by speed.
pub trait SpeedOrderable {
    /// Priority. Highest priority goes first.
    fn priority(&self) -> i8;
    /// Speed. Highest speed goes first.
    fn speed(&self) -> u32;
}

/// A single side's action for the turn, as seen by turn ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnAction {
    pub side: Side,
    pub priority: i8,
    /// Effective speed of the acting combatant.
    pub speed: u32,
}

impl SpeedOrderable for TurnAction {
    fn priority(&self) -> i8 {
        self.priority
    }

    fn speed(&self) -> u32 {
        self.speed
    }
}

/// Compares the priority of two objects. [`Ordering::Less`] means `a` goes first.
pub fn compare_priority<T>(a: &T, b: &T) -> Ordering
where
    T: SpeedOrderable,
{
    // Higher priority first.
    b.priority()
        .cmp(&a.priority())
        // Higher speed first.
        .then_with(|| b.speed().cmp(&a.speed()))
}

/// Orders two actions, returning them in the order they act.
///
/// Exact ties are resolved with a single coin flip unless the tie resolution pins the order.
pub fn order_pair<T>(
    prng: &mut dyn PseudoRandomNumberGenerator,
    tie_resolution: SpeedTieResolution,
    first: T,
    second: T,
) -> [T; 2]
where
    T: SpeedOrderable,
{
    match compare_priority(&first, &second) {
        Ordering::Less => [first, second],
        Ordering::Greater => [second, first],
        Ordering::Equal => match tie_resolution {
            SpeedTieResolution::Random => {
                if rand_util::chance(prng, 1, 2) {
                    [first, second]
                } else {
                    [second, first]
                }
            }
            SpeedTieResolution::Keep => [first, second],
            SpeedTieResolution::Reverse => [second, first],
        },
    }
}

/// Resolves which side acts first this turn.
pub fn resolve_turn_order(
    prng: &mut dyn PseudoRandomNumberGenerator,
    tie_resolution: SpeedTieResolution,
    player: TurnAction,
    enemy: TurnAction,
) -> [Side; 2] {
    let order = order_pair(prng, tie_resolution, player, enemy);
    log::debug!(
        "turn order: {} (priority {}, speed {}) then {} (priority {}, speed {})",
        order[0].side,
        order[0].priority,
        order[0].speed,
        order[1].side,
        order[1].priority,
        order[1].speed,
    );
    order.map(|action| action.side)
}
