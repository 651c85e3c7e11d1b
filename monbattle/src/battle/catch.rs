use monbattle_data::Fraction;
use monbattle_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::mons::{
    Combatant,
    Status,
};

/// Successful shake checks needed to catch a combatant.
pub const CATCH_SHAKES: u8 = 4;
/// Most shakes ever shown in the catch animation.
pub const MAX_ANIMATION_SHAKES: u8 = 3;

/// Result of a catch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatchResult {
    pub caught: bool,
    /// Successful shake checks before the combatant broke free.
    pub shakes: u8,
}

impl CatchResult {
    /// Number of shakes to show in the catch animation.
    pub fn animation_shakes(&self) -> u8 {
        if self.caught {
            MAX_ANIMATION_SHAKES
        } else {
            self.shakes.min(MAX_ANIMATION_SHAKES)
        }
    }
}

/// Catch rate bonus for the target's status.
pub fn status_bonus(status: Option<Status>) -> u32 {
    match status {
        Some(Status::Sleep { .. } | Status::Freeze) => 25,
        Some(Status::Paralysis | Status::Burn | Status::Poison) => 12,
        Some(Status::BadlyPoisoned { .. }) | None => 0,
    }
}

/// Computes the shake threshold `a` for a target and ball.
pub fn catch_value(target: &Combatant, ball_bonus: Fraction) -> u32 {
    let max_hp = target.max_hp() as u64;
    let current_hp = target.hp().max(1) as u64;
    let hp_factor = (max_hp * 255 * 4) / (current_hp * 12);
    let rate = target.capture_rate as u64 + status_bonus(target.status()) as u64;
    let value = rate * hp_factor * ball_bonus.numerator() as u64
        / (ball_bonus.denominator() as u64 * 255);
    value.min(255) as u32
}

/// Simulates a catch attempt.
///
/// A force-catch ball always succeeds with every shake.
pub fn calculate_catch_chance(
    prng: &mut dyn PseudoRandomNumberGenerator,
    target: &Combatant,
    ball_bonus: Fraction,
    force_catch: bool,
) -> CatchResult {
    if force_catch {
        return CatchResult {
            caught: true,
            shakes: CATCH_SHAKES,
        };
    }
    let value = catch_value(target, ball_bonus) as u64;
    for shakes in 0..CATCH_SHAKES {
        if rand_util::byte(prng) >= value {
            return CatchResult {
                caught: false,
                shakes,
            };
        }
    }
    CatchResult {
        caught: true,
        shakes: CATCH_SHAKES,
    }
}
