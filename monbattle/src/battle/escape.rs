use monbattle_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

/// Odds added for every escape attempt made against the current enemy.
pub const ATTEMPT_BONUS: u32 = 30;

/// Decides whether the player escapes from a wild battle.
///
/// `attempts` counts this attempt. A faster player always escapes. Otherwise the odds are
/// `((player_speed * 32) / (enemy_speed / 4)) % 256 + 30 * attempts` out of 255.
pub fn escape_succeeds(
    prng: &mut dyn PseudoRandomNumberGenerator,
    player_speed: u32,
    enemy_speed: u32,
    attempts: u32,
) -> bool {
    if player_speed >= enemy_speed {
        return true;
    }
    let divisor = enemy_speed / 4;
    if divisor % 256 == 0 {
        return true;
    }
    let odds = ((player_speed * 32) / divisor) % 256 + ATTEMPT_BONUS * attempts;
    odds > 255 || rand_util::range(prng, 0, 255) < odds as u64
}
