use crate::PseudoRandomNumberGenerator;

/// Returns whether a random event with probability `numerator / denominator` occurs.
pub fn chance(
    prng: &mut dyn PseudoRandomNumberGenerator,
    numerator: u64,
    denominator: u64,
) -> bool {
    prng.next().rem_euclid(denominator) < numerator
}

/// Returns a random integer in the range `[min, max)`.
pub fn range(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    prng.next().rem_euclid(max - min) + min
}

/// Returns a random integer in the range `[min, max]`.
pub fn range_inclusive(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    range(prng, min, max + 1)
}

/// Rolls 1 to 100 against a percent chance. Chances of 100 or more always succeed.
pub fn percent(prng: &mut dyn PseudoRandomNumberGenerator, chance: u64) -> bool {
    range_inclusive(prng, 1, 100) <= chance
}

/// Returns a random byte in the range `[0, 255]`.
pub fn byte(prng: &mut dyn PseudoRandomNumberGenerator) -> u64 {
    range(prng, 0, 256)
}

/// Returns a random element from the given slice.
///
/// Slices of zero or one elements do not consume a roll.
pub fn sample_slice<'a, T>(
    prng: &mut dyn PseudoRandomNumberGenerator,
    slice: &'a [T],
) -> Option<&'a T> {
    match slice.len() {
        0 => None,
        1 => slice.first(),
        len => slice.get(range(prng, 0, len as u64) as usize),
    }
}
