use monbattle_data::{
    Accuracy,
    Boost,
    MoveCategory,
    MoveData,
    Stat,
    TypeChart,
};
use monbattle_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    battle::RandomizeBaseDamage,
    mons::{
        Combatant,
        Status,
    },
};

/// Lowest random factor of the damage formula, out of 255.
pub const MIN_RANDOM_FACTOR: u32 = 217;
/// Highest random factor of the damage formula, out of 255.
pub const MAX_RANDOM_FACTOR: u32 = 255;

/// Hit counts for moves that hit two to five times, as eight equally likely buckets.
const MULTIHIT_BUCKETS: [u8; 8] = [2, 2, 2, 3, 3, 3, 4, 5];

/// Checks if a move hits its target.
pub fn check_accuracy(
    prng: &mut dyn PseudoRandomNumberGenerator,
    attacker: &Combatant,
    defender: &Combatant,
    move_data: &MoveData,
) -> bool {
    let accuracy = match move_data.accuracy {
        Accuracy::Exempt => return true,
        Accuracy::Chance(accuracy) => accuracy as u64,
    };
    let accuracy_multiplier = attacker.stages().multiplier(Boost::Accuracy);
    let evasion_multiplier = defender.stages().multiplier(Boost::Evasion);
    let threshold = accuracy
        * accuracy_multiplier.numerator() as u64
        * evasion_multiplier.denominator() as u64
        / (accuracy_multiplier.denominator() as u64 * evasion_multiplier.numerator() as u64);
    rand_util::range(prng, 0, 100) < threshold
}

/// Checks if a move lands a critical hit.
///
/// The chance is based on the attacker's base speed, out of 512 normally or out of 64 for moves
/// with a high critical hit ratio, and never exceeds 255/256.
pub fn check_critical_hit(
    prng: &mut dyn PseudoRandomNumberGenerator,
    attacker: &Combatant,
    move_data: &MoveData,
) -> bool {
    let speed = attacker.base_stats.spe as u64;
    let (numerator, denominator) = if move_data.high_crit() {
        (speed, 64)
    } else {
        (speed, 512)
    };
    let (numerator, denominator) = if numerator * 256 > 255 * denominator {
        (255, 256)
    } else {
        (numerator, denominator)
    };
    rand_util::chance(prng, numerator, denominator)
}

/// Determines how many times a move hits.
pub fn get_hit_count(prng: &mut dyn PseudoRandomNumberGenerator, move_data: &MoveData) -> u8 {
    let (min, max) = match &move_data.meta {
        Some(meta) => (meta.min_hits, meta.max_hits),
        None => return 1,
    };
    match (min, max) {
        (Some(min), Some(max)) if min == max && min > 0 => min,
        (Some(2), Some(5)) => rand_util::sample_slice(prng, &MULTIHIT_BUCKETS)
            .cloned()
            .unwrap_or(2),
        _ => 1,
    }
}

/// Rolls the random factor of the damage formula.
pub fn random_factor(
    prng: &mut dyn PseudoRandomNumberGenerator,
    randomize: RandomizeBaseDamage,
) -> u32 {
    match randomize {
        RandomizeBaseDamage::Randomize => {
            rand_util::range_inclusive(prng, MIN_RANDOM_FACTOR as u64, MAX_RANDOM_FACTOR as u64)
                as u32
        }
        RandomizeBaseDamage::Max => MAX_RANDOM_FACTOR,
        RandomizeBaseDamage::Min => MIN_RANDOM_FACTOR,
    }
}

/// Calculates the damage of a single hit, with the random factor already rolled.
pub fn calculate_damage_with_factor(
    type_chart: &TypeChart,
    attacker: &Combatant,
    defender: &Combatant,
    move_data: &MoveData,
    critical: bool,
    factor: u32,
) -> u16 {
    let power = move_data.base_power() as u32;
    let category = move_data.category();
    if power == 0 || category == MoveCategory::Status {
        return 0;
    }

    let (attack_stat, defense_stat, attack_boost, defense_boost) = match category {
        MoveCategory::Physical => (Stat::Atk, Stat::Def, Boost::Atk, Boost::Def),
        _ => (Stat::Spc, Stat::Spc, Boost::Spc, Boost::Spc),
    };
    let attack = attacker
        .stages()
        .multiplier(attack_boost)
        .apply(attacker.stats().get(attack_stat) as u32)
        .max(1);
    let defense = defender
        .stages()
        .multiplier(defense_boost)
        .apply(defender.stats().get(defense_stat) as u32)
        .max(1);

    let level = attacker.level() as u32;
    let mut damage = ((2 * level / 5 + 2) * power * attack / defense) / 50 + 2;

    if category == MoveCategory::Physical && attacker.status() == Some(Status::Burn) {
        damage /= 2;
    }

    if attacker.types.contains(&move_data.primary_type) {
        damage = damage * 3 / 2;
    }

    let effectiveness = type_chart.multiplier(move_data.primary_type, &defender.types);
    let immune = effectiveness.numerator() == 0;
    damage = effectiveness.apply(damage);

    damage = damage * factor / MAX_RANDOM_FACTOR;

    if critical {
        damage *= 2;
    }

    if immune {
        return 0;
    }
    damage.max(1).min(u16::MAX as u32) as u16
}

/// Calculates the damage of a single hit.
pub fn calculate_damage(
    prng: &mut dyn PseudoRandomNumberGenerator,
    randomize: RandomizeBaseDamage,
    type_chart: &TypeChart,
    attacker: &Combatant,
    defender: &Combatant,
    move_data: &MoveData,
    critical: bool,
) -> u16 {
    let factor = random_factor(prng, randomize);
    calculate_damage_with_factor(type_chart, attacker, defender, move_data, critical, factor)
}
