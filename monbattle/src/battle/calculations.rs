use monbattle_data::{
    Stat,
    StatTable,
};

/// Highest determinant value (DV) for a single stat.
pub const MAX_DV: u16 = 15;

/// Derives the HP determinant value from the low bit of every other determinant value.
pub fn hp_dv(dvs: &StatTable) -> u16 {
    ((dvs.atk & 1) << 3) | ((dvs.def & 1) << 2) | ((dvs.spe & 1) << 1) | (dvs.spc & 1)
}

/// Calculates a single stat from its base value, determinant value and level.
pub fn calculate_stat(stat: Stat, base: u16, dv: u16, level: u8) -> u16 {
    let level = level as u32;
    let core = ((base as u32 + dv as u32) * 2 * level) / 100;
    let value = match stat {
        Stat::HP => core + level + 10,
        _ => core + 5,
    };
    value as u16
}

/// Calculates a full stat table.
///
/// The HP determinant value in `dvs` is ignored and derived from the other four.
pub fn calculate_stats(base_stats: &StatTable, dvs: &StatTable, level: u8) -> StatTable {
    let hp_dv = hp_dv(dvs);
    let mut stats = StatTable::default();
    for (stat, base) in base_stats.entries() {
        let dv = match stat {
            Stat::HP => hp_dv,
            _ => dvs.get(stat),
        };
        stats.set(stat, calculate_stat(stat, base, dv, level));
    }
    stats
}
