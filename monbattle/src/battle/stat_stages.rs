use monbattle_data::{
    Boost,
    Fraction,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Lowest stat stage.
pub const MIN_STAGE: i8 = -6;
/// Highest stat stage.
pub const MAX_STAGE: i8 = 6;

/// The multiplier for a single stat stage.
///
/// Positive stages scale by `(2 + stage) / 2`, negative stages by `2 / (2 - stage)`.
pub fn stage_multiplier(stage: i8) -> Fraction {
    let stage = stage.clamp(MIN_STAGE, MAX_STAGE) as i32;
    if stage >= 0 {
        Fraction::new((2 + stage) as u32, 2).simplify()
    } else {
        Fraction::new(2, (2 - stage) as u32).simplify()
    }
}

/// Stat stages of a single combatant.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatStageTable {
    #[serde(default)]
    pub atk: i8,
    #[serde(default)]
    pub def: i8,
    #[serde(default)]
    pub spc: i8,
    #[serde(default)]
    pub spe: i8,
    #[serde(default)]
    pub acc: i8,
    #[serde(default)]
    pub eva: i8,
}

impl StatStageTable {
    /// Returns the stage for the given stat.
    pub fn get(&self, boost: Boost) -> i8 {
        match boost {
            Boost::Atk => self.atk,
            Boost::Def => self.def,
            Boost::Spc => self.spc,
            Boost::Spe => self.spe,
            Boost::Accuracy => self.acc,
            Boost::Evasion => self.eva,
        }
    }

    fn get_mut(&mut self, boost: Boost) -> &mut i8 {
        match boost {
            Boost::Atk => &mut self.atk,
            Boost::Def => &mut self.def,
            Boost::Spc => &mut self.spc,
            Boost::Spe => &mut self.spe,
            Boost::Accuracy => &mut self.acc,
            Boost::Evasion => &mut self.eva,
        }
    }

    /// Modifies the stage of the given stat, clamping to the stage limits.
    ///
    /// Returns `false` without changing anything if the stage is already at the limit in the
    /// direction of `delta`.
    pub fn modify(&mut self, boost: Boost, delta: i8) -> bool {
        let stage = self.get_mut(boost);
        if delta == 0 || (delta > 0 && *stage >= MAX_STAGE) || (delta < 0 && *stage <= MIN_STAGE)
        {
            return false;
        }
        *stage = (*stage).saturating_add(delta).clamp(MIN_STAGE, MAX_STAGE);
        true
    }

    /// The multiplier for the given stat's current stage.
    pub fn multiplier(&self, boost: Boost) -> Fraction {
        stage_multiplier(self.get(boost))
    }

    /// Resets all stages to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Iterates over all non-zero stages.
    pub fn non_zero(&self) -> impl Iterator<Item = (Boost, i8)> + '_ {
        Boost::ALL
            .into_iter()
            .map(|boost| (boost, self.get(boost)))
            .filter(|(_, stage)| *stage != 0)
    }
}
