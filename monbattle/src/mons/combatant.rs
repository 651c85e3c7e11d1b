use monbattle_data::{
    Boost,
    DataStore,
    GrowthRate,
    MAX_LEVEL,
    MoveData,
    SpeciesData,
    StatTable,
    Type,
};
use monbattle_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    battle::{
        StatStageTable,
        calculations::{
            MAX_DV,
            calculate_stats,
            hp_dv,
        },
    },
    error::{
        Result,
        WrapOptionError,
        general_error,
    },
    mons::Status,
};

/// Maximum number of moves a combatant can know.
pub const MAX_MOVES: usize = 4;

/// A move known by a combatant, with its remaining PP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSlot {
    pub id: String,
    pub name: String,
    pub pp: u8,
    pub max_pp: u8,
}

impl MoveSlot {
    /// Creates a move slot with full PP.
    pub fn new(data: &MoveData) -> Self {
        Self {
            id: data.id.clone(),
            name: data.name.clone(),
            pp: data.pp,
            max_pp: data.pp,
        }
    }
}

/// A single battling creature.
///
/// Combatants are owned by a [`Party`][`crate::mons::Party`]. The battle refers to them by
/// handle, so every change made during battle is visible to the owner afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub species: String,
    pub name: String,
    pub types: Vec<Type>,
    pub base_stats: StatTable,
    pub growth_rate: GrowthRate,
    pub base_experience: u32,
    pub capture_rate: u8,
    /// Determinant values. The HP entry is always derived from the other four.
    pub dvs: StatTable,
    level: u8,
    stats: StatTable,
    hp: u16,
    status: Option<Status>,
    stages: StatStageTable,
    moves: Vec<MoveSlot>,
    experience: u32,
}

impl Combatant {
    /// Creates a new combatant with random determinant values, knowing the last four moves of its
    /// learnset at or below its level.
    pub fn new(
        species: &SpeciesData,
        level: u8,
        data: &dyn DataStore,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<Self> {
        let mut roll = || rand_util::range_inclusive(prng, 0, MAX_DV as u64) as u16;
        let dvs = StatTable {
            hp: 0,
            atk: roll(),
            def: roll(),
            spc: roll(),
            spe: roll(),
        };
        Self::with_dvs(species, level, dvs, data)
    }

    /// Creates a new combatant with the given determinant values.
    pub fn with_dvs(
        species: &SpeciesData,
        level: u8,
        mut dvs: StatTable,
        data: &dyn DataStore,
    ) -> Result<Self> {
        if level == 0 || level > MAX_LEVEL {
            return Err(general_error(format!("invalid level {level}")));
        }
        if dvs.entries().any(|(_, dv)| dv > MAX_DV) {
            return Err(general_error(format!("determinant values out of range: {dvs:?}")));
        }
        dvs.hp = hp_dv(&dvs);
        let stats = calculate_stats(&species.base_stats, &dvs, level);
        let moves = species
            .initial_moves(level)
            .into_iter()
            .map(|id| {
                data.get_move(id)?
                    .wrap_not_found_error(format_args!("move {id}"))
                    .map(|data| MoveSlot::new(&data))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            species: species.id.clone(),
            name: species.name.clone(),
            types: species.types.clone(),
            base_stats: species.base_stats.clone(),
            growth_rate: species.growth_rate,
            base_experience: species.base_experience,
            capture_rate: species.capture_rate,
            dvs,
            level,
            hp: stats.hp,
            stats,
            status: None,
            stages: StatStageTable::default(),
            moves,
            experience: species.growth_rate.exp_at_level(level),
        })
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Computed stats at the current level.
    pub fn stats(&self) -> &StatTable {
        &self.stats
    }

    pub fn hp(&self) -> u16 {
        self.hp
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    /// Sets current HP, clamped to max HP.
    pub fn set_hp(&mut self, hp: u16) {
        self.hp = hp.min(self.max_hp());
    }

    /// Applies damage, returning the HP actually lost.
    pub fn take_damage(&mut self, amount: u16) -> u16 {
        let lost = amount.min(self.hp);
        self.hp -= lost;
        lost
    }

    /// Restores HP of a non-fainted combatant, returning the HP actually restored.
    pub fn heal(&mut self, amount: u16) -> u16 {
        if self.is_fainted() {
            return 0;
        }
        let restored = amount.min(self.max_hp() - self.hp);
        self.hp += restored;
        restored
    }

    /// Brings a fainted combatant back with the given HP (at least 1).
    pub fn revive(&mut self, hp: u16) -> bool {
        if !self.is_fainted() {
            return false;
        }
        self.status = None;
        self.set_hp(hp.max(1));
        true
    }

    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn status_mut(&mut self) -> Option<&mut Status> {
        self.status.as_mut()
    }

    /// Sets the status, returning `false` if the combatant already has one.
    pub fn set_status(&mut self, status: Status) -> bool {
        if self.status.is_some() {
            return false;
        }
        self.status = Some(status);
        true
    }

    pub fn clear_status(&mut self) -> Option<Status> {
        self.status.take()
    }

    pub fn stages(&self) -> &StatStageTable {
        &self.stages
    }

    pub fn stages_mut(&mut self) -> &mut StatStageTable {
        &mut self.stages
    }

    /// Speed after stat stages, halved under paralysis.
    pub fn effective_speed(&self) -> u32 {
        let speed = self.stages.multiplier(Boost::Spe).apply(self.stats.spe as u32);
        match self.status {
            Some(Status::Paralysis) => speed / 2,
            _ => speed,
        }
    }

    pub fn moves(&self) -> &[MoveSlot] {
        &self.moves
    }

    pub fn move_slot(&self, index: usize) -> Result<&MoveSlot> {
        self.moves
            .get(index)
            .wrap_not_found_error(format_args!("move slot {index}"))
    }

    pub fn knows_move(&self, id: &str) -> bool {
        self.moves.iter().any(|slot| slot.id == id)
    }

    /// Spends one PP of the move in the given slot.
    pub fn use_pp(&mut self, index: usize) -> Result<()> {
        let slot = self
            .moves
            .get_mut(index)
            .wrap_not_found_error(format_args!("move slot {index}"))?;
        if slot.pp == 0 {
            return Err(general_error(format!("{} has no PP left", slot.name)));
        }
        slot.pp -= 1;
        Ok(())
    }

    /// Appends a new move with full PP.
    pub(crate) fn push_move(&mut self, data: &MoveData) -> Result<()> {
        if self.moves.len() >= MAX_MOVES {
            return Err(general_error(format!("{} already knows {MAX_MOVES} moves", self.name)));
        }
        self.moves.push(MoveSlot::new(data));
        Ok(())
    }

    /// Replaces the move in the given slot, returning the forgotten move.
    pub(crate) fn replace_move(&mut self, index: usize, data: &MoveData) -> Result<MoveSlot> {
        let slot = self
            .moves
            .get_mut(index)
            .wrap_not_found_error(format_args!("move slot {index}"))?;
        Ok(std::mem::replace(slot, MoveSlot::new(data)))
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    /// Total experience needed to reach the next level.
    pub fn next_level_experience(&self) -> Option<u32> {
        (self.level < MAX_LEVEL).then(|| self.growth_rate.exp_at_level(self.level + 1))
    }

    pub(crate) fn add_experience(&mut self, amount: u32) {
        self.experience = self.experience.saturating_add(amount);
    }

    /// Raises the level by one, recalculating stats and restoring HP to max.
    pub(crate) fn level_up(&mut self) {
        self.level = (self.level + 1).min(MAX_LEVEL);
        self.stats = calculate_stats(&self.base_stats, &self.dvs, self.level);
        self.hp = self.stats.hp;
    }
}
