use anyhow::{
    Error,
    Result,
};
use monbattle::{
    battle::{
        BattleController,
        BattleEngineOptions,
        BattleKind,
        BattleOptions,
        HpBarDisplay,
        HpBarDriver,
        InstantHpBar,
        RandomizeBaseDamage,
        SpeedTieResolution,
        TrainerData,
    },
    mons::{
        Combatant,
        Party,
    },
};
use monbattle_data::{
    DataStore,
    StatTable,
};

use crate::ControlledRandomNumberGenerator;

enum PartyEntry {
    Species { species: String, level: u8 },
    Combatant(Combatant),
}

impl PartyEntry {
    fn build(self, data: &dyn DataStore) -> Result<Combatant> {
        match self {
            Self::Species { species, level } => create_combatant(data, &species, level),
            Self::Combatant(combatant) => Ok(combatant),
        }
    }
}

/// Creates a combatant with all determinant values at zero, so stats are predictable.
pub fn create_combatant(data: &dyn DataStore, species: &str, level: u8) -> Result<Combatant> {
    let species_data = data
        .get_species(species)?
        .ok_or_else(|| Error::msg(format!("species {species} does not exist")))?;
    Combatant::with_dvs(&species_data, level, StatTable::default(), data)
}

/// Spends all PP of every move a combatant knows, except for the given slots.
pub fn drain_pp(combatant: &mut Combatant, keep: &[usize]) -> Result<()> {
    let slots = combatant
        .moves()
        .iter()
        .map(|slot| slot.pp)
        .enumerate()
        .filter(|(index, _)| !keep.contains(index))
        .collect::<Vec<_>>();
    for (index, pp) in slots {
        for _ in 0..pp {
            combatant.use_pp(index)?;
        }
    }
    Ok(())
}

/// Battle builder object for integration tests.
pub struct TestBattleBuilder {
    options: BattleOptions,
    engine_options: BattleEngineOptions,
    player: Vec<PartyEntry>,
    enemy: Vec<PartyEntry>,
    controlled_rng: bool,
    animated_hp_bar: bool,
}

impl TestBattleBuilder {
    /// Creates a new [`TestBattleBuilder`] for a wild battle with no intro delay.
    pub fn new() -> Self {
        Self {
            options: BattleOptions::default(),
            engine_options: BattleEngineOptions {
                intro_duration: 0.0,
                ..Default::default()
            },
            player: Vec::new(),
            enemy: Vec::new(),
            controlled_rng: false,
            animated_hp_bar: false,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }

    pub fn with_controlled_rng(mut self, controlled_rng: bool) -> Self {
        self.controlled_rng = controlled_rng;
        self
    }

    pub fn with_base_damage_randomization(mut self, randomize: RandomizeBaseDamage) -> Self {
        self.engine_options.randomize_base_damage = randomize;
        self
    }

    pub fn with_speed_tie_resolution(mut self, resolution: SpeedTieResolution) -> Self {
        self.engine_options.speed_tie_resolution = resolution;
        self
    }

    /// Makes the battle a trainer battle.
    pub fn with_trainer(mut self, class: &str, name: &str, prize_money: u32) -> Self {
        self.options.kind = BattleKind::Trainer(TrainerData {
            name: name.to_owned(),
            class: class.to_owned(),
            prize_money,
        });
        self
    }

    /// Uses an animated HP bar instead of one that snaps to the current HP.
    pub fn with_hp_bar_display(mut self, animated: bool) -> Self {
        self.animated_hp_bar = animated;
        self
    }

    pub fn with_intro_duration(mut self, seconds: f32) -> Self {
        self.engine_options.intro_duration = seconds;
        self
    }

    pub fn add_player_mon(mut self, species: &str, level: u8) -> Self {
        self.player.push(PartyEntry::Species {
            species: species.to_owned(),
            level,
        });
        self
    }

    pub fn add_enemy_mon(mut self, species: &str, level: u8) -> Self {
        self.enemy.push(PartyEntry::Species {
            species: species.to_owned(),
            level,
        });
        self
    }

    pub fn add_player_combatant(mut self, combatant: Combatant) -> Self {
        self.player.push(PartyEntry::Combatant(combatant));
        self
    }

    pub fn add_enemy_combatant(mut self, combatant: Combatant) -> Self {
        self.enemy.push(PartyEntry::Combatant(combatant));
        self
    }

    /// Builds a new [`BattleController`] from the battle builder.
    pub fn build(mut self, data: &dyn DataStore) -> Result<BattleController<'_>> {
        if self.controlled_rng {
            self.engine_options.rng_factory =
                |seed: Option<u64>| Box::new(ControlledRandomNumberGenerator::new(seed));
        }
        let player = Party::from_members(
            self.player
                .into_iter()
                .map(|entry| entry.build(data))
                .collect::<Result<Vec<_>>>()?,
        )?;
        let enemy = Party::from_members(
            self.enemy
                .into_iter()
                .map(|entry| entry.build(data))
                .collect::<Result<Vec<_>>>()?,
        )?;
        let hp_bar: Box<dyn HpBarDriver> = if self.animated_hp_bar {
            Box::new(HpBarDisplay::default())
        } else {
            Box::new(InstantHpBar)
        };
        BattleController::new(
            data,
            player,
            enemy,
            self.options,
            self.engine_options,
            hp_bar,
        )
    }
}
