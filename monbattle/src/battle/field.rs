use monbattle_data::{
    DataStore,
    MoveData,
    TypeChart,
};
use monbattle_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    battle::{
        BattleEngineOptions,
        BattleKind,
        CombatantHandle,
        HpBarDriver,
        Side,
    },
    battle_event,
    error::{
        Result,
        WrapOptionError,
        general_error,
    },
    log::EventLog,
    mons::{
        Combatant,
        Party,
    },
};

/// Both active combatants of an attack, borrowed alongside the generator and damage inputs.
pub(crate) struct Duel<'f> {
    pub attacker: &'f mut Combatant,
    pub defender: &'f mut Combatant,
    pub prng: &'f mut dyn PseudoRandomNumberGenerator,
    pub type_chart: &'f TypeChart,
    pub engine_options: &'f BattleEngineOptions,
}

/// Everything the sequencer and flow controller mutate during a battle.
pub struct BattleField<'d> {
    pub(crate) data: &'d dyn DataStore,
    pub(crate) type_chart: TypeChart,
    pub(crate) engine_options: BattleEngineOptions,
    pub(crate) kind: BattleKind,
    pub(crate) prng: Box<dyn PseudoRandomNumberGenerator>,
    pub(crate) player: Party,
    pub(crate) enemy: Party,
    player_active: usize,
    enemy_active: usize,
    pub(crate) hp_bar: Box<dyn HpBarDriver>,
    pub(crate) log: EventLog,
    /// Combatant that flinches instead of using its next move.
    pub(crate) flinch_target: Option<CombatantHandle>,
    /// Player party members that fought the current enemy.
    pub(crate) participants: Vec<usize>,
    pub(crate) caught: bool,
}

impl<'d> BattleField<'d> {
    pub fn new(
        data: &'d dyn DataStore,
        engine_options: BattleEngineOptions,
        kind: BattleKind,
        prng: Box<dyn PseudoRandomNumberGenerator>,
        player: Party,
        enemy: Party,
        hp_bar: Box<dyn HpBarDriver>,
    ) -> Result<Self> {
        let player_active = player
            .first_alive()
            .wrap_expectation("player has no combatant able to battle")?;
        let enemy_active = enemy
            .first_alive()
            .wrap_expectation("enemy has no combatant able to battle")?;
        let mut field = Self {
            data,
            type_chart: data.get_type_chart()?,
            engine_options,
            kind,
            prng,
            player,
            enemy,
            player_active,
            enemy_active,
            hp_bar,
            log: EventLog::new(),
            flinch_target: None,
            participants: Vec::from([player_active]),
            caught: false,
        };
        field.snap_hp_bar(Side::Player)?;
        field.snap_hp_bar(Side::Enemy)?;
        Ok(field)
    }

    pub fn is_trainer_battle(&self) -> bool {
        matches!(self.kind, BattleKind::Trainer(_))
    }

    pub fn party(&self, side: Side) -> &Party {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    pub fn party_mut(&mut self, side: Side) -> &mut Party {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    pub fn active_index(&self, side: Side) -> usize {
        match side {
            Side::Player => self.player_active,
            Side::Enemy => self.enemy_active,
        }
    }

    pub fn active_handle(&self, side: Side) -> CombatantHandle {
        CombatantHandle::new(side, self.active_index(side))
    }

    pub fn combatant(&self, handle: CombatantHandle) -> Result<&Combatant> {
        self.party(handle.side).get(handle.index)
    }

    pub fn combatant_mut(&mut self, handle: CombatantHandle) -> Result<&mut Combatant> {
        self.party_mut(handle.side).get_mut(handle.index)
    }

    pub fn active(&self, side: Side) -> Result<&Combatant> {
        self.combatant(self.active_handle(side))
    }

    pub fn active_mut(&mut self, side: Side) -> Result<&mut Combatant> {
        self.combatant_mut(self.active_handle(side))
    }

    /// Borrows a combatant alongside the generator.
    pub(crate) fn combatant_and_prng(
        &mut self,
        handle: CombatantHandle,
    ) -> Result<(&mut Combatant, &mut dyn PseudoRandomNumberGenerator)> {
        let party = match handle.side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        };
        Ok((party.get_mut(handle.index)?, self.prng.as_mut()))
    }

    /// Borrows the active combatants for an attack by the given side.
    pub(crate) fn duel(&mut self, attacker_side: Side) -> Result<Duel<'_>> {
        let (attacker_index, defender_index) = (
            self.active_index(attacker_side),
            self.active_index(attacker_side.opponent()),
        );
        let (attacker_party, defender_party) = match attacker_side {
            Side::Player => (&mut self.player, &mut self.enemy),
            Side::Enemy => (&mut self.enemy, &mut self.player),
        };
        Ok(Duel {
            attacker: attacker_party.get_mut(attacker_index)?,
            defender: defender_party.get_mut(defender_index)?,
            prng: self.prng.as_mut(),
            type_chart: &self.type_chart,
            engine_options: &self.engine_options,
        })
    }

    /// Prefix for the side's combatant in attack messages.
    pub fn attacker_prefix(&self, side: Side) -> &'static str {
        match (side, &self.kind) {
            (Side::Player, _) => "",
            (Side::Enemy, BattleKind::Wild) => "Wild ",
            (Side::Enemy, BattleKind::Trainer(_)) => "Enemy ",
        }
    }

    pub fn get_move(&self, id: &str) -> Result<MoveData> {
        self.data.get_move(id)?.wrap_not_found_error(format_args!("move {id}"))
    }

    /// Picks a random move with PP left for the active enemy, spending its PP.
    pub fn choose_enemy_move(&mut self) -> Result<Option<MoveData>> {
        let enemy = self.active(Side::Enemy)?;
        let usable = enemy
            .moves()
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.pp > 0)
            .map(|(index, _)| index)
            .collect::<Vec<_>>();
        let index = match rand_util::sample_slice(self.prng.as_mut(), &usable) {
            Some(index) => *index,
            None => return Ok(None),
        };
        let enemy = self.active_mut(Side::Enemy)?;
        enemy.use_pp(index)?;
        let id = enemy.move_slot(index)?.id.clone();
        self.get_move(&id).map(Some)
    }

    /// Makes another party member the active combatant for the side.
    ///
    /// The outgoing combatant's stat stages reset.
    pub fn switch_in(&mut self, side: Side, index: usize) -> Result<()> {
        let incoming = self.party(side).get(index)?;
        if incoming.is_fainted() {
            return Err(general_error(format!(
                "{} cannot be sent out while fainted",
                incoming.name
            )));
        }
        self.active_mut(side)?.stages_mut().reset();
        match side {
            Side::Player => {
                self.player_active = index;
                self.add_participant(index);
            }
            Side::Enemy => {
                self.enemy_active = index;
                self.participants = Vec::from([self.player_active]);
            }
        }
        if self
            .flinch_target
            .is_some_and(|handle| handle.side == side)
        {
            self.flinch_target = None;
        }
        let name = self.active(side)?.name.clone();
        self.log.push(battle_event!(
            "switch",
            format!("mon:{name}"),
            format!("side:{side}"),
            format!("position:{index}"),
        ));
        self.snap_hp_bar(side)
    }

    /// Ends the battle, handing both parties back with all stat stages reset.
    pub(crate) fn into_parties(self) -> (Party, Party) {
        let (mut player, mut enemy) = (self.player, self.enemy);
        player
            .members_mut()
            .chain(enemy.members_mut())
            .for_each(|combatant| combatant.stages_mut().reset());
        (player, enemy)
    }

    pub fn add_participant(&mut self, index: usize) {
        if !self.participants.contains(&index) {
            self.participants.push(index);
        }
    }

    /// Shows the side's active HP on its bar without animating.
    pub fn snap_hp_bar(&mut self, side: Side) -> Result<()> {
        let active = self.active(side)?;
        let (hp, max_hp) = (active.hp(), active.max_hp());
        self.hp_bar.snap_to(side, hp, max_hp);
        Ok(())
    }

    /// Starts animating the bar of the given combatant toward its real HP.
    ///
    /// Returns `false` if the combatant is not shown on a bar.
    pub fn animate_hp_bar(&mut self, handle: CombatantHandle) -> Result<bool> {
        if self.active_handle(handle.side) != handle {
            return Ok(false);
        }
        let combatant = self.combatant(handle)?;
        let (hp, max_hp) = (combatant.hp(), combatant.max_hp());
        self.hp_bar.animate_to(handle.side, hp, max_hp);
        Ok(true)
    }

    /// Logs an HP change of the given kind.
    pub fn log_health(&mut self, kind: &str, handle: CombatantHandle) -> Result<()> {
        let combatant = self.combatant(handle)?;
        let event = battle_event!(
            kind,
            format!("mon:{}", combatant.name),
            format!("side:{}", handle.side),
            format!("health:{}/{}", combatant.hp(), combatant.max_hp()),
        );
        self.log.push(event);
        Ok(())
    }
}
