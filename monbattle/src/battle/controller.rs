use std::collections::VecDeque;

use monbattle_data::{
    DataStore,
    Fraction,
    ItemData,
    ItemEffect,
    MoveData,
};
use monbattle_prng::PseudoRandomNumberGenerator;

use crate::{
    battle::{
        AnimationCue,
        BattleEngineOptions,
        BattleField,
        BattleKind,
        BattleOptions,
        BattleOutcome,
        BattleResult,
        CombatantHandle,
        EffectSequencer,
        EffectStep,
        EndPhase,
        HpBarDriver,
        LearnMoveOutcome,
        SequenceEnd,
        SequenceHandle,
        Side,
        TurnAction,
        TurnDecision,
        catch,
        escape,
        experience,
        items,
        speed_order,
    },
    battle_event,
    error::{
        Result,
        WrapOptionError,
        general_error,
        invalid_phase_error,
    },
    log::EventLog,
    mons::{
        Combatant,
        Party,
    },
};

/// Phase of the battle flow.
///
/// The presentation layer uses the phase to decide which input to collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    /// The intro animation is playing.
    Intro,
    /// A flow message is shown, waiting for acknowledgement.
    ShowingMessage,
    /// Waiting for a turn decision.
    BattleMenu,
    /// The move list is open.
    MoveSelection,
    /// Asking whether a new move should replace an old one.
    MoveLearnChoice,
    /// Asking which move to forget.
    ForgetMove,
    /// The active player combatant fainted and another must be chosen.
    ForcedSwitch,
    /// An effect sequence is playing.
    Sequence,
    /// The battle is over.
    End,
}

/// Work queued between sequences: victory, experience, level-ups and the like.
#[derive(Debug, Clone)]
enum FlowItem {
    Message(String),
    GainExperience { member: usize, amount: u32 },
    LevelUp { member: usize, level: u8 },
    LearnMove { member: usize, move_id: String },
    PromptLearn,
    SendOutNext { index: usize },
    ForcedSwitchPrompt,
    Finish(BattleOutcome),
}

#[derive(Debug, Clone)]
struct PendingLearn {
    member: usize,
    move_data: MoveData,
}

/// Drives a single battle from intro to outcome.
///
/// The controller owns the [`BattleField`] and the [`EffectSequencer`]. Presentation code feeds
/// it frame time through [`BattleController::update`], confirmations through
/// [`BattleController::acknowledge`], and the player's choices through
/// [`BattleController::start_turn`] and the prompt answers.
pub struct BattleController<'d> {
    field: BattleField<'d>,
    sequencer: EffectSequencer,
    phase: BattlePhase,
    intro_timer: f32,
    flow: VecDeque<FlowItem>,
    message: Option<String>,
    pending_learn: Option<PendingLearn>,
    escape_attempts: u32,
    outcome: Option<BattleOutcome>,
    next_sequence_id: u64,
}

impl<'d> BattleController<'d> {
    /// Creates a new battle between two parties.
    ///
    /// The first living member of each party starts out active.
    pub fn new(
        data: &'d dyn DataStore,
        player: Party,
        enemy: Party,
        options: BattleOptions,
        engine_options: BattleEngineOptions,
        hp_bar: Box<dyn HpBarDriver>,
    ) -> Result<Self> {
        let prng = (engine_options.rng_factory)(options.seed);
        let intro_timer = engine_options.intro_duration;
        let field = BattleField::new(
            data,
            engine_options,
            options.kind,
            prng,
            player,
            enemy,
            hp_bar,
        )?;
        let mut controller = Self {
            field,
            sequencer: EffectSequencer::new(),
            phase: BattlePhase::Intro,
            intro_timer,
            flow: VecDeque::new(),
            message: None,
            pending_learn: None,
            escape_attempts: 0,
            outcome: None,
            next_sequence_id: 0,
        };
        controller.queue_intro()?;
        Ok(controller)
    }

    fn queue_intro(&mut self) -> Result<()> {
        let enemy = self.field.active(Side::Enemy)?.name.clone();
        let player = self.field.active(Side::Player)?.name.clone();
        match &self.field.kind {
            BattleKind::Wild => {
                self.field.log.push(battle_event!("start", "kind:wild"));
                self.flow
                    .push_back(FlowItem::Message(format!("Wild {enemy}\nappeared!")));
            }
            BattleKind::Trainer(trainer) => {
                self.field.log.push(battle_event!(
                    "start",
                    "kind:trainer",
                    format!("trainer:{}", trainer.display_name()),
                ));
                self.flow.push_back(FlowItem::Message(format!(
                    "{}\nwants to fight!",
                    trainer.display_name()
                )));
                self.flow.push_back(FlowItem::Message(format!(
                    "{} sent out\n{enemy}!",
                    trainer.name
                )));
            }
        }
        self.flow
            .push_back(FlowItem::Message(format!("Go! {player}!")));
        Ok(())
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Is the battle over?
    pub fn is_complete(&self) -> bool {
        self.phase == BattlePhase::End
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    /// The message currently shown, if any.
    pub fn current_message(&self) -> Option<&str> {
        match self.phase {
            BattlePhase::Sequence => self.sequencer.message(),
            _ => self.message.as_deref(),
        }
    }

    /// The animation the presentation layer should be playing, if any.
    pub fn current_animation_target(&self) -> Option<AnimationCue> {
        match self.phase {
            BattlePhase::Intro => Some(AnimationCue::Intro),
            BattlePhase::Sequence => self.sequencer.animation(),
            _ => None,
        }
    }

    pub fn player(&self) -> &Party {
        &self.field.player
    }

    pub fn enemy(&self) -> &Party {
        &self.field.enemy
    }

    /// The active combatant of a side.
    pub fn active(&self, side: Side) -> Result<&Combatant> {
        self.field.active(side)
    }

    pub fn active_index(&self, side: Side) -> usize {
        self.field.active_index(side)
    }

    pub fn hp_bar(&self) -> &dyn HpBarDriver {
        self.field.hp_bar.as_ref()
    }

    /// The battle's random number generator.
    pub fn prng(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.field.prng.as_mut()
    }

    pub fn sequencer(&self) -> &EffectSequencer {
        &self.sequencer
    }

    pub fn escape_attempts(&self) -> u32 {
        self.escape_attempts
    }

    /// The battle event log.
    pub fn log(&self) -> &EventLog {
        &self.field.log
    }

    /// Reads out all event log lines added since the last call.
    pub fn new_log_entries(&mut self) -> impl Iterator<Item = &str> {
        self.field.log.read_out()
    }

    fn enter_phase(&mut self, phase: BattlePhase) {
        if self.phase != phase {
            log::debug!("battle phase {:?} -> {phase:?}", self.phase);
        }
        self.phase = phase;
    }

    fn show(&mut self, message: String) {
        self.message = Some(message);
        self.enter_phase(BattlePhase::ShowingMessage);
    }

    /// Advances the battle by `dt` seconds.
    pub fn update(&mut self, dt: f32) -> Result<()> {
        self.field.hp_bar.tick(dt);
        match self.phase {
            BattlePhase::Intro => {
                self.intro_timer -= dt;
                if self.intro_timer <= 0.0 {
                    self.run_flow()?;
                }
                Ok(())
            }
            BattlePhase::Sequence => {
                self.sequencer.update(&mut self.field, dt)?;
                self.after_sequence()
            }
            _ => Ok(()),
        }
    }

    /// Confirms the current message. Returns `false` if no message was waiting.
    pub fn acknowledge(&mut self) -> Result<bool> {
        match self.phase {
            BattlePhase::ShowingMessage => {
                self.message = None;
                self.run_flow()?;
                Ok(true)
            }
            BattlePhase::Sequence => {
                let acknowledged = self.sequencer.acknowledge(&mut self.field)?;
                self.after_sequence()?;
                Ok(acknowledged)
            }
            _ => Ok(false),
        }
    }

    /// Opens the move list from the battle menu.
    pub fn open_move_selection(&mut self) -> Result<()> {
        if self.phase != BattlePhase::BattleMenu {
            return Err(invalid_phase_error("open move selection", format!("{:?}", self.phase)));
        }
        self.enter_phase(BattlePhase::MoveSelection);
        Ok(())
    }

    /// Closes the move list without choosing a move.
    pub fn cancel_move_selection(&mut self) -> Result<()> {
        if self.phase != BattlePhase::MoveSelection {
            return Err(invalid_phase_error(
                "cancel move selection",
                format!("{:?}", self.phase),
            ));
        }
        self.enter_phase(BattlePhase::BattleMenu);
        Ok(())
    }

    /// Starts the turn for the player's decision.
    ///
    /// Decisions that cannot be carried out show a message and return to the battle menu
    /// without consuming the turn.
    pub fn start_turn(&mut self, decision: TurnDecision) -> Result<SequenceHandle> {
        if !matches!(
            self.phase,
            BattlePhase::BattleMenu | BattlePhase::MoveSelection
        ) {
            return Err(invalid_phase_error("start turn", format!("{:?}", self.phase)));
        }
        log::debug!("player decision: {decision:?}");
        let consumed_turn = match decision {
            TurnDecision::Fight { move_slot } => self.fight(move_slot)?,
            TurnDecision::UseItem { item, target } => self.use_item(&item, target)?,
            TurnDecision::Switch { party_index } => self.switch(party_index)?,
            TurnDecision::Run => self.run()?,
        };
        let id = self.next_sequence_id;
        self.next_sequence_id += 1;
        Ok(SequenceHandle { id, consumed_turn })
    }

    fn start_sequence(&mut self, steps: Vec<EffectStep>, end_phase: EndPhase) -> Result<()> {
        self.enter_phase(BattlePhase::Sequence);
        self.sequencer.start(&mut self.field, steps, end_phase)?;
        self.after_sequence()
    }

    fn refuse(&mut self, message: String) -> Result<bool> {
        self.start_sequence(Vec::from([EffectStep::Message(message)]), EndPhase::BattleMenu)?;
        Ok(false)
    }

    fn fight(&mut self, move_slot: usize) -> Result<bool> {
        let slot = self.field.active(Side::Player)?.move_slot(move_slot)?;
        let (pp, move_id) = (slot.pp, slot.id.clone());
        if pp == 0 {
            return self.refuse("No PP left!".to_owned());
        }
        let player_move = self.field.get_move(&move_id)?;
        self.escape_attempts = 0;
        self.field.active_mut(Side::Player)?.use_pp(move_slot)?;
        let enemy_move = self.field.choose_enemy_move()?;

        let player_action = TurnAction {
            side: Side::Player,
            priority: player_move.priority,
            speed: self.field.active(Side::Player)?.effective_speed(),
        };
        let enemy_action = TurnAction {
            side: Side::Enemy,
            priority: enemy_move.as_ref().map(|data| data.priority).unwrap_or(0),
            speed: self.field.active(Side::Enemy)?.effective_speed(),
        };
        let tie_resolution = self.field.engine_options.speed_tie_resolution;
        let order = speed_order::resolve_turn_order(
            self.field.prng.as_mut(),
            tie_resolution,
            player_action,
            enemy_action,
        );

        let mut steps = Vec::new();
        for (position, side) in order.into_iter().enumerate() {
            let move_data = match side {
                Side::Player => Some(player_move.clone()),
                Side::Enemy => enemy_move.clone(),
            };
            match move_data {
                Some(move_data) => steps.push(EffectStep::Attack {
                    side,
                    move_data,
                    can_flinch: position == 0,
                }),
                None => steps.push(EffectStep::Message("Enemy has no moves!".to_owned())),
            }
        }
        steps.push(EffectStep::EndOfTurnStatus);
        self.start_sequence(steps, EndPhase::BattleMenu)?;
        Ok(true)
    }

    fn use_item(&mut self, id: &str, target: usize) -> Result<bool> {
        let item = self
            .field
            .data
            .get_item(id)?
            .wrap_not_found_error(format_args!("item {id}"))?;
        if let ItemEffect::Ball { bonus, force_catch } = &item.effect {
            return self.throw_ball(&item, *bonus, *force_catch);
        }
        let target = if item.effect.targets_party() {
            target
        } else {
            self.field.active_index(Side::Player)
        };

        let combatant = self.field.player.get_mut(target)?;
        let outcome = items::apply_item(&item.effect, combatant);
        let name = combatant.name.clone();
        if !outcome.succeeded() {
            return self.refuse(outcome.message(&name));
        }

        self.escape_attempts = 0;
        self.field.log.push(battle_event!(
            "item",
            format!("name:{}", item.name),
            format!("mon:{name}"),
            "consumed",
        ));
        self.start_sequence(
            Vec::from([
                EffectStep::Message(format!("Used {}!", item.name)),
                EffectStep::HpRefresh {
                    target: CombatantHandle::new(Side::Player, target),
                },
                EffectStep::Message(outcome.message(&name)),
            ]),
            EndPhase::EnemyTurn,
        )?;
        Ok(true)
    }

    fn throw_ball(&mut self, item: &ItemData, bonus: Fraction, force_catch: bool) -> Result<bool> {
        if self.field.is_trainer_battle() {
            return self.refuse("The trainer blocked the BALL!".to_owned());
        }
        self.escape_attempts = 0;
        let handle = self.field.active_handle(Side::Enemy);
        let (enemy, prng) = self.field.combatant_and_prng(handle)?;
        let result = catch::calculate_catch_chance(prng, enemy, bonus, force_catch);
        let name = enemy.name.clone();
        log::debug!("catch attempt on {name}: {result:?}");
        self.field.log.push(battle_event!(
            "item",
            format!("name:{}", item.name),
            "consumed",
        ));

        let mut steps = Vec::from([
            EffectStep::Message(format!("Used {}!", item.name)),
            EffectStep::BallThrow,
        ]);
        steps.extend((0..result.animation_shakes()).map(|_| EffectStep::BallShake));
        if result.caught {
            steps.push(EffectStep::Message(format!("Gotcha!\n{name} was caught!")));
            if self.field.player.is_full() {
                steps.push(EffectStep::Message("Party is full!".to_owned()));
            } else {
                steps.push(EffectStep::Message(format!("{name} was\nadded to party!")));
            }
            steps.push(EffectStep::CatchEnd { caught: true });
            self.start_sequence(steps, EndPhase::End)?;
        } else {
            steps.push(EffectStep::Message(format!("{name}\nbroke free!")));
            steps.push(EffectStep::CatchEnd { caught: false });
            steps.push(EffectStep::EnemyAttack);
            self.start_sequence(steps, EndPhase::BattleMenu)?;
        }
        Ok(true)
    }

    fn switch(&mut self, party_index: usize) -> Result<bool> {
        let incoming = self.field.player.get(party_index)?;
        let incoming_name = incoming.name.clone();
        let fainted = incoming.is_fainted();
        if party_index == self.field.active_index(Side::Player) {
            return self.refuse(format!("{incoming_name} is\nalready out!"));
        }
        if fainted {
            return self.refuse("There's no will\nto fight!".to_owned());
        }
        let outgoing_name = self.field.active(Side::Player)?.name.clone();
        self.escape_attempts = 0;
        self.start_sequence(
            Vec::from([
                EffectStep::Message(format!("{outgoing_name},\ncome back!")),
                EffectStep::SwitchIn { party_index },
                EffectStep::Message(format!("Go! {incoming_name}!")),
            ]),
            EndPhase::EnemyTurn,
        )?;
        Ok(true)
    }

    fn run(&mut self) -> Result<bool> {
        if self.field.is_trainer_battle() {
            return self.refuse("Can't run from a\ntrainer battle!".to_owned());
        }
        self.escape_attempts += 1;
        let player_speed = self.field.active(Side::Player)?.effective_speed().max(1);
        let enemy_speed = self.field.active(Side::Enemy)?.effective_speed().max(1);
        let escaped = escape::escape_succeeds(
            self.field.prng.as_mut(),
            player_speed,
            enemy_speed,
            self.escape_attempts,
        );
        self.field.log.push(battle_event!(
            "escape",
            format!("attempt:{}", self.escape_attempts),
            if escaped { "success" } else { "fail" },
        ));
        if escaped {
            self.start_sequence(
                Vec::from([EffectStep::Message("Got away safely!".to_owned())]),
                EndPhase::End,
            )?;
        } else {
            self.start_sequence(
                Vec::from([EffectStep::Message("Can't escape!".to_owned())]),
                EndPhase::EnemyAttack,
            )?;
        }
        Ok(true)
    }

    fn after_sequence(&mut self) -> Result<()> {
        let end = match self.sequencer.take_finished() {
            Some(end) => end,
            None => return Ok(()),
        };
        match end {
            SequenceEnd::Completed(EndPhase::BattleMenu) => self.run_flow(),
            SequenceEnd::Completed(EndPhase::EnemyTurn | EndPhase::EnemyAttack) => {
                self.start_sequence(Vec::from([EffectStep::EnemyAttack]), EndPhase::BattleMenu)
            }
            SequenceEnd::Completed(EndPhase::End) => {
                let outcome = if self.field.caught {
                    BattleOutcome::Caught
                } else {
                    BattleOutcome::Escaped
                };
                self.flow.push_back(FlowItem::Finish(outcome));
                self.run_flow()
            }
            SequenceEnd::Fainted(handle) => self.handle_faint(handle),
        }
    }

    fn handle_faint(&mut self, handle: CombatantHandle) -> Result<()> {
        let name = self.field.combatant(handle)?.name.clone();
        self.field.log.push(battle_event!(
            "faint",
            format!("mon:{name}"),
            format!("side:{}", handle.side),
        ));
        match handle.side {
            Side::Enemy => self.queue_victory(handle, &name)?,
            Side::Player => self.queue_player_faint(&name),
        }
        self.run_flow()
    }

    fn queue_victory(&mut self, defeated: CombatantHandle, name: &str) -> Result<()> {
        let prefix = self.field.attacker_prefix(Side::Enemy);
        self.flow
            .push_back(FlowItem::Message(format!("{prefix}{name}\nfainted!")));

        let recipients = self
            .field
            .participants
            .iter()
            .copied()
            .filter(|index| {
                self.field
                    .player
                    .get(*index)
                    .is_ok_and(|combatant| !combatant.is_fainted())
            })
            .collect::<Vec<_>>();
        if !recipients.is_empty() {
            let amount = experience::calculate_exp_gain(
                self.field.combatant(defeated)?,
                self.field.is_trainer_battle(),
                recipients.len(),
            );
            for member in recipients {
                self.flow
                    .push_back(FlowItem::GainExperience { member, amount });
            }
        }

        match &self.field.kind {
            BattleKind::Wild => self.flow.push_back(FlowItem::Finish(BattleOutcome::Won)),
            BattleKind::Trainer(trainer) => match self.field.enemy.first_alive() {
                Some(index) => self.flow.push_back(FlowItem::SendOutNext { index }),
                None => {
                    self.field.log.push(battle_event!(
                        "prize",
                        format!("money:{}", trainer.prize_money),
                    ));
                    self.flow.push_back(FlowItem::Message(format!(
                        "Got ¥{} for\nwinning!",
                        trainer.prize_money
                    )));
                    self.flow.push_back(FlowItem::Finish(BattleOutcome::Won));
                }
            },
        }
        Ok(())
    }

    fn queue_player_faint(&mut self, name: &str) {
        self.flow
            .push_back(FlowItem::Message(format!("{name}\nfainted!")));
        if self.field.player.has_alive() {
            self.flow.push_back(FlowItem::ForcedSwitchPrompt);
        } else {
            self.flow.push_back(FlowItem::Message(
                "You have no more\nPOKéMON!".to_owned(),
            ));
            self.flow
                .push_back(FlowItem::Message("You blacked out!".to_owned()));
            self.flow.push_back(FlowItem::Finish(BattleOutcome::Lost));
        }
    }

    fn push_flow_front(&mut self, items: Vec<FlowItem>) {
        for item in items.into_iter().rev() {
            self.flow.push_front(item);
        }
    }

    /// Processes queued flow items until one needs input.
    ///
    /// An empty queue returns to the battle menu.
    fn run_flow(&mut self) -> Result<()> {
        while let Some(item) = self.flow.pop_front() {
            log::trace!("flow item: {item:?}");
            if self.execute_flow(item)? {
                return Ok(());
            }
        }
        self.message = None;
        self.enter_phase(BattlePhase::BattleMenu);
        Ok(())
    }

    /// Executes a flow item, returning `true` if the flow must wait for input.
    fn execute_flow(&mut self, item: FlowItem) -> Result<bool> {
        match item {
            FlowItem::Message(message) => {
                self.show(message);
                Ok(true)
            }
            FlowItem::GainExperience { member, amount } => {
                let combatant = self.field.player.get_mut(member)?;
                if combatant.is_fainted() {
                    return Ok(false);
                }
                let name = combatant.name.clone();
                let levels = experience::gain_experience(combatant, amount);
                self.field.log.push(battle_event!(
                    "exp",
                    format!("mon:{name}"),
                    format!("exp:{amount}"),
                ));
                self.push_flow_front(
                    levels
                        .into_iter()
                        .map(|level| FlowItem::LevelUp { member, level })
                        .collect(),
                );
                self.show(format!("{name}\ngained {amount} EXP. Points!"));
                Ok(true)
            }
            FlowItem::LevelUp { member, level } => {
                let combatant = self.field.player.get(member)?;
                let name = combatant.name.clone();
                let species = self
                    .field
                    .data
                    .get_species(&combatant.species)?
                    .wrap_not_found_error(format_args!("species {}", combatant.species))?;
                self.push_flow_front(
                    species
                        .moves_learned_at(level)
                        .map(|move_id| FlowItem::LearnMove {
                            member,
                            move_id: move_id.to_owned(),
                        })
                        .collect(),
                );
                self.field.log.push(battle_event!(
                    "level",
                    format!("mon:{name}"),
                    format!("level:{level}"),
                ));
                if member == self.field.active_index(Side::Player) {
                    self.field.snap_hp_bar(Side::Player)?;
                }
                self.show(format!("{name}\ngrew to Lv.{level}!"));
                Ok(true)
            }
            FlowItem::LearnMove { member, move_id } => {
                let move_data = self.field.get_move(&move_id)?;
                let combatant = self.field.player.get_mut(member)?;
                let name = combatant.name.clone();
                match experience::try_learn_move(combatant, &move_data)? {
                    LearnMoveOutcome::AlreadyKnown => {
                        self.show(format!("{name} already knows\n{}.", move_data.name));
                    }
                    LearnMoveOutcome::Learned => {
                        self.field.log.push(battle_event!(
                            "learn",
                            format!("mon:{name}"),
                            format!("move:{}", move_data.name),
                        ));
                        self.show(format!("{name} learned\n{}!", move_data.name));
                    }
                    LearnMoveOutcome::NeedsReplacement => {
                        let move_name = move_data.name.clone();
                        self.pending_learn = Some(PendingLearn { member, move_data });
                        self.push_flow_front(Vec::from([
                            FlowItem::Message(format!(
                                "But {name} can't\nlearn more than four moves!"
                            )),
                            FlowItem::PromptLearn,
                        ]));
                        self.show(format!("{name} is trying to\nlearn {move_name}!"));
                    }
                }
                Ok(true)
            }
            FlowItem::PromptLearn => {
                let pending = self
                    .pending_learn
                    .as_ref()
                    .wrap_expectation("no move is waiting to be learned")?;
                self.message = Some(format!(
                    "Delete an older\nmove to make room\nfor {}?",
                    pending.move_data.name
                ));
                self.enter_phase(BattlePhase::MoveLearnChoice);
                Ok(true)
            }
            FlowItem::SendOutNext { index } => {
                let trainer = match &self.field.kind {
                    BattleKind::Trainer(trainer) => trainer.name.clone(),
                    BattleKind::Wild => {
                        return Err(general_error("wild battles have a single enemy"));
                    }
                };
                self.field.switch_in(Side::Enemy, index)?;
                let name = self.field.active(Side::Enemy)?.name.clone();
                self.show(format!("{trainer} sent out\n{name}!"));
                Ok(true)
            }
            FlowItem::ForcedSwitchPrompt => {
                self.message = Some("Choose next POKéMON!".to_owned());
                self.enter_phase(BattlePhase::ForcedSwitch);
                Ok(true)
            }
            FlowItem::Finish(outcome) => {
                log::debug!("battle finished: {outcome:?}");
                self.field
                    .log
                    .push(battle_event!("end", format!("outcome:{outcome}")));
                self.outcome = Some(outcome);
                self.flow.clear();
                self.message = None;
                self.enter_phase(BattlePhase::End);
                Ok(true)
            }
        }
    }

    /// Answers the prompt to replace an old move with a newly learnable one.
    pub fn answer_move_learning(&mut self, accept: bool) -> Result<()> {
        if self.phase != BattlePhase::MoveLearnChoice {
            return Err(invalid_phase_error(
                "answer move learning",
                format!("{:?}", self.phase),
            ));
        }
        if accept {
            self.message = Some("Which move should\nbe forgotten?".to_owned());
            self.enter_phase(BattlePhase::ForgetMove);
            return Ok(());
        }
        let pending = self
            .pending_learn
            .take()
            .wrap_expectation("no move is waiting to be learned")?;
        let name = self.field.player.get(pending.member)?.name.clone();
        self.message = None;
        self.flow.push_front(FlowItem::Message(format!(
            "{name} did not\nlearn {}!",
            pending.move_data.name
        )));
        self.run_flow()
    }

    /// Forgets the move in the given slot for the pending move.
    ///
    /// Passing no slot goes back to the learning prompt.
    pub fn forget_move(&mut self, slot: Option<usize>) -> Result<()> {
        if self.phase != BattlePhase::ForgetMove {
            return Err(invalid_phase_error("forget move", format!("{:?}", self.phase)));
        }
        let slot = match slot {
            Some(slot) => slot,
            None => {
                self.message = None;
                self.flow.push_front(FlowItem::PromptLearn);
                return self.run_flow();
            }
        };
        let member = self
            .pending_learn
            .as_ref()
            .wrap_expectation("no move is waiting to be learned")?
            .member;
        self.field.player.get(member)?.move_slot(slot)?;
        let pending = self
            .pending_learn
            .take()
            .wrap_expectation("no move is waiting to be learned")?;

        let combatant = self.field.player.get_mut(member)?;
        let forgotten = experience::replace_move(combatant, slot, &pending.move_data)?;
        let name = combatant.name.clone();
        self.field.log.push(battle_event!(
            "learn",
            format!("mon:{name}"),
            format!("move:{}", pending.move_data.name),
            format!("forgot:{}", forgotten.name),
        ));
        self.message = None;
        self.push_flow_front(Vec::from([
            FlowItem::Message("1, 2 and... Poof!".to_owned()),
            FlowItem::Message(format!("{name} forgot\n{}!", forgotten.name)),
            FlowItem::Message(format!("{name} learned\n{}!", pending.move_data.name)),
        ]));
        self.run_flow()
    }

    /// Sends out a party member after the active one fainted.
    ///
    /// Returns `false` if the chosen member cannot battle.
    pub fn choose_forced_switch(&mut self, party_index: usize) -> Result<bool> {
        if self.phase != BattlePhase::ForcedSwitch {
            return Err(invalid_phase_error(
                "choose forced switch",
                format!("{:?}", self.phase),
            ));
        }
        let incoming = self.field.player.get(party_index)?;
        if incoming.is_fainted() {
            return Ok(false);
        }
        let name = incoming.name.clone();
        self.field.switch_in(Side::Player, party_index)?;
        self.message = None;
        self.flow
            .push_front(FlowItem::Message(format!("Go! {name}!")));
        self.run_flow()?;
        Ok(true)
    }

    /// Ends the battle, handing both parties back to their owners.
    ///
    /// A caught combatant joins the player's party, or is returned separately if the party is
    /// full. All stat stages reset.
    pub fn into_result(self) -> Result<BattleResult> {
        let outcome = self.outcome.wrap_expectation("battle is not over")?;
        let enemy_index = self.field.active_index(Side::Enemy);
        let (mut player, mut enemy) = self.field.into_parties();
        let mut caught = None;
        if outcome == BattleOutcome::Caught {
            let combatant = enemy.remove(enemy_index)?;
            if let Err(combatant) = player.add(combatant) {
                caught = Some(combatant);
            }
        }
        Ok(BattleResult {
            outcome,
            player,
            enemy,
            caught,
        })
    }
}
