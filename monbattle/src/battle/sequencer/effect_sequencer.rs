use std::collections::VecDeque;

use monbattle_prng::rand_util;

use crate::{
    battle::{
        BattleField,
        CombatantHandle,
        Side,
        sequencer::{
            AfterTick,
            AnimationCue,
            AttackContext,
            AttackContextId,
            EffectStep,
            EndPhase,
            SequenceEnd,
            SequencerPhase,
            SequencerState,
            attack::{
                expand_attack,
                expand_end_of_turn,
            },
        },
        status_engine,
    },
    battle_event,
    error::{
        Result,
        WrapOptionError,
        invalid_phase_error,
    },
};

/// What the sequencer does after executing a step.
enum StepFlow {
    /// Run the next step right away.
    Continue,
    /// Wait in the given phase.
    Block(SequencerPhase),
    /// The sequence is over.
    Stop,
}

/// Plays out a queue of [`EffectStep`]s across many frames.
///
/// Message steps wait for an acknowledgement. Animation steps wait for time to pass or for the
/// HP bar to reach the real HP. Attacks and end-of-turn damage are expanded only when reached, so
/// their rolls see the battle as it is at that moment.
#[derive(Debug, Default)]
pub struct EffectSequencer {
    steps: VecDeque<EffectStep>,
    state: SequencerState,
    end_phase: Option<EndPhase>,
    contexts: Vec<AttackContext>,
    message: Option<String>,
    animation: Option<AnimationCue>,
    timer: f32,
    pending_tick: Option<(CombatantHandle, AfterTick)>,
    shakes: u8,
    finished: Option<SequenceEnd>,
}

impl EffectSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != SequencerState::Idle
    }

    /// The message waiting for acknowledgement.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The animation blocking playback.
    pub fn animation(&self) -> Option<AnimationCue> {
        self.animation
    }

    /// Steps still queued, not counting attacks that have not been expanded yet.
    pub fn queued_steps(&self) -> impl Iterator<Item = &EffectStep> {
        self.steps.iter()
    }

    /// Attack contexts created in the current sequence.
    pub fn attack_contexts(&self) -> &[AttackContext] {
        &self.contexts
    }

    /// Takes the result of the last sequence, if it ended since the last call.
    pub fn take_finished(&mut self) -> Option<SequenceEnd> {
        self.finished.take()
    }

    /// Starts a new sequence, advancing to its first step right away.
    pub fn start(
        &mut self,
        field: &mut BattleField,
        steps: Vec<EffectStep>,
        end_phase: EndPhase,
    ) -> Result<()> {
        if self.is_active() {
            return Err(invalid_phase_error("start sequence", "active sequence"));
        }
        log::debug!("starting sequence of {} steps, ending in {end_phase:?}", steps.len());
        self.steps = steps.into();
        self.end_phase = Some(end_phase);
        self.contexts.clear();
        self.message = None;
        self.animation = None;
        self.pending_tick = None;
        self.finished = None;
        self.advance(field)
    }

    /// Progresses timed steps.
    pub fn update(&mut self, field: &mut BattleField, dt: f32) -> Result<()> {
        let phase = match self.state {
            SequencerState::Idle => return Ok(()),
            SequencerState::Active(phase) => phase,
        };
        match phase {
            SequencerPhase::ShowingMessage => Ok(()),
            SequencerPhase::AttackAnimation
            | SequencerPhase::BallThrow
            | SequencerPhase::BallShake => {
                self.timer -= dt;
                if self.timer > 0.0 {
                    return Ok(());
                }
                self.animation = None;
                self.advance(field)
            }
            SequencerPhase::HpTick => {
                let (target, after_tick) = match self.pending_tick {
                    Some(pending) => pending,
                    None => return self.advance(field),
                };
                if field.hp_bar.is_animating(target.side) {
                    return Ok(());
                }
                self.pending_tick = None;
                self.animation = None;
                let flow = self.run_after_tick(field, target, after_tick)?;
                self.proceed(field, flow)
            }
        }
    }

    /// Progresses a message step. Returns `false` if no message was waiting.
    pub fn acknowledge(&mut self, field: &mut BattleField) -> Result<bool> {
        if self.state != SequencerState::Active(SequencerPhase::ShowingMessage) {
            return Ok(false);
        }
        self.message = None;
        self.advance(field)?;
        Ok(true)
    }

    fn proceed(&mut self, field: &mut BattleField, flow: StepFlow) -> Result<()> {
        match flow {
            StepFlow::Continue => self.advance(field),
            StepFlow::Block(phase) => {
                self.state = SequencerState::Active(phase);
                Ok(())
            }
            StepFlow::Stop => Ok(()),
        }
    }

    fn advance(&mut self, field: &mut BattleField) -> Result<()> {
        loop {
            let step = match self.steps.pop_front() {
                Some(step) => step,
                None => {
                    let end_phase = self
                        .end_phase
                        .wrap_expectation("sequence has no end phase")?;
                    self.finish(SequenceEnd::Completed(end_phase));
                    return Ok(());
                }
            };
            log::trace!("executing step: {step:?}");
            match self.execute(field, step)? {
                StepFlow::Continue => continue,
                StepFlow::Block(phase) => {
                    self.state = SequencerState::Active(phase);
                    return Ok(());
                }
                StepFlow::Stop => return Ok(()),
            }
        }
    }

    fn finish(&mut self, end: SequenceEnd) {
        log::debug!("sequence finished: {end:?}");
        self.steps.clear();
        self.state = SequencerState::Idle;
        self.message = None;
        self.animation = None;
        self.pending_tick = None;
        self.finished = Some(end);
    }

    fn push_front(&mut self, steps: Vec<EffectStep>) {
        for step in steps.into_iter().rev() {
            self.steps.push_front(step);
        }
    }

    fn show_message(&mut self, message: String) -> StepFlow {
        self.message = Some(message);
        StepFlow::Block(SequencerPhase::ShowingMessage)
    }

    fn start_timer(&mut self, duration: f32, cue: AnimationCue, phase: SequencerPhase) -> StepFlow {
        self.timer = duration;
        self.animation = Some(cue);
        StepFlow::Block(phase)
    }

    fn context(&self, id: AttackContextId) -> Result<&AttackContext> {
        self.contexts
            .get(id.0)
            .wrap_expectation(format_args!("attack context {} does not exist", id.0))
    }

    fn context_mut(&mut self, id: AttackContextId) -> Result<&mut AttackContext> {
        self.contexts
            .get_mut(id.0)
            .wrap_expectation(format_args!("attack context {} does not exist", id.0))
    }

    /// Removes every queued hit of the attack. Steps that already ran stay applied.
    fn cancel_pending_hits(&mut self, id: AttackContextId) {
        let before = self.steps.len();
        self.steps.retain(|step| {
            !matches!(step, EffectStep::Damage { context: Some(context), .. } if *context == id)
        });
        log::debug!("cancelled {} pending hits", before - self.steps.len());
    }

    fn start_hp_tick(
        &mut self,
        field: &mut BattleField,
        target: CombatantHandle,
        after_tick: AfterTick,
    ) -> Result<StepFlow> {
        if field.animate_hp_bar(target)? && field.hp_bar.is_animating(target.side) {
            self.pending_tick = Some((target, after_tick));
            self.animation = Some(AnimationCue::HpBar { side: target.side });
            return Ok(StepFlow::Block(SequencerPhase::HpTick));
        }
        self.run_after_tick(field, target, after_tick)
    }

    fn run_after_tick(
        &mut self,
        field: &mut BattleField,
        target: CombatantHandle,
        after_tick: AfterTick,
    ) -> Result<StepFlow> {
        match after_tick {
            AfterTick::None => Ok(StepFlow::Continue),
            AfterTick::CancelHitsOnFaint(context) => {
                if field.combatant(target)?.is_fainted() {
                    self.cancel_pending_hits(context);
                }
                Ok(StepFlow::Continue)
            }
            AfterTick::FaintCheck => self.check_faint(field, target),
        }
    }

    fn check_faint(&mut self, field: &BattleField, handle: CombatantHandle) -> Result<StepFlow> {
        if field.combatant(handle)?.is_fainted() {
            self.finish(SequenceEnd::Fainted(handle));
            return Ok(StepFlow::Stop);
        }
        Ok(StepFlow::Continue)
    }

    fn heal(
        &mut self,
        field: &mut BattleField,
        target: CombatantHandle,
        amount: u16,
    ) -> Result<StepFlow> {
        if amount == 0 || field.combatant_mut(target)?.heal(amount) == 0 {
            return Ok(StepFlow::Continue);
        }
        field.log_health("heal", target)?;
        self.start_hp_tick(field, target, AfterTick::None)
    }

    fn execute(&mut self, field: &mut BattleField, step: EffectStep) -> Result<StepFlow> {
        match step {
            EffectStep::Message(message) => Ok(self.show_message(message)),
            EffectStep::Attack {
                side,
                move_data,
                can_flinch,
            } => {
                let steps = expand_attack(field, &mut self.contexts, side, move_data, can_flinch)?;
                self.push_front(steps);
                Ok(StepFlow::Continue)
            }
            EffectStep::AttackAnimation { side } => Ok(self.start_timer(
                field.engine_options.attack_animation_duration,
                AnimationCue::Attack { side },
                SequencerPhase::AttackAnimation,
            )),
            EffectStep::Damage {
                target,
                amount,
                context,
                after_tick,
            } => {
                let lost = field.combatant_mut(target)?.take_damage(amount);
                if let Some(context) = context {
                    let context = self.context_mut(context)?;
                    context.total_damage += lost as u32;
                    context.hits_landed += 1;
                }
                field.log_health("damage", target)?;
                self.start_hp_tick(field, target, after_tick)
            }
            EffectStep::Heal { target, amount } => self.heal(field, target, amount),
            EffectStep::HpRefresh { target } => self.start_hp_tick(field, target, AfterTick::None),
            EffectStep::DrainHeal { context, percent } => {
                let context = self.context(context)?;
                let amount = context.total_damage * percent as u32 / 100;
                let attacker = context.attacker;
                self.heal(field, attacker, amount.min(u16::MAX as u32) as u16)
            }
            EffectStep::PercentHeal { target, percent } => {
                let max_hp = field.combatant(target)?.max_hp() as u32;
                self.heal(field, target, (max_hp * percent as u32 / 100) as u16)
            }
            EffectStep::CriticalMessage { context } => {
                let context = self.context(context)?;
                if context.critical && context.hits_landed > 0 {
                    Ok(self.show_message("Critical hit!".to_owned()))
                } else {
                    Ok(StepFlow::Continue)
                }
            }
            EffectStep::HitCountMessage { context } => {
                let hits = self.context(context)?.hits_landed;
                if hits > 1 {
                    Ok(self.show_message(format!("Hit {hits} times!")))
                } else {
                    Ok(StepFlow::Continue)
                }
            }
            EffectStep::InflictStatus { target, ailment } => {
                let (combatant, prng) = field.combatant_and_prng(target)?;
                if !status_engine::apply_status(prng, combatant, ailment) {
                    return Ok(StepFlow::Continue);
                }
                let name = combatant.name.clone();
                let status = combatant.status();
                field.log.push(battle_event!(
                    "status",
                    format!("mon:{name}"),
                    format!("side:{}", target.side),
                    format!(
                        "status:{}",
                        status.map(|status| status.to_string()).unwrap_or_default()
                    ),
                ));
                Ok(self.show_message(format!("{name} was\n{}!", ailment.inflicted_label())))
            }
            EffectStep::StatStageChange {
                target,
                boost,
                delta,
            } => {
                let combatant = field.combatant_mut(target)?;
                if combatant.is_fainted() || delta == 0 {
                    return Ok(StepFlow::Continue);
                }
                let name = combatant.name.clone();
                let stat = boost.label();
                if !combatant.stages_mut().modify(boost, delta) {
                    let direction = if delta > 0 { "higher" } else { "lower" };
                    return Ok(self.show_message(format!("{name}'s {stat}\nwon't go {direction}!")));
                }
                let stage = combatant.stages().get(boost);
                field.log.push(battle_event!(
                    if delta > 0 { "boost" } else { "unboost" },
                    format!("mon:{name}"),
                    format!("side:{}", target.side),
                    format!("stat:{boost}"),
                    format!("stage:{stage}"),
                ));
                let change = match delta {
                    2.. => "greatly rose",
                    1 => "rose",
                    -1 => "fell",
                    _ => "sharply fell",
                };
                Ok(self.show_message(format!("{name}'s\n{stat} {change}!")))
            }
            EffectStep::ResolveFlinch { context } => {
                let context = self.context(context)?;
                let defender = context.defender;
                let chance = context
                    .move_data
                    .meta
                    .as_ref()
                    .map(|meta| meta.flinch_chance)
                    .unwrap_or(0);
                if chance > 0
                    && !field.combatant(defender)?.is_fainted()
                    && rand_util::percent(field.prng.as_mut(), chance as u64)
                {
                    log::debug!("{defender} will flinch");
                    field.flinch_target = Some(defender);
                }
                Ok(StepFlow::Continue)
            }
            EffectStep::FaintCheck { defender } => self.check_faint(field, defender),
            EffectStep::SwitchIn { party_index } => {
                field.switch_in(Side::Player, party_index)?;
                Ok(StepFlow::Continue)
            }
            EffectStep::BallThrow => {
                self.shakes = 0;
                Ok(self.start_timer(
                    field.engine_options.ball_throw_duration,
                    AnimationCue::BallThrow,
                    SequencerPhase::BallThrow,
                ))
            }
            EffectStep::BallShake => {
                self.shakes += 1;
                Ok(self.start_timer(
                    field.engine_options.ball_shake_duration(),
                    AnimationCue::BallShake { shake: self.shakes },
                    SequencerPhase::BallShake,
                ))
            }
            EffectStep::CatchEnd { caught } => {
                let name = field.active(Side::Enemy)?.name.clone();
                field.caught = caught;
                field.log.push(battle_event!(
                    "catch",
                    format!("mon:{name}"),
                    format!("shakes:{}", self.shakes),
                    if caught { "caught" } else { "brokefree" },
                ));
                Ok(StepFlow::Continue)
            }
            EffectStep::EnemyAttack => {
                let steps = match field.choose_enemy_move()? {
                    Some(move_data) => Vec::from([
                        EffectStep::Attack {
                            side: Side::Enemy,
                            move_data,
                            can_flinch: false,
                        },
                        EffectStep::EndOfTurnStatus,
                    ]),
                    None => Vec::from([EffectStep::Message("Enemy has no moves!".to_owned())]),
                };
                self.push_front(steps);
                Ok(StepFlow::Continue)
            }
            EffectStep::EndOfTurnStatus => {
                let steps = expand_end_of_turn(field)?;
                self.push_front(steps);
                Ok(StepFlow::Continue)
            }
        }
    }
}
