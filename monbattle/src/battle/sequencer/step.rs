use monbattle_data::{
    Ailment,
    Boost,
    MoveData,
};

use crate::battle::{
    CombatantHandle,
    Side,
};

/// Identifies an [`AttackContext`] within a single sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttackContextId(pub(crate) usize);

/// Running totals for one attack while its steps play out.
#[derive(Debug, Clone)]
pub struct AttackContext {
    pub attacker: CombatantHandle,
    pub defender: CombatantHandle,
    pub move_data: MoveData,
    pub planned_hits: u8,
    pub hits_landed: u8,
    pub total_damage: u32,
    pub critical: bool,
}

/// What happens once an HP bar reaches its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterTick {
    None,
    /// Drops the remaining hits of the attack if the target fainted.
    CancelHitsOnFaint(AttackContextId),
    /// Ends the sequence if the target fainted.
    FaintCheck,
}

/// One atomic unit of battle playback.
#[derive(Debug, Clone)]
pub enum EffectStep {
    /// Shows a message until acknowledged.
    Message(String),
    /// A full attack, expanded into its own steps when reached.
    Attack {
        side: Side,
        move_data: MoveData,
        /// Can this attack make the other side flinch this turn?
        can_flinch: bool,
    },
    /// Plays the attack animation of a side.
    AttackAnimation { side: Side },
    /// Deals damage, then waits on the HP bar.
    Damage {
        target: CombatantHandle,
        amount: u16,
        context: Option<AttackContextId>,
        after_tick: AfterTick,
    },
    /// Restores a fixed amount of HP.
    Heal { target: CombatantHandle, amount: u16 },
    /// Waits for the HP bar to catch up with HP that already changed.
    HpRefresh { target: CombatantHandle },
    /// Restores a percent of the damage dealt by an attack to its user.
    DrainHeal {
        context: AttackContextId,
        percent: u8,
    },
    /// Restores a percent of max HP.
    PercentHeal { target: CombatantHandle, percent: u8 },
    /// "Critical hit!", if the attack landed one.
    CriticalMessage { context: AttackContextId },
    /// "Hit N times!", if the attack hit more than once.
    HitCountMessage { context: AttackContextId },
    /// Inflicts a status that was already rolled.
    InflictStatus {
        target: CombatantHandle,
        ailment: Ailment,
    },
    /// Changes a stat stage and reports the result.
    StatStageChange {
        target: CombatantHandle,
        boost: Boost,
        delta: i8,
    },
    /// Rolls whether the attack's target flinches.
    ResolveFlinch { context: AttackContextId },
    /// Ends the sequence if the combatant fainted.
    FaintCheck { defender: CombatantHandle },
    /// Sends out another member of the player's party.
    SwitchIn { party_index: usize },
    /// Throws a ball at the enemy.
    BallThrow,
    /// A single shake of the ball.
    BallShake,
    /// Resolves a catch attempt.
    CatchEnd { caught: bool },
    /// The enemy picks a move and attacks, expanded when reached.
    EnemyAttack,
    /// Damage from burn and poison, expanded when reached.
    EndOfTurnStatus,
}

/// Phase of an active sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerPhase {
    ShowingMessage,
    AttackAnimation,
    HpTick,
    BallThrow,
    BallShake,
}

/// State of the effect sequencer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    #[default]
    Idle,
    Active(SequencerPhase),
}

/// Where the battle goes once a sequence runs out of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndPhase {
    BattleMenu,
    /// The enemy takes its turn after a player action that was not an attack.
    EnemyTurn,
    /// The enemy attacks after a failed escape.
    EnemyAttack,
    End,
}

/// How a sequence ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceEnd {
    /// Every step ran.
    Completed(EndPhase),
    /// A combatant fainted and the rest of the sequence was dropped.
    Fainted(CombatantHandle),
}

/// The animation currently blocking playback, for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationCue {
    Intro,
    Attack { side: Side },
    HpBar { side: Side },
    BallThrow,
    BallShake { shake: u8 },
}
