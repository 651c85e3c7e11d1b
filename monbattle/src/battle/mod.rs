pub(crate) mod calculations;
pub mod catch;
mod controller;
pub mod damage;
mod decision;
pub mod escape;
pub mod experience;
mod field;
mod hp_bar;
pub mod items;
mod options;
mod sequencer;
mod side;
pub mod speed_order;
mod stat_stages;
pub mod status_engine;

pub use catch::CatchResult;
pub use controller::{
    BattleController,
    BattlePhase,
};
pub use decision::{
    BattleOutcome,
    BattleResult,
    SequenceHandle,
    TurnDecision,
};
pub use experience::LearnMoveOutcome;
pub use field::BattleField;
pub use hp_bar::{
    DEFAULT_HP_BAR_WIDTH,
    FALL_SECONDS_PER_UNIT,
    HpBarDisplay,
    HpBarDriver,
    InstantHpBar,
    RISE_SECONDS_PER_UNIT,
};
pub use items::ItemOutcome;
pub use options::{
    BattleEngineOptions,
    BattleKind,
    BattleOptions,
    RandomizeBaseDamage,
    SpeedTieResolution,
    TrainerData,
};
pub use sequencer::{
    AfterTick,
    AnimationCue,
    AttackContext,
    AttackContextId,
    EffectSequencer,
    EffectStep,
    EndPhase,
    SequenceEnd,
    SequencerPhase,
    SequencerState,
};
pub use side::{
    CombatantHandle,
    Side,
};
pub use speed_order::{
    SpeedOrderable,
    TurnAction,
};
pub use stat_stages::{
    MAX_STAGE,
    MIN_STAGE,
    StatStageTable,
    stage_multiplier,
};
pub use status_engine::{
    MoveGate,
    StatusDamage,
};
