mod attack;
mod effect_sequencer;
mod step;

pub use effect_sequencer::EffectSequencer;
pub use step::{
    AfterTick,
    AnimationCue,
    AttackContext,
    AttackContextId,
    EffectStep,
    EndPhase,
    SequenceEnd,
    SequencerPhase,
    SequencerState,
};
