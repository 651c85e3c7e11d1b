use monbattle_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Battle engine option for how base damage should be randomized in the damage calculation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RandomizeBaseDamage {
    /// Roll the random factor in `[217, 255]`.
    #[default]
    Randomize,
    /// Always use the maximum random factor.
    Max,
    /// Always use the minimum random factor.
    Min,
}

/// How the battle engine should resolve exact speed ties in turn order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedTieResolution {
    /// Flip a coin by advancing RNG.
    #[default]
    Random,
    /// The player acts first.
    Keep,
    /// The enemy acts first.
    Reverse,
}

fn default_rng_factory() -> fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator> {
    RealPseudoRandomNumberGenerator::boxed
}

fn default_attack_animation_duration() -> f32 {
    0.18
}

fn default_ball_throw_duration() -> f32 {
    0.5
}

fn default_ball_shake_frame_time() -> f32 {
    0.06
}

fn default_ball_shake_frames() -> u8 {
    5
}

fn default_ball_shake_pause() -> f32 {
    0.16
}

fn default_intro_duration() -> f32 {
    1.0
}

/// Options that change how the battle engine itself behaves, common across battles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleEngineOptions {
    /// Seconds an attack animation blocks the sequence.
    #[serde(default = "default_attack_animation_duration")]
    pub attack_animation_duration: f32,

    /// Seconds the ball takes to reach the target.
    #[serde(default = "default_ball_throw_duration")]
    pub ball_throw_duration: f32,

    /// Seconds each frame of a ball shake is shown.
    #[serde(default = "default_ball_shake_frame_time")]
    pub ball_shake_frame_time: f32,

    /// Frames in a single ball shake.
    #[serde(default = "default_ball_shake_frames")]
    pub ball_shake_frames: u8,

    /// Seconds the ball rests between shakes.
    #[serde(default = "default_ball_shake_pause")]
    pub ball_shake_pause: f32,

    /// Seconds before the intro message appears.
    #[serde(default = "default_intro_duration")]
    pub intro_duration: f32,

    /// How the random factor of the damage calculation is chosen.
    ///
    /// Useful for tests that need exact damage values.
    #[serde(default)]
    pub randomize_base_damage: RandomizeBaseDamage,

    /// How exact speed ties in turn order are resolved.
    #[serde(default)]
    pub speed_tie_resolution: SpeedTieResolution,

    /// Function for creating the battle's random number generator.
    ///
    /// Primarily useful for tests that need fine-grained control over battle RNG.
    #[serde(skip, default = "default_rng_factory")]
    pub rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,
}

impl BattleEngineOptions {
    /// Total seconds of a single ball shake, including the pause after it.
    pub fn ball_shake_duration(&self) -> f32 {
        self.ball_shake_frame_time * self.ball_shake_frames as f32 + self.ball_shake_pause
    }
}

impl Default for BattleEngineOptions {
    fn default() -> Self {
        Self {
            attack_animation_duration: default_attack_animation_duration(),
            ball_throw_duration: default_ball_throw_duration(),
            ball_shake_frame_time: default_ball_shake_frame_time(),
            ball_shake_frames: default_ball_shake_frames(),
            ball_shake_pause: default_ball_shake_pause(),
            intro_duration: default_intro_duration(),
            randomize_base_damage: RandomizeBaseDamage::default(),
            speed_tie_resolution: SpeedTieResolution::default(),
            rng_factory: default_rng_factory(),
        }
    }
}

/// An opposing trainer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerData {
    pub name: String,
    /// Trainer class, shown before the name ("BUG CATCHER").
    pub class: String,
    #[serde(default)]
    pub prize_money: u32,
}

impl TrainerData {
    /// Full display name ("BUG CATCHER RICK").
    pub fn display_name(&self) -> String {
        if self.class.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.class, self.name)
        }
    }
}

/// The kind of battle.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleKind {
    #[default]
    Wild,
    Trainer(TrainerData),
}

/// Options for a single battle.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BattleOptions {
    /// Seed for the battle's random number generator.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub kind: BattleKind,
}
