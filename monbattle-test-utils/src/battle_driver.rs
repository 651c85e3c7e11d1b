use anyhow::{
    Error,
    Result,
};
use monbattle::battle::{
    BattleController,
    BattlePhase,
};

/// Seconds advanced per frame when no message is waiting.
pub const FRAME_SECONDS: f32 = 1.0 / 60.0;

const MAX_ITERATIONS: usize = 100_000;

/// Plays the battle until it needs a decision from the player, acknowledging every message on
/// the way.
///
/// Returns all messages shown, in order.
pub fn play_until_input(battle: &mut BattleController) -> Result<Vec<String>> {
    play_until_input_with_dt(battle, FRAME_SECONDS)
}

/// Same as [`play_until_input`], advancing time by `dt` seconds per frame.
pub fn play_until_input_with_dt(battle: &mut BattleController, dt: f32) -> Result<Vec<String>> {
    let mut messages = Vec::new();
    for _ in 0..MAX_ITERATIONS {
        match battle.phase() {
            BattlePhase::Intro | BattlePhase::Sequence => {
                if let Some(message) = battle.current_message() {
                    messages.push(message.to_owned());
                    battle.acknowledge()?;
                } else {
                    battle.update(dt)?;
                }
            }
            BattlePhase::ShowingMessage => {
                if let Some(message) = battle.current_message() {
                    messages.push(message.to_owned());
                }
                battle.acknowledge()?;
            }
            // Prompts stay on screen while waiting for the answer.
            BattlePhase::MoveLearnChoice | BattlePhase::ForgetMove | BattlePhase::ForcedSwitch => {
                if let Some(message) = battle.current_message() {
                    messages.push(message.to_owned());
                }
                return Ok(messages);
            }
            BattlePhase::BattleMenu | BattlePhase::MoveSelection | BattlePhase::End => {
                return Ok(messages);
            }
        }
    }
    Err(Error::msg(format!(
        "battle did not wait for input after {MAX_ITERATIONS} frames: {:?}",
        battle.phase()
    )))
}

/// Removes critical hit messages, which depend on rolls most tests do not control.
pub fn without_critical_hits(messages: Vec<String>) -> Vec<String> {
    messages
        .into_iter()
        .filter(|message| message != "Critical hit!")
        .collect()
}
