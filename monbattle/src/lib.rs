//! A turn-based monster battle engine in the style of the first generation games.
//!
//! The [`battle::BattleController`] drives a battle between two [`mons::Party`] values. Every
//! state change runs through the [`battle::EffectSequencer`], which blocks on messages and
//! animations so that a presentation layer can play the battle out frame by frame.

extern crate alloc;

pub mod battle;
pub mod error;
pub mod log;
pub mod mons;

pub use monbattle_data as data;
pub use monbattle_prng as prng;
