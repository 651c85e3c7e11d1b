use monbattle_data::{
    Boost,
    Fraction,
    ItemEffect,
};

use crate::mons::{
    Combatant,
    Status,
};

/// Message shown when an item does nothing.
pub const NO_EFFECT_MESSAGE: &str = "It won't have any effect.";

/// Result of using an item on a combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    /// HP was restored.
    Healed { amount: u16 },
    /// HP was restored and any status cured.
    Restored { amount: u16, cured: Option<Status> },
    /// A status was cured.
    Cured { status: Status },
    /// A fainted combatant was revived.
    Revived { hp: u16 },
    /// A stat stage rose by one.
    Boosted { boost: Boost },
    /// The stat stage is already at its maximum.
    BoostMaxed { boost: Boost },
    /// A ball should be thrown at the enemy.
    Ball { bonus: Fraction, force_catch: bool },
    /// Nothing happened.
    NoEffect,
}

impl ItemOutcome {
    /// Did the item do something? Failed item use does not take a turn.
    pub fn succeeded(&self) -> bool {
        !matches!(self, Self::NoEffect | Self::BoostMaxed { .. })
    }

    /// The message describing the outcome for the named combatant.
    pub fn message(&self, name: &str) -> String {
        match self {
            Self::Healed { amount } | Self::Restored { amount, .. } if *amount > 0 => {
                format!("{name}\nrecovered by {amount}!")
            }
            Self::Healed { .. } | Self::Restored { .. } | Self::Cured { .. } => {
                format!("{name} was\ncured!")
            }
            Self::Revived { .. } => format!("{name} is\nrevitalized!"),
            Self::Boosted { boost } => format!("{name}'s\n{} rose!", boost.label()),
            Self::BoostMaxed { boost } => format!("{name}'s {}\nwon't go higher!", boost.label()),
            Self::Ball { .. } => String::new(),
            Self::NoEffect => NO_EFFECT_MESSAGE.to_owned(),
        }
    }
}

/// Applies an item to a combatant.
///
/// Balls are not applied here. They only report their catch parameters.
pub fn apply_item(effect: &ItemEffect, target: &mut Combatant) -> ItemOutcome {
    match effect {
        ItemEffect::Heal { amount } => heal(target, *amount),
        ItemEffect::FullHeal => {
            let max_hp = target.max_hp();
            heal(target, max_hp)
        }
        ItemEffect::FullRestore => {
            if target.is_fainted() {
                return ItemOutcome::NoEffect;
            }
            let max_hp = target.max_hp();
            let amount = target.heal(max_hp);
            let cured = target.clear_status();
            if amount == 0 && cured.is_none() {
                return ItemOutcome::NoEffect;
            }
            ItemOutcome::Restored { amount, cured }
        }
        ItemEffect::CureStatus { ailments } => match target.status() {
            Some(status) if !target.is_fainted() && ailments.contains(&status.ailment()) => {
                target.clear_status();
                ItemOutcome::Cured { status }
            }
            _ => ItemOutcome::NoEffect,
        },
        ItemEffect::CureAllStatus => match target.status() {
            Some(status) if !target.is_fainted() => {
                target.clear_status();
                ItemOutcome::Cured { status }
            }
            _ => ItemOutcome::NoEffect,
        },
        ItemEffect::Revive { full } => {
            let hp = if *full {
                target.max_hp()
            } else {
                (target.max_hp() / 2).max(1)
            };
            if target.revive(hp) {
                ItemOutcome::Revived { hp: target.hp() }
            } else {
                ItemOutcome::NoEffect
            }
        }
        ItemEffect::StatBoost { stat } => {
            if target.is_fainted() {
                ItemOutcome::NoEffect
            } else if target.stages_mut().modify(*stat, 1) {
                ItemOutcome::Boosted { boost: *stat }
            } else {
                ItemOutcome::BoostMaxed { boost: *stat }
            }
        }
        ItemEffect::Ball { bonus, force_catch } => ItemOutcome::Ball {
            bonus: *bonus,
            force_catch: *force_catch,
        },
    }
}

fn heal(target: &mut Combatant, amount: u16) -> ItemOutcome {
    match target.heal(amount) {
        0 => ItemOutcome::NoEffect,
        amount => ItemOutcome::Healed { amount },
    }
}
