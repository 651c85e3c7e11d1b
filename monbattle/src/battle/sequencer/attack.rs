use monbattle_data::{
    Fraction,
    MoveCategory,
    MoveData,
    StatChangeTarget,
};
use monbattle_prng::rand_util;

use crate::{
    battle::{
        BattleField,
        Side,
        damage,
        sequencer::{
            AfterTick,
            AttackContext,
            AttackContextId,
            EffectStep,
        },
        status_engine,
    },
    battle_event,
    error::Result,
};

/// Expands an attack into the steps that play it out.
///
/// Rolls that decide what happens (status gate, accuracy, critical hit, hit count, damage and
/// secondary ailments) are made here. Their effects are applied as the steps execute.
pub(crate) fn expand_attack(
    field: &mut BattleField,
    contexts: &mut Vec<AttackContext>,
    side: Side,
    move_data: MoveData,
    can_flinch: bool,
) -> Result<Vec<EffectStep>> {
    let attacker = field.active_handle(side);
    let defender = field.active_handle(side.opponent());
    if field.combatant(attacker)?.is_fainted() || field.combatant(defender)?.is_fainted() {
        log::debug!("{attacker} cannot attack {defender}, one of them has fainted");
        return Ok(Vec::new());
    }
    let attacker_name = field.combatant(attacker)?.name.clone();
    let defender_name = field.combatant(defender)?.name.clone();

    if field.flinch_target == Some(attacker) {
        field.flinch_target = None;
        field.log.push(battle_event!(
            "flinch",
            format!("mon:{attacker_name}"),
            format!("side:{side}"),
        ));
        return Ok(Vec::from([EffectStep::Message(format!(
            "{attacker_name}\nflinched!"
        ))]));
    }

    let mut steps = Vec::new();
    let (combatant, prng) = field.combatant_and_prng(attacker)?;
    let gate = status_engine::check_before_move(prng, combatant);
    steps.extend(gate.messages.into_iter().map(EffectStep::Message));
    if !gate.can_move {
        field.log.push(battle_event!(
            "cant",
            format!("mon:{attacker_name}"),
            format!("side:{side}"),
        ));
        return Ok(steps);
    }

    steps.push(EffectStep::Message(format!(
        "{}{attacker_name} used\n{}!",
        field.attacker_prefix(side),
        move_data.name
    )));
    steps.push(EffectStep::AttackAnimation { side });
    field.log.push(battle_event!(
        "move",
        format!("mon:{attacker_name}"),
        format!("side:{side}"),
        format!("name:{}", move_data.name),
    ));

    let duel = field.duel(side)?;
    if !damage::check_accuracy(duel.prng, duel.attacker, duel.defender, &move_data) {
        steps.push(EffectStep::Message(format!(
            "{attacker_name}'s\nattack missed!"
        )));
        field.log.push(battle_event!(
            "miss",
            format!("mon:{attacker_name}"),
            format!("side:{side}"),
        ));
        return Ok(steps);
    }

    let context = AttackContextId(contexts.len());
    let meta = move_data.meta.clone().unwrap_or_default();
    let deals_damage = move_data.category() != MoveCategory::Status;
    let mut planned_damage = 0u32;
    let mut critical = false;
    let mut planned_hits = 0;
    if deals_damage {
        let multiplier = duel
            .type_chart
            .multiplier(move_data.primary_type, &duel.defender.types);
        if multiplier.numerator() == 0 {
            steps.push(EffectStep::Message(format!(
                "It doesn't affect\n{defender_name}..."
            )));
            return Ok(steps);
        }

        critical = damage::check_critical_hit(duel.prng, duel.attacker, &move_data);
        planned_hits = damage::get_hit_count(duel.prng, &move_data);
        for _ in 0..planned_hits {
            let amount = damage::calculate_damage(
                duel.prng,
                duel.engine_options.randomize_base_damage,
                duel.type_chart,
                duel.attacker,
                duel.defender,
                &move_data,
                critical,
            );
            planned_damage += amount as u32;
            steps.push(EffectStep::Damage {
                target: defender,
                amount,
                context: Some(context),
                after_tick: AfterTick::CancelHitsOnFaint(context),
            });
        }

        if multiplier > Fraction::new(1, 1) {
            steps.push(EffectStep::Message("It's super\neffective!".to_owned()));
        } else if multiplier < Fraction::new(1, 1) {
            steps.push(EffectStep::Message(
                "It's not very\neffective...".to_owned(),
            ));
        }
    }

    // The ailment is rolled now, but never lands on a target the planned hits will faint.
    let inflicted = match meta.ailment {
        Some(ailment)
            if duel.defender.status().is_none()
                && planned_damage < duel.defender.hp() as u32
                && (meta.ailment_chance == 0
                    || rand_util::percent(duel.prng, meta.ailment_chance as u64)) =>
        {
            Some(ailment)
        }
        _ => None,
    };

    contexts.push(AttackContext {
        attacker,
        defender,
        move_data: move_data.clone(),
        planned_hits,
        hits_landed: 0,
        total_damage: 0,
        critical,
    });

    if deals_damage && meta.drain > 0 {
        steps.push(EffectStep::DrainHeal {
            context,
            percent: meta.drain,
        });
        steps.push(EffectStep::Message(format!(
            "{attacker_name}\ndrained HP!"
        )));
    }
    if meta.healing > 0 {
        steps.push(EffectStep::PercentHeal {
            target: attacker,
            percent: meta.healing,
        });
        steps.push(EffectStep::Message(format!(
            "{attacker_name}\nregained health!"
        )));
    }

    steps.push(EffectStep::CriticalMessage { context });
    steps.push(EffectStep::HitCountMessage { context });
    steps.push(EffectStep::FaintCheck { defender });

    if let Some(ailment) = inflicted {
        steps.push(EffectStep::InflictStatus {
            target: defender,
            ailment,
        });
    }

    for change in move_data.stat_changes() {
        let target = match change.target {
            StatChangeTarget::User => attacker,
            StatChangeTarget::Target => defender,
        };
        steps.push(EffectStep::StatStageChange {
            target,
            boost: change.stat,
            delta: change.change,
        });
    }

    if can_flinch && deals_damage && meta.flinch_chance > 0 {
        steps.push(EffectStep::ResolveFlinch { context });
    }

    Ok(steps)
}

/// Expands end-of-turn burn and poison damage for both active combatants, player first.
pub(crate) fn expand_end_of_turn(field: &mut BattleField) -> Result<Vec<EffectStep>> {
    field.flinch_target = None;
    let mut steps = Vec::new();
    for side in [Side::Player, Side::Enemy] {
        let handle = field.active_handle(side);
        if let Some(damage) = status_engine::end_of_turn_damage(field.combatant_mut(handle)?) {
            steps.push(EffectStep::Message(damage.message));
            steps.push(EffectStep::Damage {
                target: handle,
                amount: damage.amount,
                context: None,
                after_tick: AfterTick::FaintCheck,
            });
        }
    }
    Ok(steps)
}
