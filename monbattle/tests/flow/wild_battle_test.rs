use monbattle::battle::{
    BattleOutcome,
    BattlePhase,
    RandomizeBaseDamage,
    Side,
    TurnDecision,
};
use monbattle_test_utils::{
    LogMatch,
    TestBattleBuilder,
    TestDataStore,
    assert_logs_contain,
    play_until_input,
    setup_test_environment,
    without_critical_hits,
};
use pretty_assertions::assert_eq;

#[test]
fn intro_announces_both_combatants() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_player_mon("charmander", 30)
        .add_enemy_mon("rattata", 3)
        .build(&data)
        .unwrap();
    assert_eq!(battle.phase(), BattlePhase::Intro);
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec!["Wild RATTATA\nappeared!", "Go! CHARMANDER!"]
    );
    assert_eq!(battle.phase(), BattlePhase::BattleMenu);
    assert_logs_contain(&battle, &[LogMatch::from("start|kind:wild")]);
}

#[test]
fn intro_waits_for_intro_animation() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_intro_duration(1.0)
        .add_player_mon("charmander", 30)
        .add_enemy_mon("rattata", 3)
        .build(&data)
        .unwrap();
    battle.update(0.5).unwrap();
    assert_eq!(battle.phase(), BattlePhase::Intro);
    assert_eq!(battle.current_message(), None);
    battle.update(0.6).unwrap();
    assert_eq!(battle.current_message(), Some("Wild RATTATA\nappeared!"));
}

#[test]
fn knocking_out_wild_enemy_wins_and_awards_experience() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_base_damage_randomization(RandomizeBaseDamage::Max)
        .add_player_mon("charmander", 30)
        .add_enemy_mon("rattata", 3)
        .build(&data)
        .unwrap();
    play_until_input(&mut battle).unwrap();
    let experience = battle.active(Side::Player).unwrap().experience();

    let handle = battle
        .start_turn(TurnDecision::Fight { move_slot: 0 })
        .unwrap();
    assert!(handle.consumed_turn);
    assert_eq!(
        without_critical_hits(play_until_input(&mut battle).unwrap()),
        vec![
            "CHARMANDER used\nSCRATCH!",
            "Wild RATTATA\nfainted!",
            "CHARMANDER\ngained 24 EXP. Points!",
        ]
    );
    assert!(battle.is_complete());
    assert_eq!(battle.outcome(), Some(BattleOutcome::Won));
    assert_eq!(
        battle.active(Side::Player).unwrap().experience(),
        experience + 24
    );
    assert_eq!(battle.active(Side::Player).unwrap().moves()[0].pp, 34);
    assert_logs_contain(
        &battle,
        &[
            LogMatch::Substrings(vec!["move".to_owned(), "name:SCRATCH".to_owned()]),
            LogMatch::Substrings(vec!["faint".to_owned(), "mon:RATTATA".to_owned()]),
            LogMatch::from("exp|mon:CHARMANDER|exp:24"),
            LogMatch::from("end|outcome:won"),
        ],
    );

    let result = battle.into_result().unwrap();
    assert_eq!(result.outcome, BattleOutcome::Won);
    assert_eq!(result.player.len(), 1);
    assert!(result.caught.is_none());
}

#[test]
fn move_selection_can_be_cancelled() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_player_mon("charmander", 30)
        .add_enemy_mon("rattata", 3)
        .build(&data)
        .unwrap();
    play_until_input(&mut battle).unwrap();
    battle.open_move_selection().unwrap();
    assert_eq!(battle.phase(), BattlePhase::MoveSelection);
    assert!(battle.open_move_selection().is_err());
    battle.cancel_move_selection().unwrap();
    assert_eq!(battle.phase(), BattlePhase::BattleMenu);
}

#[test]
fn decisions_are_rejected_outside_of_menu() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_player_mon("charmander", 30)
        .add_enemy_mon("rattata", 3)
        .build(&data)
        .unwrap();
    assert!(
        battle
            .start_turn(TurnDecision::Fight { move_slot: 0 })
            .is_err()
    );
    assert!(battle.into_result().is_err());
}

#[test]
fn move_without_pp_does_not_consume_turn() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut charmander = monbattle_test_utils::create_combatant(&data, "charmander", 30).unwrap();
    monbattle_test_utils::drain_pp(&mut charmander, &[1]).unwrap();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_player_combatant(charmander)
        .add_enemy_mon("rattata", 3)
        .build(&data)
        .unwrap();
    play_until_input(&mut battle).unwrap();

    let handle = battle
        .start_turn(TurnDecision::Fight { move_slot: 0 })
        .unwrap();
    assert!(!handle.consumed_turn);
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec!["No PP left!"]
    );
    assert_eq!(battle.phase(), BattlePhase::BattleMenu);
}
