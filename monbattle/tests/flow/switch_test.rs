use monbattle::battle::{
    BattleController,
    BattleOutcome,
    BattlePhase,
    Side,
    TurnDecision,
};
use monbattle_test_utils::{
    TestBattleBuilder,
    TestDataStore,
    create_combatant,
    drain_pp,
    play_until_input,
    setup_test_environment,
    without_critical_hits,
};
use pretty_assertions::assert_eq;

fn make_battle(data: &TestDataStore) -> BattleController<'_> {
    let mut rattata = create_combatant(data, "rattata", 3).unwrap();
    drain_pp(&mut rattata, &[]).unwrap();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_player_mon("charmander", 10)
        .add_player_mon("squirtle", 10)
        .add_enemy_combatant(rattata)
        .build(data)
        .unwrap();
    play_until_input(&mut battle).unwrap();
    battle
}

// Only QUICK ATTACK is left, so the enemy always moves first.
fn make_losing_battle(data: &TestDataStore, with_bench: bool) -> BattleController<'_> {
    let mut charmander = create_combatant(data, "charmander", 3).unwrap();
    charmander.set_hp(1);
    let mut rattata = create_combatant(data, "rattata", 30).unwrap();
    drain_pp(&mut rattata, &[2]).unwrap();
    let mut builder = TestBattleBuilder::new()
        .with_seed(0)
        .add_player_combatant(charmander);
    if with_bench {
        builder = builder.add_player_mon("squirtle", 3);
    }
    let mut battle = builder.add_enemy_combatant(rattata).build(data).unwrap();
    play_until_input(&mut battle).unwrap();
    battle
}

#[test]
fn voluntary_switch_gives_enemy_a_turn() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = make_battle(&data);

    let handle = battle
        .start_turn(TurnDecision::Switch { party_index: 1 })
        .unwrap();
    assert!(handle.consumed_turn);
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec![
            "CHARMANDER,\ncome back!",
            "Go! SQUIRTLE!",
            "Enemy has no moves!",
        ]
    );
    assert_eq!(battle.active_index(Side::Player), 1);
    assert_eq!(battle.active(Side::Player).unwrap().name, "SQUIRTLE");
}

#[test]
fn cannot_switch_to_active_or_fainted_member() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut squirtle = create_combatant(&data, "squirtle", 10).unwrap();
    squirtle.set_hp(0);
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_player_mon("charmander", 10)
        .add_player_combatant(squirtle)
        .add_enemy_mon("rattata", 3)
        .build(&data)
        .unwrap();
    play_until_input(&mut battle).unwrap();

    let handle = battle
        .start_turn(TurnDecision::Switch { party_index: 0 })
        .unwrap();
    assert!(!handle.consumed_turn);
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec!["CHARMANDER is\nalready out!"]
    );

    let handle = battle
        .start_turn(TurnDecision::Switch { party_index: 1 })
        .unwrap();
    assert!(!handle.consumed_turn);
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec!["There's no will\nto fight!"]
    );
    assert_eq!(battle.active_index(Side::Player), 0);
    assert!(
        battle
            .start_turn(TurnDecision::Switch { party_index: 5 })
            .is_err()
    );
}

#[test]
fn fainted_active_must_be_replaced() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = make_losing_battle(&data, true);

    battle
        .start_turn(TurnDecision::Fight { move_slot: 0 })
        .unwrap();
    assert_eq!(
        without_critical_hits(play_until_input(&mut battle).unwrap()),
        vec![
            "Wild RATTATA used\nQUICK ATTACK!",
            "CHARMANDER\nfainted!",
            "Choose next POKéMON!",
        ]
    );
    assert_eq!(battle.phase(), BattlePhase::ForcedSwitch);
    assert!(battle.start_turn(TurnDecision::Run).is_err());

    assert_eq!(battle.choose_forced_switch(0).unwrap(), false);
    assert_eq!(battle.phase(), BattlePhase::ForcedSwitch);

    assert_eq!(battle.choose_forced_switch(1).unwrap(), true);
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec!["Go! SQUIRTLE!"]
    );
    assert_eq!(battle.phase(), BattlePhase::BattleMenu);
    assert_eq!(battle.active_index(Side::Player), 1);
}

#[test]
fn losing_last_member_blacks_out() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = make_losing_battle(&data, false);

    battle
        .start_turn(TurnDecision::Fight { move_slot: 0 })
        .unwrap();
    assert_eq!(
        without_critical_hits(play_until_input(&mut battle).unwrap()),
        vec![
            "Wild RATTATA used\nQUICK ATTACK!",
            "CHARMANDER\nfainted!",
            "You have no more\nPOKéMON!",
            "You blacked out!",
        ]
    );
    assert_eq!(battle.outcome(), Some(BattleOutcome::Lost));
    let result = battle.into_result().unwrap();
    assert_eq!(result.outcome, BattleOutcome::Lost);
    assert!(result.player.members()[0].is_fainted());
}
