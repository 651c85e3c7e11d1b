use monbattle::battle::{
    BattleController,
    BattleOutcome,
    BattlePhase,
    TurnDecision,
};
use monbattle_test_utils::{
    LogMatch,
    TestBattleBuilder,
    TestDataStore,
    assert_logs_contain,
    create_combatant,
    drain_pp,
    get_controlled_rng,
    play_until_input,
    setup_test_environment,
};
use pretty_assertions::assert_eq;

// Speed 9 against 95 gives escape odds of 42 out of 255 on the first attempt.
fn make_slow_battle(data: &TestDataStore) -> BattleController<'_> {
    let mut pikachu = create_combatant(data, "pikachu", 50).unwrap();
    drain_pp(&mut pikachu, &[]).unwrap();
    TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .add_player_mon("rattata", 3)
        .add_enemy_combatant(pikachu)
        .build(data)
        .unwrap()
}

#[test]
fn failed_escape_gives_enemy_a_free_attack() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = make_slow_battle(&data);
    play_until_input(&mut battle).unwrap();

    get_controlled_rng(&mut battle)
        .unwrap()
        .fake_upcoming_rolls([(1, 254)]);
    let handle = battle.start_turn(TurnDecision::Run).unwrap();
    assert!(handle.consumed_turn);
    assert_eq!(battle.escape_attempts(), 1);
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec!["Can't escape!", "Enemy has no moves!"]
    );
    assert_eq!(battle.phase(), BattlePhase::BattleMenu);
    assert_logs_contain(&battle, &[LogMatch::from("escape|attempt:1|fail")]);
}

#[test]
fn attempts_accumulate_until_escape() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = make_slow_battle(&data);
    play_until_input(&mut battle).unwrap();

    get_controlled_rng(&mut battle)
        .unwrap()
        .fake_upcoming_rolls([(1, 254)]);
    battle.start_turn(TurnDecision::Run).unwrap();
    play_until_input(&mut battle).unwrap();

    // 42 + 30 odds on the second attempt.
    get_controlled_rng(&mut battle)
        .unwrap()
        .fake_upcoming_rolls([(1, 71)]);
    battle.start_turn(TurnDecision::Run).unwrap();
    assert_eq!(battle.escape_attempts(), 2);
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec!["Got away safely!"]
    );
    assert_eq!(battle.outcome(), Some(BattleOutcome::Escaped));
    assert_logs_contain(
        &battle,
        &[
            LogMatch::from("escape|attempt:1|fail"),
            LogMatch::from("escape|attempt:2|success"),
            LogMatch::from("end|outcome:escaped"),
        ],
    );
}

#[test]
fn lucky_roll_escapes_on_first_attempt() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = make_slow_battle(&data);
    play_until_input(&mut battle).unwrap();

    get_controlled_rng(&mut battle)
        .unwrap()
        .fake_upcoming_rolls([(1, 0)]);
    battle.start_turn(TurnDecision::Run).unwrap();
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec!["Got away safely!"]
    );
    assert_eq!(battle.outcome(), Some(BattleOutcome::Escaped));

    let result = battle.into_result().unwrap();
    assert_eq!(result.outcome, BattleOutcome::Escaped);
    assert_eq!(result.enemy.len(), 1);
}

#[test]
fn faster_player_always_escapes() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_player_mon("pikachu", 50)
        .add_enemy_mon("rattata", 3)
        .build(&data)
        .unwrap();
    play_until_input(&mut battle).unwrap();
    battle.start_turn(TurnDecision::Run).unwrap();
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec!["Got away safely!"]
    );
    assert_eq!(battle.outcome(), Some(BattleOutcome::Escaped));
}
