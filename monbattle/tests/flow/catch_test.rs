use monbattle::battle::{
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

fn throw(item: &str) -> TurnDecision {
    TurnDecision::UseItem {
        item: item.to_owned(),
        target: 0,
    }
}

#[test]
fn master_ball_always_catches() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_player_mon("charmander", 5)
        .add_enemy_mon("mewtwo", 70)
        .build(&data)
        .unwrap();
    play_until_input(&mut battle).unwrap();

    battle.start_turn(throw("masterball")).unwrap();
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec![
            "Used MASTER BALL!",
            "Gotcha!\nMEWTWO was caught!",
            "MEWTWO was\nadded to party!",
        ]
    );
    assert_eq!(battle.outcome(), Some(BattleOutcome::Caught));
    assert_logs_contain(&battle, &[LogMatch::from("end|outcome:caught")]);

    let result = battle.into_result().unwrap();
    assert_eq!(result.outcome, BattleOutcome::Caught);
    assert_eq!(result.player.len(), 2);
    assert_eq!(result.player.members()[1].name, "MEWTWO");
    assert!(result.enemy.is_empty());
    assert!(result.caught.is_none());
}

#[test]
fn caught_mon_is_returned_separately_when_party_is_full() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut builder = TestBattleBuilder::new().with_seed(0);
    for _ in 0..6 {
        builder = builder.add_player_mon("charmander", 5);
    }
    let mut battle = builder.add_enemy_mon("pidgey", 3).build(&data).unwrap();
    play_until_input(&mut battle).unwrap();

    battle.start_turn(throw("masterball")).unwrap();
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec![
            "Used MASTER BALL!",
            "Gotcha!\nPIDGEY was caught!",
            "Party is full!",
        ]
    );
    let result = battle.into_result().unwrap();
    assert_eq!(result.player.len(), 6);
    assert!(result.enemy.is_empty());
    assert_eq!(
        result.caught.map(|combatant| combatant.name),
        Some("PIDGEY".to_owned())
    );
}

#[test]
fn broken_ball_lets_enemy_attack() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut rattata = create_combatant(&data, "rattata", 3).unwrap();
    drain_pp(&mut rattata, &[]).unwrap();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_controlled_rng(true)
        .add_player_mon("charmander", 5)
        .add_enemy_combatant(rattata)
        .build(&data)
        .unwrap();
    play_until_input(&mut battle).unwrap();

    get_controlled_rng(&mut battle)
        .unwrap()
        .fake_upcoming_rolls([(1, 255)]);
    let handle = battle.start_turn(throw("pokeball")).unwrap();
    assert!(handle.consumed_turn);
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec![
            "Used POKé BALL!",
            "RATTATA\nbroke free!",
            "Enemy has no moves!",
        ]
    );
    assert_eq!(battle.phase(), BattlePhase::BattleMenu);
    assert_eq!(battle.outcome(), None);
}
