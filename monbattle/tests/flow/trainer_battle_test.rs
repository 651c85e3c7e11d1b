use monbattle::battle::{
    BattleController,
    BattleOutcome,
    BattlePhase,
    RandomizeBaseDamage,
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

fn make_battle(data: &TestDataStore) -> BattleController<'_> {
    TestBattleBuilder::new()
        .with_seed(0)
        .with_base_damage_randomization(RandomizeBaseDamage::Max)
        .with_trainer("YOUNGSTER", "JOEY", 120)
        .add_player_mon("charmander", 30)
        .add_enemy_mon("rattata", 3)
        .add_enemy_mon("pidgey", 3)
        .build(data)
        .unwrap()
}

#[test]
fn trainer_introduces_itself_and_sends_out_first_mon() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = make_battle(&data);
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec![
            "YOUNGSTER JOEY\nwants to fight!",
            "JOEY sent out\nRATTATA!",
            "Go! CHARMANDER!",
        ]
    );
    assert_logs_contain(
        &battle,
        &[LogMatch::from(
            "start|kind:trainer|trainer:YOUNGSTER JOEY",
        )],
    );
}

#[test]
fn defeating_every_enemy_wins_prize_money() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = make_battle(&data);
    play_until_input(&mut battle).unwrap();

    battle
        .start_turn(TurnDecision::Fight { move_slot: 0 })
        .unwrap();
    assert_eq!(
        without_critical_hits(play_until_input(&mut battle).unwrap()),
        vec![
            "CHARMANDER used\nSCRATCH!",
            "Enemy RATTATA\nfainted!",
            "CHARMANDER\ngained 36 EXP. Points!",
            "JOEY sent out\nPIDGEY!",
        ]
    );
    assert_eq!(battle.phase(), BattlePhase::BattleMenu);
    assert_eq!(battle.outcome(), None);

    battle
        .start_turn(TurnDecision::Fight { move_slot: 0 })
        .unwrap();
    assert_eq!(
        without_critical_hits(play_until_input(&mut battle).unwrap()),
        vec![
            "CHARMANDER used\nSCRATCH!",
            "Enemy PIDGEY\nfainted!",
            "CHARMANDER\ngained 35 EXP. Points!",
            "Got ¥120 for\nwinning!",
        ]
    );
    assert_eq!(battle.outcome(), Some(BattleOutcome::Won));
    assert_logs_contain(
        &battle,
        &[
            LogMatch::from("prize|money:120"),
            LogMatch::from("end|outcome:won"),
        ],
    );
}

#[test]
fn cannot_run_or_catch_in_trainer_battle() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = make_battle(&data);
    play_until_input(&mut battle).unwrap();

    let handle = battle.start_turn(TurnDecision::Run).unwrap();
    assert!(!handle.consumed_turn);
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec!["Can't run from a\ntrainer battle!"]
    );
    assert_eq!(battle.escape_attempts(), 0);

    let handle = battle
        .start_turn(TurnDecision::UseItem {
            item: "pokeball".to_owned(),
            target: 0,
        })
        .unwrap();
    assert!(!handle.consumed_turn);
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec!["The trainer blocked the BALL!"]
    );
    assert_eq!(battle.phase(), BattlePhase::BattleMenu);
    assert_eq!(battle.enemy().len(), 2);
}
