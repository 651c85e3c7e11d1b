use monbattle::battle::{
    BattleController,
    BattleOutcome,
    BattlePhase,
    RandomizeBaseDamage,
    Side,
    SpeedTieResolution,
    TurnDecision,
};
use monbattle_test_utils::{
    LogMatch,
    TestBattleBuilder,
    TestDataStore,
    assert_logs_contain,
    create_combatant,
    drain_pp,
    play_until_input,
    setup_test_environment,
    without_critical_hits,
};
use pretty_assertions::assert_eq;

fn move_names(battle: &BattleController) -> Vec<String> {
    battle
        .active(Side::Player)
        .unwrap()
        .moves()
        .iter()
        .map(|slot| slot.name.clone())
        .collect()
}

#[test]
fn level_up_learns_move_into_free_slot() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut mewtwo = create_combatant(&data, "mewtwo", 4).unwrap();
    mewtwo.set_hp(1);
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_speed_tie_resolution(SpeedTieResolution::Keep)
        .add_player_mon("charmander", 8)
        .add_enemy_combatant(mewtwo)
        .build(&data)
        .unwrap();
    play_until_input(&mut battle).unwrap();

    battle
        .start_turn(TurnDecision::Fight { move_slot: 0 })
        .unwrap();
    assert_eq!(
        without_critical_hits(play_until_input(&mut battle).unwrap()),
        vec![
            "CHARMANDER used\nSCRATCH!",
            "Wild MEWTWO\nfainted!",
            "CHARMANDER\ngained 125 EXP. Points!",
            "CHARMANDER\ngrew to Lv.9!",
            "CHARMANDER learned\nEMBER!",
        ]
    );
    assert_eq!(battle.outcome(), Some(BattleOutcome::Won));
    let charmander = battle.active(Side::Player).unwrap();
    assert_eq!(charmander.level(), 9);
    assert_eq!(charmander.experience(), 314 + 125);
    assert_eq!(move_names(&battle), vec!["SCRATCH", "GROWL", "EMBER"]);
    assert_logs_contain(
        &battle,
        &[
            LogMatch::from("exp|mon:CHARMANDER|exp:125"),
            LogMatch::from("level|mon:CHARMANDER|level:9"),
            LogMatch::from("learn|mon:CHARMANDER|move:EMBER"),
        ],
    );
}

fn make_full_moveset_battle(data: &TestDataStore) -> BattleController<'_> {
    let mut mewtwo = create_combatant(data, "mewtwo", 29).unwrap();
    mewtwo.set_hp(1);
    drain_pp(&mut mewtwo, &[]).unwrap();
    TestBattleBuilder::new()
        .with_seed(0)
        .with_base_damage_randomization(RandomizeBaseDamage::Max)
        .add_player_mon("bulbasaur", 19)
        .add_enemy_combatant(mewtwo)
        .build(data)
        .unwrap()
}

fn defeat_mewtwo(battle: &mut BattleController) {
    play_until_input(battle).unwrap();
    battle
        .start_turn(TurnDecision::Fight { move_slot: 3 })
        .unwrap();
    assert_eq!(
        without_critical_hits(play_until_input(battle).unwrap()),
        vec![
            "Enemy has no moves!",
            "BULBASAUR used\nVINE WHIP!",
            "Wild MEWTWO\nfainted!",
            "BULBASAUR\ngained 911 EXP. Points!",
            "BULBASAUR\ngrew to Lv.20!",
            "BULBASAUR is trying to\nlearn POISONPOWDER!",
            "But BULBASAUR can't\nlearn more than four moves!",
            "Delete an older\nmove to make room\nfor POISONPOWDER?",
        ]
    );
    assert_eq!(battle.phase(), BattlePhase::MoveLearnChoice);
}

#[test]
fn full_moveset_replaces_forgotten_move_in_place() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = make_full_moveset_battle(&data);
    defeat_mewtwo(&mut battle);
    assert_eq!(
        move_names(&battle),
        vec!["TACKLE", "GROWL", "LEECH SEED", "VINE WHIP"]
    );

    battle.answer_move_learning(true).unwrap();
    assert_eq!(battle.phase(), BattlePhase::ForgetMove);
    assert_eq!(
        battle.current_message(),
        Some("Which move should\nbe forgotten?")
    );

    battle.forget_move(Some(1)).unwrap();
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec![
            "1, 2 and... Poof!",
            "BULBASAUR forgot\nGROWL!",
            "BULBASAUR learned\nPOISONPOWDER!",
        ]
    );
    assert_eq!(battle.outcome(), Some(BattleOutcome::Won));
    assert_eq!(
        move_names(&battle),
        vec!["TACKLE", "POISONPOWDER", "LEECH SEED", "VINE WHIP"]
    );
    assert_logs_contain(
        &battle,
        &[LogMatch::from(
            "learn|mon:BULBASAUR|move:POISONPOWDER|forgot:GROWL",
        )],
    );
}

#[test]
fn declining_keeps_old_moves() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = make_full_moveset_battle(&data);
    defeat_mewtwo(&mut battle);

    battle.answer_move_learning(false).unwrap();
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec!["BULBASAUR did not\nlearn POISONPOWDER!"]
    );
    assert_eq!(battle.outcome(), Some(BattleOutcome::Won));
    assert_eq!(
        move_names(&battle),
        vec!["TACKLE", "GROWL", "LEECH SEED", "VINE WHIP"]
    );
}

#[test]
fn backing_out_of_forget_prompt_asks_again() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = make_full_moveset_battle(&data);
    defeat_mewtwo(&mut battle);

    battle.answer_move_learning(true).unwrap();
    battle.forget_move(None).unwrap();
    assert_eq!(battle.phase(), BattlePhase::MoveLearnChoice);
    assert_eq!(
        battle.current_message(),
        Some("Delete an older\nmove to make room\nfor POISONPOWDER?")
    );
    assert!(battle.forget_move(Some(0)).is_err());
}
