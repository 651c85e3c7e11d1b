use monbattle::battle::{
    BattleController,
    BattlePhase,
    Side,
    TurnDecision,
};
use monbattle_data::Boost;
use monbattle_test_utils::{
    LogMatch,
    TestBattleBuilder,
    TestDataStore,
    assert_new_logs_eq,
    create_combatant,
    drain_pp,
    play_until_input,
    setup_test_environment,
};
use pretty_assertions::assert_eq;

fn use_item(item: &str, target: usize) -> TurnDecision {
    TurnDecision::UseItem {
        item: item.to_owned(),
        target,
    }
}

fn make_battle(data: &TestDataStore, charmander_hp: u16) -> BattleController<'_> {
    let mut charmander = create_combatant(data, "charmander", 30).unwrap();
    charmander.set_hp(charmander_hp);
    let mut squirtle = create_combatant(data, "squirtle", 10).unwrap();
    squirtle.set_hp(0);
    let mut rattata = create_combatant(data, "rattata", 3).unwrap();
    drain_pp(&mut rattata, &[]).unwrap();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .add_player_combatant(charmander)
        .add_player_combatant(squirtle)
        .add_enemy_combatant(rattata)
        .build(data)
        .unwrap();
    play_until_input(&mut battle).unwrap();
    battle.new_log_entries().count();
    battle
}

#[test]
fn potion_heals_and_takes_turn() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = make_battle(&data, 30);

    let handle = battle.start_turn(use_item("potion", 0)).unwrap();
    assert!(handle.consumed_turn);
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec![
            "Used POTION!",
            "CHARMANDER\nrecovered by 20!",
            "Enemy has no moves!",
        ]
    );
    assert_eq!(battle.active(Side::Player).unwrap().hp(), 50);
    assert_eq!(battle.phase(), BattlePhase::BattleMenu);
    assert_new_logs_eq(
        &mut battle,
        &[LogMatch::from("item|name:POTION|mon:CHARMANDER|consumed")],
    );
}

#[test]
fn potion_at_full_hp_has_no_effect() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = make_battle(&data, 63);
    assert_eq!(battle.active(Side::Player).unwrap().max_hp(), 63);

    let handle = battle.start_turn(use_item("potion", 0)).unwrap();
    assert!(!handle.consumed_turn);
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec!["It won't have any effect."]
    );
    assert_eq!(battle.phase(), BattlePhase::BattleMenu);
    assert_new_logs_eq(&mut battle, &[]);
}

#[test]
fn revive_restores_fainted_party_member() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = make_battle(&data, 63);

    let handle = battle.start_turn(use_item("revive", 1)).unwrap();
    assert!(handle.consumed_turn);
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec![
            "Used REVIVE!",
            "SQUIRTLE is\nrevitalized!",
            "Enemy has no moves!",
        ]
    );
    let squirtle = battle.player().get(1).unwrap();
    assert!(!squirtle.is_fainted());
    assert_eq!(squirtle.hp(), squirtle.max_hp() / 2);
}

#[test]
fn x_attack_raises_active_stage() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = make_battle(&data, 63);

    battle.start_turn(use_item("xattack", 1)).unwrap();
    assert_eq!(
        play_until_input(&mut battle).unwrap(),
        vec![
            "Used X ATTACK!",
            "CHARMANDER's\nATTACK rose!",
            "Enemy has no moves!",
        ]
    );
    assert_eq!(
        battle.active(Side::Player).unwrap().stages().get(Boost::Atk),
        1
    );
}

#[test]
fn unknown_item_is_an_error() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = make_battle(&data, 63);
    assert!(battle.start_turn(use_item("rarecandy", 0)).is_err());
    assert_eq!(battle.phase(), BattlePhase::BattleMenu);
}
