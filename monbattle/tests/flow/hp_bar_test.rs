use monbattle::battle::{
    AnimationCue,
    RandomizeBaseDamage,
    Side,
    TurnDecision,
};
use monbattle_test_utils::{
    TestBattleBuilder,
    TestDataStore,
    play_until_input_with_dt,
    setup_test_environment,
};

#[test]
fn damage_waits_for_hp_bar_animation() {
    setup_test_environment();
    let data = TestDataStore::new().unwrap();
    let mut battle = TestBattleBuilder::new()
        .with_seed(0)
        .with_base_damage_randomization(RandomizeBaseDamage::Max)
        .with_hp_bar_display(true)
        .add_player_mon("charmander", 30)
        .add_enemy_mon("rattata", 3)
        .build(&data)
        .unwrap();
    play_until_input_with_dt(&mut battle, 0.25).unwrap();
    assert!(!battle.hp_bar().is_animating(Side::Enemy));

    battle
        .start_turn(TurnDecision::Fight { move_slot: 0 })
        .unwrap();
    let mut cues = Vec::new();
    for _ in 0..10_000 {
        if battle.is_complete() {
            break;
        }
        if battle.current_message().is_some() {
            battle.acknowledge().unwrap();
            continue;
        }
        battle.update(0.01).unwrap();
        if let Some(cue) = battle.current_animation_target() {
            cues.push(cue);
        }
    }
    assert!(battle.is_complete());
    assert!(cues.contains(&AnimationCue::Attack { side: Side::Player }));
    let hp_bar_frames = cues
        .iter()
        .filter(|cue| **cue == AnimationCue::HpBar { side: Side::Enemy })
        .count();
    // The whole bar drains at 0.02 seconds per unit.
    assert!(hp_bar_frames > 10, "{hp_bar_frames}");
    assert!(!battle.hp_bar().is_animating(Side::Enemy));
}
