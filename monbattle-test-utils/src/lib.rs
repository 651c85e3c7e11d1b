mod battle_driver;
mod data_store;
mod log_util;
mod rng;
mod setup;
mod test_battle_builder;

pub use battle_driver::{
    play_until_input,
    play_until_input_with_dt,
    without_critical_hits,
};
pub use data_store::TestDataStore;
pub use log_util::{
    LogMatch,
    assert_logs_contain,
    assert_new_logs_eq,
};
pub use rng::{
    ControlledRandomNumberGenerator,
    get_controlled_rng,
};
pub use setup::setup_test_environment;
pub use test_battle_builder::{
    TestBattleBuilder,
    create_combatant,
    drain_pp,
};
