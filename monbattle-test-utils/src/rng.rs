use std::{
    any::Any,
    collections::hash_map::Entry,
};

use ahash::{
    HashMap,
    HashMapExt,
};
use monbattle::battle::BattleController;
use monbattle_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

/// A generator for tests that need a specific escape, catch, or damage roll.
///
/// The wrapped generator still advances on a faked roll, so the rolls after it are unchanged.
pub struct ControlledRandomNumberGenerator {
    count: usize,
    fake_values: HashMap<usize, u64>,
    real: RealPseudoRandomNumberGenerator,
}

impl ControlledRandomNumberGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            count: 0,
            fake_values: HashMap::new(),
            real: RealPseudoRandomNumberGenerator::new(seed),
        }
    }

    /// Rolls made so far.
    pub fn rolls(&self) -> usize {
        self.count
    }

    /// Overrides the roll at the given position, where position 1 is the first roll ever made.
    pub fn fake_roll_at(&mut self, position: usize, value: u64) {
        self.fake_values.insert(position, value);
    }

    /// Overrides upcoming rolls. Offset 1 is the next roll.
    pub fn fake_upcoming_rolls<I>(&mut self, rolls: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        let count = self.count;
        self.fake_values
            .extend(rolls.into_iter().map(|(offset, value)| (offset + count, value)));
    }
}

impl PseudoRandomNumberGenerator for ControlledRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.real.initial_seed()
    }

    fn next(&mut self) -> u64 {
        let next = self.real.next();
        self.count += 1;
        match self.fake_values.entry(self.count) {
            Entry::Occupied(entry) => entry.remove(),
            Entry::Vacant(_) => next,
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The controlled generator of a battle, if it was built with one.
pub fn get_controlled_rng<'b>(
    battle: &'b mut BattleController,
) -> Option<&'b mut ControlledRandomNumberGenerator> {
    battle
        .prng()
        .as_any_mut()
        .downcast_mut::<ControlledRandomNumberGenerator>()
}
