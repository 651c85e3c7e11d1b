use ahash::{
    HashMap,
    HashMapExt,
};
use anyhow::Result;
use monbattle_data::{
    DataStore,
    ItemData,
    MemoryDataStore,
    MoveData,
    SpeciesData,
    TypeChart,
};

const GEN1_DATA: &str = include_str!("../data/gen1.json");

/// Wrapper around a [`MemoryDataStore`] of first generation data for testing.
///
/// Allows fake moves to be inserted exclusively for the test.
pub struct TestDataStore {
    memory: MemoryDataStore,
    fake_moves: HashMap<String, MoveData>,
}

impl TestDataStore {
    pub fn new() -> Result<Self> {
        Ok(Self {
            memory: MemoryDataStore::from_json(GEN1_DATA)?,
            fake_moves: HashMap::new(),
        })
    }

    pub fn add_fake_move(&mut self, move_data: MoveData) {
        self.fake_moves.insert(move_data.id.clone(), move_data);
    }
}

impl DataStore for TestDataStore {
    fn get_type_chart(&self) -> Result<TypeChart> {
        self.memory.get_type_chart()
    }

    fn get_item(&self, id: &str) -> Result<Option<ItemData>> {
        self.memory.get_item(id)
    }

    fn get_move(&self, id: &str) -> Result<Option<MoveData>> {
        match self.fake_moves.get(id) {
            Some(move_data) => Ok(Some(move_data.clone())),
            None => self.memory.get_move(id),
        }
    }

    fn get_species(&self, id: &str) -> Result<Option<SpeciesData>> {
        self.memory.get_species(id)
    }
}
