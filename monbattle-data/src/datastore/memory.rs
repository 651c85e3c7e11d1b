use ahash::HashMap;
use anyhow::{
    Context,
    Result,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    DataStore,
    ItemData,
    MoveData,
    SpeciesData,
    TypeChart,
};

/// Serialized form of all static data tables, as produced by an external data loader.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DataTables {
    /// Type chart. The built-in first generation chart is used when absent.
    #[serde(default)]
    pub type_chart: Option<TypeChart>,
    #[serde(default)]
    pub moves: Vec<MoveData>,
    #[serde(default)]
    pub species: Vec<SpeciesData>,
    #[serde(default)]
    pub items: Vec<ItemData>,
}

/// An implementation of [`DataStore`] that holds all data in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryDataStore {
    pub type_chart: TypeChart,
    pub items: HashMap<String, ItemData>,
    pub moves: HashMap<String, MoveData>,
    pub species: HashMap<String, SpeciesData>,
}

impl MemoryDataStore {
    /// Creates an empty data store using the first generation type chart.
    pub fn new() -> Self {
        Self {
            type_chart: TypeChart::gen1(),
            ..Default::default()
        }
    }

    /// Creates a data store from parsed tables.
    pub fn from_tables(tables: DataTables) -> Self {
        let mut store = Self::new();
        if let Some(type_chart) = tables.type_chart {
            store.type_chart = type_chart;
        }
        tables.moves.into_iter().for_each(|data| store.add_move(data));
        tables
            .species
            .into_iter()
            .for_each(|data| store.add_species(data));
        tables.items.into_iter().for_each(|data| store.add_item(data));
        store
    }

    /// Creates a data store from a JSON document of [`DataTables`].
    pub fn from_json(json: &str) -> Result<Self> {
        let tables = serde_json::from_str::<DataTables>(json).context("invalid data tables")?;
        Ok(Self::from_tables(tables))
    }

    pub fn add_move(&mut self, data: MoveData) {
        self.moves.insert(data.id.clone(), data);
    }

    pub fn add_species(&mut self, data: SpeciesData) {
        self.species.insert(data.id.clone(), data);
    }

    pub fn add_item(&mut self, data: ItemData) {
        self.items.insert(data.id.clone(), data);
    }
}

impl DataStore for MemoryDataStore {
    fn get_type_chart(&self) -> Result<TypeChart> {
        Ok(self.type_chart.clone())
    }

    fn get_item(&self, id: &str) -> Result<Option<ItemData>> {
        Ok(self.items.get(id).cloned())
    }

    fn get_move(&self, id: &str) -> Result<Option<MoveData>> {
        Ok(self.moves.get(id).cloned())
    }

    fn get_species(&self, id: &str) -> Result<Option<SpeciesData>> {
        Ok(self.species.get(id).cloned())
    }
}
