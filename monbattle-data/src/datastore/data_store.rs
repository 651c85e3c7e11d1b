use anyhow::Result;

use crate::{
    ItemData,
    MoveData,
    SpeciesData,
    TypeChart,
};

/// Collection of tables for all static battle data.
///
/// This trait can be implemented for different data sources. The battle engine borrows a data
/// store for its whole lifetime and never caches lookups globally.
pub trait DataStore {
    /// Gets the type chart.
    fn get_type_chart(&self) -> Result<TypeChart>;
    /// Gets an item by ID.
    fn get_item(&self, id: &str) -> Result<Option<ItemData>>;
    /// Gets a move by ID.
    fn get_move(&self, id: &str) -> Result<Option<MoveData>>;
    /// Gets a species by ID.
    fn get_species(&self, id: &str) -> Result<Option<SpeciesData>>;
}
