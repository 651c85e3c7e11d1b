mod growth_rate;
mod species_data;
mod stat;
mod r#type;

pub use growth_rate::{
    GrowthRate,
    MAX_LEVEL,
};
pub use species_data::{
    LevelUpMove,
    SpeciesData,
};
pub use stat::{
    Stat,
    StatTable,
};
pub use r#type::{
    Type,
    TypeChart,
    TypeEffectiveness,
    TypeTable,
};
