mod accuracy;
mod ailment;
mod boost;
mod move_category;
mod move_data;

pub use accuracy::Accuracy;
pub use ailment::Ailment;
pub use boost::Boost;
pub use move_category::MoveCategory;
pub use move_data::{
    MoveData,
    MoveMeta,
    StatChange,
    StatChangeTarget,
};
