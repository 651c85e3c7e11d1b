mod battle_error;
mod wrap;

pub use anyhow::{
    Error,
    Result,
};
pub use battle_error::{
    GeneralError,
    InvalidPhaseError,
    NotFoundError,
    general_error,
    invalid_phase_error,
    not_found_error,
};
pub use wrap::{
    WrapError,
    WrapOptionError,
    WrapResultError,
};
