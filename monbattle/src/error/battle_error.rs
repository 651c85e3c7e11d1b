use std::fmt::Display;

use anyhow::Error;
use thiserror::Error;

use crate::error::WrapError;

/// A general error, consisting of only a message.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct GeneralError {
    message: String,
}

impl GeneralError {
    /// Constructs a new general error.
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
        }
    }
}

/// A not found error, for IDs missing from the data store or handles pointing nowhere.
#[derive(Error, Debug)]
#[error("{target} not found")]
pub struct NotFoundError {
    target: String,
}

impl NotFoundError {
    /// Constructs a new not found error.
    pub fn new<M>(target: M) -> Self
    where
        M: Display,
    {
        Self {
            target: target.to_string(),
        }
    }
}

/// An operation was invoked while the battle was in a phase that does not accept it.
#[derive(Error, Debug)]
#[error("cannot {operation} during {phase}")]
pub struct InvalidPhaseError {
    operation: String,
    phase: String,
}

impl InvalidPhaseError {
    /// Constructs a new invalid phase error.
    pub fn new<O, P>(operation: O, phase: P) -> Self
    where
        O: Display,
        P: Display,
    {
        Self {
            operation: operation.to_string(),
            phase: phase.to_string(),
        }
    }
}

/// Helper for an [`struct@Error`] wrapping a [`GeneralError`].
#[track_caller]
pub fn general_error<M>(message: M) -> Error
where
    M: Display,
{
    GeneralError::new(message).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping a [`NotFoundError`].
#[track_caller]
pub fn not_found_error<M>(target: M) -> Error
where
    M: Display,
{
    NotFoundError::new(target).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping an [`InvalidPhaseError`].
#[track_caller]
pub fn invalid_phase_error<O, P>(operation: O, phase: P) -> Error
where
    O: Display,
    P: Display,
{
    InvalidPhaseError::new(operation, phase).wrap_error()
}
