use std::fmt::Display;

use anyhow::Error;

use crate::error::{
    general_error,
    not_found_error,
};

/// Converts a battle error into an [`Error`], optionally attaching a message.
pub trait WrapError {
    fn wrap_error(self) -> Error;

    /// The message becomes the outermost layer; the original error stays the root cause.
    fn wrap_error_with_message<M>(self, message: M) -> Error
    where
        M: Display;
}

impl<E> WrapError for E
where
    E: Into<Error>,
{
    fn wrap_error(self) -> Error {
        self.into()
    }

    fn wrap_error_with_message<M>(self, message: M) -> Error
    where
        M: Display,
    {
        Into::<Error>::into(self).context(message.to_string())
    }
}

/// Attaches a message to the error side of a [`Result`].
pub trait WrapResultError<T> {
    fn wrap_error_with_message<M>(self, message: M) -> Result<T, Error>
    where
        M: Display;
}

impl<T, E> WrapResultError<T> for Result<T, E>
where
    E: WrapError,
{
    fn wrap_error_with_message<M>(self, message: M) -> Result<T, Error>
    where
        M: Display,
    {
        self.map_err(|error| error.wrap_error_with_message(message))
    }
}

/// Wraps an [`Option`] into a result producing an [`Error`].
pub trait WrapOptionError<T> {
    /// Wraps the object into a [`Result<T, Error>`], failing with a
    /// [`GeneralError`][`crate::error::GeneralError`].
    #[track_caller]
    fn wrap_expectation<M>(self, message: M) -> Result<T, Error>
    where
        M: Display;

    /// Wraps the object into a [`Result<T, Error>`], failing with a
    /// [`NotFoundError`][`crate::error::NotFoundError`].
    #[track_caller]
    fn wrap_not_found_error<M>(self, target: M) -> Result<T, Error>
    where
        M: Display;
}

impl<T> WrapOptionError<T> for Option<T> {
    #[track_caller]
    fn wrap_expectation<M>(self, message: M) -> Result<T, Error>
    where
        M: Display,
    {
        self.ok_or_else(|| general_error(message))
    }

    #[track_caller]
    fn wrap_not_found_error<M>(self, target: M) -> Result<T, Error>
    where
        M: Display,
    {
        self.ok_or_else(|| not_found_error(target))
    }
}
