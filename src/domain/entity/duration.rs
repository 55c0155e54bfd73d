use std::time::Duration;

use snafu::prelude::*;

/// The duration of one session, represented in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SessionDuration(Duration);

impl SessionDuration {
    /// Try to create a [`SessionDuration`] from a u64 integer.
    ///
    /// # Errors
    ///
    /// This function will return an error if the integer is zero.
    pub fn try_new(seconds: u64) -> Result<Self, TryNewSessionDurationError> {
        ensure!(seconds > 0, ZeroSnafu);
        Ok(Self(Duration::from_secs(seconds)))
    }

    /// Returns the inner of this [`SessionDuration`].
    pub fn inner(self) -> Duration {
        self.0
    }

    /// Returns the whole number of seconds of this [`SessionDuration`].
    pub fn seconds(self) -> u64 {
        self.0.as_secs()
    }
}

impl TryFrom<u64> for SessionDuration {
    type Error = TryNewSessionDurationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

/// An error type of creating a [`SessionDuration`].
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum TryNewSessionDurationError {
    #[snafu(display("Duration must be greater than zero"))]
    #[non_exhaustive]
    Zero,
}
