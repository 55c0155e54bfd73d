use snafu::prelude::*;

/// How many completed work sessions are required before a long break is
/// scheduled instead of a short one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LongBreakInterval(u64);

impl LongBreakInterval {
    /// Try to create a [`LongBreakInterval`] from a u64 integer.
    ///
    /// # Errors
    ///
    /// This function will return an error if the integer is zero.
    pub fn try_new(sessions: u64) -> Result<Self, TryNewLongBreakIntervalError> {
        ensure!(sessions > 0, ZeroSnafu);
        Ok(Self(sessions))
    }

    /// Returns the inner of this [`LongBreakInterval`].
    pub fn inner(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for LongBreakInterval {
    type Error = TryNewLongBreakIntervalError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

/// An error type of creating a [`LongBreakInterval`].
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum TryNewLongBreakIntervalError {
    #[snafu(display("Long break interval must be at least one session"))]
    #[non_exhaustive]
    Zero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_break_interval_try_new() {
        assert_eq!(LongBreakInterval::try_new(4), Ok(LongBreakInterval(4)));
        assert_eq!(
            LongBreakInterval::try_new(0),
            Err(TryNewLongBreakIntervalError::Zero),
        );
    }
}
