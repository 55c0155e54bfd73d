use snafu::prelude::*;

use crate::domain::entity::cycle::TryNewLongBreakIntervalError;
use crate::domain::entity::duration::TryNewSessionDurationError;
use crate::domain::entity::{LongBreakInterval, SessionDuration, SessionKind};

/// The duration knobs of a [`SessionTimer`].
///
/// [`SessionTimer`]: crate::domain::timer::SessionTimer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    pub work: SessionDuration,
    pub short_break: SessionDuration,
    pub long_break: SessionDuration,
    pub sessions_until_long_break: LongBreakInterval,
}

impl TimerConfig {
    /// Try to create a [`TimerConfig`] from raw integers, all in seconds
    /// except the last one.
    ///
    /// # Errors
    ///
    /// This function will return an error if any duration is zero or the
    /// long break interval is zero.
    pub fn try_new(
        work: u64,
        short_break: u64,
        long_break: u64,
        sessions_until_long_break: u64,
    ) -> Result<Self, TryNewTimerConfigError> {
        Ok(Self {
            work: work.try_into().context(DurationSnafu {
                key: SessionKind::Work,
            })?,
            short_break: short_break.try_into().context(DurationSnafu {
                key: SessionKind::ShortBreak,
            })?,
            long_break: long_break.try_into().context(DurationSnafu {
                key: SessionKind::LongBreak,
            })?,
            sessions_until_long_break: sessions_until_long_break
                .try_into()
                .context(IntervalSnafu)?,
        })
    }

    /// Get the duration corresponding to a session kind.
    pub fn duration(&self, kind: SessionKind) -> SessionDuration {
        match kind {
            SessionKind::Work => self.work,
            SessionKind::ShortBreak => self.short_break,
            SessionKind::LongBreak => self.long_break,
        }
    }
}

impl Default for TimerConfig {
    /// The classic 25/5/15 minute setup with a long break every fourth
    /// work session.
    fn default() -> Self {
        Self::try_new(1500, 300, 900, 4).expect("Default durations are non-zero")
    }
}

/// An error type of creating a [`TimerConfig`].
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum TryNewTimerConfigError {
    #[snafu(display("Invalid duration for {key:?}"))]
    #[non_exhaustive]
    Duration {
        key: SessionKind,
        source: TryNewSessionDurationError,
    },
    #[snafu(display("Invalid long break interval"))]
    #[non_exhaustive]
    Interval { source: TryNewLongBreakIntervalError },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_config_try_new() {
        let config = TimerConfig::try_new(1500, 300, 900, 4).unwrap();
        assert_eq!(config.work.seconds(), 1500);
        assert_eq!(config.sessions_until_long_break.inner(), 4);
    }

    #[test]
    fn timer_config_rejects_zero() {
        assert!(matches!(
            TimerConfig::try_new(0, 300, 900, 4),
            Err(TryNewTimerConfigError::Duration {
                key: SessionKind::Work,
                ..
            })
        ));
        assert!(matches!(
            TimerConfig::try_new(1500, 300, 900, 0),
            Err(TryNewTimerConfigError::Interval { .. })
        ));
    }

    #[test]
    fn timer_config_duration_lookup() {
        let config = TimerConfig::try_new(10, 20, 30, 2).unwrap();
        assert_eq!(config.duration(SessionKind::Work).seconds(), 10);
        assert_eq!(config.duration(SessionKind::ShortBreak).seconds(), 20);
        assert_eq!(config.duration(SessionKind::LongBreak).seconds(), 30);
    }
}
