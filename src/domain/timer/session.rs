use std::fmt::{Display, Formatter, Result as FmtResult};

use snafu::prelude::*;
use tokio::time::{Duration, Instant};

use crate::domain::entity::SessionKind;
use crate::domain::timer::config::{TimerConfig, TryNewTimerConfigError};
use crate::domain::timer::event::{ControlOutcome, SessionCompleted, TickOutcome};
use crate::domain::timer::snapshot::{TimerSnapshot, TimerStatistics};

/// Elapsed-time bookkeeping for each phase of the countdown.
///
/// While running, elapsed time is `carried + (now - started_at)`, where
/// `carried` is whatever had already elapsed before the last resume. This
/// keeps the countdown wall-clock-based: a tick after a long gap still
/// reports the correct remaining time instead of drifting with missed
/// ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Stopped,
    Running { started_at: Instant, carried: Duration },
    Paused { elapsed: Duration },
}

/// Which of the three phases the timer is in, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Stopped,
    Running,
    Paused,
}

impl Display for TimerStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Stopped => f.write_str("stopped"),
            Self::Running => f.write_str("running"),
            Self::Paused => f.write_str("paused"),
        }
    }
}

/// The Pomodoro session state machine: one current session of a given
/// [`SessionKind`] counting down, plus completion counters driving the
/// work/short-break/long-break cycle.
///
/// The timer performs no I/O and owns no timing primitive. A driver calls
/// [`tick`] periodically; everything else is synchronous bookkeeping. All
/// operations are total over the state space, so wiring them straight to
/// UI button handlers cannot produce a panic.
///
/// [`tick`]: SessionTimer::tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTimer {
    config: TimerConfig,
    kind: SessionKind,
    phase: Phase,
    completed_work_sessions: u64,
    completed_total_sessions: u64,
}

impl SessionTimer {
    /// Creates a new [`SessionTimer`] in the stopped state, ready to count
    /// down a work session.
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            kind: SessionKind::initial(),
            phase: Phase::Stopped,
            completed_work_sessions: 0,
            completed_total_sessions: 0,
        }
    }

    /// Restore a timer from a persisted snapshot. The countdown itself is
    /// never persisted, so the restored timer is stopped at the full
    /// duration of the snapshot's session kind.
    ///
    /// # Errors
    ///
    /// This function will return an error if the snapshot counters are
    /// inconsistent.
    pub fn from_snapshot(
        config: TimerConfig,
        snapshot: TimerSnapshot,
    ) -> Result<Self, RestoreTimerError> {
        ensure!(
            snapshot.completed_total_sessions >= snapshot.completed_work_sessions,
            CounterMismatchSnafu {
                work: snapshot.completed_work_sessions,
                total: snapshot.completed_total_sessions,
            }
        );

        Ok(Self {
            config,
            kind: snapshot.session_kind,
            phase: Phase::Stopped,
            completed_work_sessions: snapshot.completed_work_sessions,
            completed_total_sessions: snapshot.completed_total_sessions,
        })
    }

    /// Start the countdown, or resume it if paused. Starting an already
    /// running timer is idempotent and reported as [`Ignored`].
    ///
    /// [`Ignored`]: ControlOutcome::Ignored
    pub fn start(&mut self) -> ControlOutcome {
        match self.phase {
            Phase::Stopped => {
                self.phase = Phase::Running {
                    started_at: Instant::now(),
                    carried: Duration::ZERO,
                };
                ControlOutcome::Applied
            }
            Phase::Paused { elapsed } => {
                self.phase = Phase::Running {
                    started_at: Instant::now(),
                    carried: elapsed,
                };
                ControlOutcome::Applied
            }
            Phase::Running { .. } => ControlOutcome::Ignored,
        }
    }

    /// Suspend the countdown, retaining elapsed time for a later
    /// [`start`]. Pausing a timer that is not running is reported as
    /// [`Ignored`].
    ///
    /// [`start`]: SessionTimer::start
    /// [`Ignored`]: ControlOutcome::Ignored
    pub fn pause(&mut self) -> ControlOutcome {
        match self.phase {
            Phase::Running { started_at, carried } => {
                self.phase = Phase::Paused {
                    elapsed: carried + Instant::now().saturating_duration_since(started_at),
                };
                ControlOutcome::Applied
            }
            Phase::Stopped | Phase::Paused { .. } => ControlOutcome::Ignored,
        }
    }

    /// Stop the countdown and revert to the full duration of the current
    /// session kind. Counters and kind are untouched.
    pub fn stop(&mut self) {
        self.phase = Phase::Stopped;
    }

    /// Stop the countdown and additionally forget all progress: the kind
    /// reverts to work and both counters are zeroed.
    pub fn reset(&mut self) {
        self.phase = Phase::Stopped;
        self.kind = SessionKind::initial();
        self.completed_work_sessions = 0;
        self.completed_total_sessions = 0;
    }

    /// Recompute the countdown from the clock. A no-op unless running.
    ///
    /// Designed to be called about once per second, but correct at any
    /// granularity: elapsed time is measured from the clock rather than
    /// accumulated per call, so a tick after a ten-minute gap completes
    /// the session instead of drifting.
    pub fn tick(&mut self) -> TickOutcome {
        let Phase::Running { started_at, carried } = self.phase else {
            return TickOutcome::Idle;
        };

        let elapsed = carried + Instant::now().saturating_duration_since(started_at);
        let duration = self.config.duration(self.kind).inner();

        match duration.checked_sub(elapsed) {
            Some(remaining) if !remaining.is_zero() => TickOutcome::Running { remaining },
            _ => TickOutcome::Completed(self.complete()),
        }
    }

    /// Advance to the next session after the current one counted down to
    /// zero. The timer stops; whether the next session starts right away
    /// is the driver's policy, never decided here.
    fn complete(&mut self) -> SessionCompleted {
        let completed_kind = self.kind;
        self.completed_total_sessions += 1;

        self.kind = if completed_kind.is_work() {
            self.completed_work_sessions += 1;
            let interval = self.config.sessions_until_long_break.inner();
            if self.completed_work_sessions % interval == 0 {
                SessionKind::LongBreak
            } else {
                SessionKind::ShortBreak
            }
        } else {
            SessionKind::Work
        };

        self.phase = Phase::Stopped;

        SessionCompleted {
            completed_kind,
            next_kind: self.kind,
            completed_work_sessions: self.completed_work_sessions,
            completed_total_sessions: self.completed_total_sessions,
        }
    }

    /// Replace the duration configuration.
    ///
    /// # Errors
    ///
    /// This function will return an error if the timer is running or any
    /// value is invalid. The previous configuration is retained in both
    /// cases.
    pub fn set_durations(
        &mut self,
        work: u64,
        short_break: u64,
        long_break: u64,
        sessions_until_long_break: u64,
    ) -> Result<(), SetDurationsError> {
        ensure!(self.status() != TimerStatus::Running, TimerRunningSnafu);

        let config = TimerConfig::try_new(work, short_break, long_break, sessions_until_long_break)
            .context(InvalidConfigSnafu)?;
        self.config = config;
        Ok(())
    }

    /// The currently configured durations.
    pub fn config(&self) -> TimerConfig {
        self.config
    }

    /// The kind of the current session.
    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    /// Which phase the timer is in.
    pub fn status(&self) -> TimerStatus {
        match self.phase {
            Phase::Stopped => TimerStatus::Stopped,
            Phase::Running { .. } => TimerStatus::Running,
            Phase::Paused { .. } => TimerStatus::Paused,
        }
    }

    /// Time left in the current session. Full duration when stopped,
    /// clamped at zero.
    pub fn remaining(&self) -> Duration {
        let duration = self.config.duration(self.kind).inner();
        match self.phase {
            Phase::Stopped => duration,
            Phase::Running { started_at, carried } => duration.saturating_sub(
                carried + Instant::now().saturating_duration_since(started_at),
            ),
            Phase::Paused { elapsed } => duration.saturating_sub(elapsed),
        }
    }

    /// How far the current session has progressed, in `[0, 1]`.
    pub fn progress_fraction(&self) -> f64 {
        let duration = self.config.duration(self.kind).inner();
        let fraction = 1.0 - self.remaining().as_secs_f64() / duration.as_secs_f64();
        fraction.clamp(0.0, 1.0)
    }

    /// The remaining time as a zero-padded `MM:SS` string.
    pub fn format_remaining(&self) -> String {
        let secs = self.remaining().as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    /// The persistent view of this timer.
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            session_kind: self.kind,
            completed_work_sessions: self.completed_work_sessions,
            completed_total_sessions: self.completed_total_sessions,
        }
    }

    /// Aggregated counters plus the productive minutes they add up to.
    pub fn statistics(&self) -> TimerStatistics {
        TimerStatistics {
            completed_work_sessions: self.completed_work_sessions,
            completed_total_sessions: self.completed_total_sessions,
            estimated_productive_minutes: self.completed_work_sessions * self.config.work.seconds()
                / 60,
        }
    }
}

/// An error type of restoring a [`SessionTimer`] from a snapshot.
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum RestoreTimerError {
    #[snafu(display("Snapshot counters are inconsistent: {work} work sessions > {total} total"))]
    #[non_exhaustive]
    CounterMismatch { work: u64, total: u64 },
}

/// An error type of updating the durations of a [`SessionTimer`].
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum SetDurationsError {
    #[snafu(display("Durations cannot change while the timer is running"))]
    #[non_exhaustive]
    TimerRunning,
    #[snafu(display("Could not apply an invalid configuration"))]
    #[non_exhaustive]
    InvalidConfig { source: TryNewTimerConfigError },
}
