use tokio::sync::mpsc::Sender;
use tokio::sync::oneshot::{self, Sender as OneshotSender};
use tokio::time::Duration;

use crate::domain::entity::SessionKind;
use crate::domain::timer::{SetDurationsError, TimerSnapshot, TimerStatistics, TimerStatus};

/// Result of one query of the current timer state.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub status: TimerStatus,
    pub kind: SessionKind,
    pub remaining: Duration,
    pub formatted_remaining: String,
    pub progress: f64,
    pub snapshot: TimerSnapshot,
    pub statistics: TimerStatistics,
}

/// Actions that a [`DriverRoutine`] runs.
///
/// [`DriverRoutine`]: crate::driver::routine::DriverRoutine
#[derive(Debug)]
pub enum Command {
    Start,
    Pause,
    Stop,
    Reset,
    SetDurations {
        work: u64,
        short_break: u64,
        long_break: u64,
        sessions_until_long_break: u64,
        responder: OneshotSender<Result<(), SetDurationsError>>,
    },
    Query {
        responder: OneshotSender<StatusReport>,
    },
    Shutdown,
}

/// Handle that controls a [`DriverRoutine`]. All timer mutations go
/// through this channel, which serializes them onto the single task that
/// owns the [`SessionTimer`].
///
/// [`DriverRoutine`]: crate::driver::routine::DriverRoutine
/// [`SessionTimer`]: crate::domain::timer::SessionTimer
#[derive(Debug)]
pub struct DriverHandle {
    requester: Sender<Command>,
}

impl DriverHandle {
    /// Creates a new [`DriverHandle`].
    pub fn new(requester: Sender<Command>) -> Self {
        Self { requester }
    }

    /// Send [`Command::Start`] to the background driver to start or resume
    /// the countdown.
    pub async fn start(&self) {
        match self.requester.send(Command::Start).await {
            Ok(_) => {}
            Err(_) => unreachable!("Driver should not be shut down"),
        };
    }

    /// Send [`Command::Pause`] to the background driver to suspend the
    /// countdown.
    pub async fn pause(&self) {
        match self.requester.send(Command::Pause).await {
            Ok(_) => {}
            Err(_) => unreachable!("Driver should not be shut down"),
        };
    }

    /// Send [`Command::Stop`] to the background driver to stop the
    /// countdown of the current session.
    pub async fn stop(&self) {
        match self.requester.send(Command::Stop).await {
            Ok(_) => {}
            Err(_) => unreachable!("Driver should not be shut down"),
        };
    }

    /// Send [`Command::Reset`] to the background driver to stop the
    /// countdown and zero the completion counters.
    pub async fn reset(&self) {
        match self.requester.send(Command::Reset).await {
            Ok(_) => {}
            Err(_) => unreachable!("Driver should not be shut down"),
        };
    }

    /// Send [`Command::SetDurations`] to the background driver to replace
    /// the duration configuration.
    ///
    /// # Errors
    ///
    /// This function will return an error if the timer is running or the
    /// values are invalid.
    pub async fn set_durations(
        &self,
        work: u64,
        short_break: u64,
        long_break: u64,
        sessions_until_long_break: u64,
    ) -> Result<(), SetDurationsError> {
        let (responder, receiver) = oneshot::channel();
        let command = Command::SetDurations {
            work,
            short_break,
            long_break,
            sessions_until_long_break,
            responder,
        };
        match self.requester.send(command).await {
            Ok(_) => match receiver.await {
                Ok(res) => res,
                Err(_) => unreachable!("Driver should not be shut down"),
            },
            Err(_) => unreachable!("Driver should not be shut down"),
        }
    }

    /// Send [`Command::Query`] to the background driver to get the current
    /// state.
    pub async fn query(&self) -> StatusReport {
        let (responder, receiver) = oneshot::channel();
        match self.requester.send(Command::Query { responder }).await {
            Ok(_) => match receiver.await {
                Ok(res) => res,
                Err(_) => unreachable!("Driver should not be shut down"),
            },
            Err(_) => unreachable!("Driver should not be shut down"),
        }
    }

    /// Send [`Command::Shutdown`] and consume the handle. The background
    /// task finishes after processing the command.
    pub async fn shutdown(self) {
        // The driver may already be gone; shutting down twice is fine.
        let _ = self.requester.send(Command::Shutdown).await;
    }
}
