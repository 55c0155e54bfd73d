mod handle;
mod routine;

pub mod outbound;

pub use handle::{DriverHandle, StatusReport};
pub use routine::CompletionMessages;

use std::sync::Arc;

use snafu::prelude::*;

use crate::domain::timer::{RestoreTimerError, SessionTimer, TimerConfig};
use crate::driver::outbound::NotifyPort;
use crate::storage::{LoadSnapshotError, SnapshotRepository};

use routine::{DriverContext, DriverRoutine};

/// Everything the driver needs to know before it starts ticking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub timer: TimerConfig,
    pub messages: CompletionMessages,
    /// Whether a completed session starts the next one right away. The
    /// timer core never does this on its own.
    pub auto_start_next: bool,
}

/// Restore the persisted snapshot, then spawn a background driver owning
/// the timer. The returned handle is the only way to reach the timer.
///
/// # Errors
///
/// This function will return an error if the persisted snapshot cannot be
/// loaded or is inconsistent.
pub async fn spawn(
    config: DriverConfig,
    store: Arc<dyn SnapshotRepository>,
    notifier: Arc<dyn NotifyPort>,
) -> Result<DriverHandle, SpawnDriverError> {
    let timer = match store.load().await.context(LoadSnafu)? {
        Some(snapshot) => {
            SessionTimer::from_snapshot(config.timer, snapshot).context(RestoreSnafu)?
        }
        None => SessionTimer::new(config.timer),
    };

    let (requester, commands) = tokio::sync::mpsc::channel(1);
    let context = DriverContext {
        messages: config.messages,
        auto_start_next: config.auto_start_next,
        commands,
        notifier,
        store,
    };
    DriverRoutine::spawn(timer, context);

    Ok(DriverHandle::new(requester))
}

/// An error for spawning the background driver.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SpawnDriverError {
    #[snafu(display("Could not load the persisted snapshot"))]
    Load { source: LoadSnapshotError },
    #[snafu(display("Could not restore the timer from the persisted snapshot"))]
    Restore { source: RestoreTimerError },
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::entity::{NotificationMessage, SessionKind};
    use crate::domain::timer::{TimerSnapshot, TimerStatus};
    use crate::driver::outbound::{NotifyError, NotifyRequest};
    use crate::storage::MockSnapshotRepository;

    #[tokio::test(start_paused = true)]
    async fn spawn_restores_persisted_counters() {
        let mut store = MockSnapshotRepository::new();
        store.expect_load().returning(|| {
            Ok(Some(TimerSnapshot {
                session_kind: SessionKind::ShortBreak,
                completed_work_sessions: 3,
                completed_total_sessions: 5,
            }))
        });
        store.expect_save().returning(|_| Ok(()));

        let handle = spawn(test_config(), Arc::new(store), Arc::new(NullNotifier))
            .await
            .unwrap();

        let report = handle.query().await;
        assert_eq!(report.status, TimerStatus::Stopped);
        assert_eq!(report.kind, SessionKind::ShortBreak);
        assert_eq!(report.snapshot.completed_work_sessions, 3);
        assert_eq!(report.snapshot.completed_total_sessions, 5);

        handle.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn spawn_rejects_inconsistent_snapshot() {
        let mut store = MockSnapshotRepository::new();
        store.expect_load().returning(|| {
            Ok(Some(TimerSnapshot {
                session_kind: SessionKind::Work,
                completed_work_sessions: 9,
                completed_total_sessions: 1,
            }))
        });

        let res = spawn(test_config(), Arc::new(store), Arc::new(NullNotifier)).await;
        assert!(matches!(res, Err(SpawnDriverError::Restore { .. })));
    }

    struct NullNotifier;

    #[async_trait::async_trait]
    impl NotifyPort for NullNotifier {
        async fn notify_impl(&self, _request: NotifyRequest) -> Result<(), NotifyError> {
            Ok(())
        }
    }

    fn test_config() -> DriverConfig {
        let new_message = |s: &str| NotificationMessage::try_new(s.to_owned(), None).unwrap();
        DriverConfig {
            timer: TimerConfig::try_new(3, 5, 7, 4).unwrap(),
            messages: CompletionMessages {
                work: new_message("Work done"),
                short_break: new_message("Short break done"),
                long_break: new_message("Long break done"),
            },
            auto_start_next: false,
        }
    }
}
