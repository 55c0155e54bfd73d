mod json;

pub use json::JsonSnapshotStore;

use std::error::Error as StdError;

use snafu::prelude::*;

use crate::domain::timer::TimerSnapshot;

/// An abstract interface for persisting the timer snapshot across runs.
/// The timer core never talks to storage directly; the driver saves a
/// fresh snapshot after each completed session and restores one at spawn.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SnapshotRepository: Send + Sync + 'static {
    /// Load the previously persisted snapshot, or `None` if none was ever
    /// saved.
    ///
    /// # Errors
    ///
    /// This function will return an error if stored data exists but cannot
    /// be read or parsed.
    async fn load(&self) -> Result<Option<TimerSnapshot>, LoadSnapshotError>;

    /// Persist a snapshot, replacing any previous one.
    ///
    /// # Errors
    ///
    /// This function will return an error if the snapshot cannot be
    /// written.
    async fn save(&self, snapshot: &TimerSnapshot) -> Result<(), SaveSnapshotError>;
}

/// An error type of loading a persisted [`TimerSnapshot`].
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum LoadSnapshotError {
    #[snafu(display("Could not read stored snapshot"))]
    #[non_exhaustive]
    Read { source: std::io::Error },
    #[snafu(display("Stored snapshot is not valid"))]
    #[non_exhaustive]
    Parse { source: serde_json::Error },
    #[snafu(whatever, display("Load snapshot failed: {message}"))]
    #[non_exhaustive]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError>, Some)))]
        source: Option<Box<dyn StdError>>,
    },
}

/// An error type of persisting a [`TimerSnapshot`].
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SaveSnapshotError {
    #[snafu(display("Could not write snapshot"))]
    #[non_exhaustive]
    Write { source: std::io::Error },
    #[snafu(display("Could not serialize snapshot"))]
    #[non_exhaustive]
    Serialize { source: serde_json::Error },
    #[snafu(whatever, display("Save snapshot failed: {message}"))]
    #[non_exhaustive]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError>, Some)))]
        source: Option<Box<dyn StdError>>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::entity::SessionKind;

    #[tokio::test]
    async fn snapshot_repository_mock() {
        let mut mock = MockSnapshotRepository::new();
        mock.expect_load().returning(|| {
            Ok(Some(TimerSnapshot {
                session_kind: SessionKind::ShortBreak,
                completed_work_sessions: 1,
                completed_total_sessions: 1,
            }))
        });
        mock.expect_save().returning(|_| whatever!("readonly"));

        let loaded = mock.load().await.unwrap().unwrap();
        assert_eq!(loaded.session_kind, SessionKind::ShortBreak);
        assert!(mock.save(&TimerSnapshot::initial()).await.is_err());
    }
}
