use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use snafu::prelude::*;

use crate::domain::timer::TimerSnapshot;
use crate::storage::{
    LoadSnapshotError, ParseSnafu, ReadSnafu, SaveSnapshotError, SerializeSnafu,
    SnapshotRepository, WriteSnafu,
};

/// A [`SnapshotRepository`] implementation backed by a single JSON file,
/// typically placed in the XDG state directory.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    /// Creates a new [`JsonSnapshotStore`] writing to the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl SnapshotRepository for JsonSnapshotStore {
    async fn load(&self) -> Result<Option<TimerSnapshot>, LoadSnapshotError> {
        let content = match tokio::fs::read(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err).context(ReadSnafu),
        };

        let snapshot = serde_json::from_slice(&content).context(ParseSnafu)?;
        Ok(Some(snapshot))
    }

    async fn save(&self, snapshot: &TimerSnapshot) -> Result<(), SaveSnapshotError> {
        let content = serde_json::to_vec_pretty(snapshot).context(SerializeSnafu)?;
        tokio::fs::write(&self.path, content).await.context(WriteSnafu)
    }
}
