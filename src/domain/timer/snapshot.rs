use serde::{Deserialize, Serialize};

use crate::domain::entity::SessionKind;

/// The persistent view of a [`SessionTimer`]: the current session kind and
/// the completion counters. The live countdown is never part of it, so a
/// restored timer always starts a session at full duration.
///
/// [`SessionTimer`]: crate::domain::timer::SessionTimer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSnapshot {
    pub session_kind: SessionKind,
    pub completed_work_sessions: u64,
    pub completed_total_sessions: u64,
}

impl TimerSnapshot {
    /// A snapshot of a timer that has never completed a session.
    pub fn initial() -> Self {
        Self {
            session_kind: SessionKind::initial(),
            completed_work_sessions: 0,
            completed_total_sessions: 0,
        }
    }
}

/// Aggregated productivity numbers derived from the completion counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerStatistics {
    pub completed_work_sessions: u64,
    pub completed_total_sessions: u64,
    pub estimated_productive_minutes: u64,
}
