use tokio::time::Duration;

use serde::Serialize;

use crate::domain::entity::SessionKind;

/// The event emitted when a session counts down to zero. This is the only
/// event the timer emits and the sole integration point for notification,
/// persistence and rendering side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCompleted {
    pub completed_kind: SessionKind,
    pub next_kind: SessionKind,
    pub completed_work_sessions: u64,
    pub completed_total_sessions: u64,
}

/// Result of one [`SessionTimer::tick`].
///
/// [`SessionTimer::tick`]: crate::domain::timer::SessionTimer::tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer is not running; nothing happened.
    Idle,
    /// The countdown is still in progress.
    Running { remaining: Duration },
    /// The countdown reached zero and the timer advanced to the next
    /// session.
    Completed(SessionCompleted),
}

/// Result of a control operation ([`start`]/[`pause`]) which may be called
/// in a state where it has nothing to do. Illegal transitions are expected
/// from UI-driven callers and must be ignorable, so they are reported as
/// [`Ignored`] instead of an error.
///
/// [`start`]: crate::domain::timer::SessionTimer::start
/// [`pause`]: crate::domain::timer::SessionTimer::pause
/// [`Ignored`]: ControlOutcome::Ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum ControlOutcome {
    /// The transition was applied.
    Applied,
    /// The operation was not valid in the current state; nothing changed.
    Ignored,
}

impl ControlOutcome {
    /// Returns `true` if the transition was applied.
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
