pub mod config;
pub mod event;
pub mod session;
pub mod snapshot;

pub use config::{TimerConfig, TryNewTimerConfigError};
pub use event::{ControlOutcome, SessionCompleted, TickOutcome};
pub use session::{RestoreTimerError, SessionTimer, SetDurationsError, TimerStatus};
pub use snapshot::{TimerSnapshot, TimerStatistics};
