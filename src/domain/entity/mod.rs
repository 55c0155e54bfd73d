pub mod cycle;
pub mod duration;
pub mod kind;
pub mod notification;

pub use cycle::LongBreakInterval;
pub use duration::SessionDuration;
pub use kind::SessionKind;
pub use notification::NotificationMessage;
