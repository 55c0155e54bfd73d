use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// The kind of the session the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionKind {
    Work,
    ShortBreak,
    LongBreak,
}

impl SessionKind {
    /// Get an initialized [`SessionKind`]. Every cycle begins with work.
    pub fn initial() -> Self {
        Self::Work
    }

    /// Returns `true` if this is a [`Work`] session.
    ///
    /// [`Work`]: SessionKind::Work
    pub fn is_work(self) -> bool {
        matches!(self, Self::Work)
    }

    /// Human-readable label shown by presentation adapters.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Work => "Work Time",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }
}

impl Display for SessionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_initial() {
        assert_eq!(SessionKind::initial(), SessionKind::Work);
        assert!(SessionKind::initial().is_work());
    }

    #[test]
    fn kind_display_name() {
        assert_eq!(SessionKind::Work.to_string(), "Work Time");
        assert_eq!(SessionKind::ShortBreak.to_string(), "Short Break");
        assert_eq!(SessionKind::LongBreak.to_string(), "Long Break");
    }

    #[test]
    fn kind_serialization() {
        assert_eq!(
            serde_json::to_string(&SessionKind::ShortBreak).unwrap(),
            r#""shortBreak""#
        );
        assert_eq!(
            serde_json::from_str::<SessionKind>(r#""longBreak""#).unwrap(),
            SessionKind::LongBreak
        );
    }
}
