use serde::Deserialize;
use snafu::prelude::*;

use crate::domain::entity::notification::TryNewNotificationMessageError;
use crate::domain::entity::NotificationMessage;
use crate::domain::timer::{TimerConfig, TryNewTimerConfigError};
use crate::driver::{CompletionMessages, DriverConfig};

#[derive(Debug, Deserialize)]
pub struct Configuration {
    pub duration: DurationContent,
    pub cycle: CycleContent,
    #[serde(default)]
    pub behavior: BehaviorContent,
    pub notification: NotificationContent,
}

#[derive(Debug, Deserialize)]
pub struct DurationContent {
    pub work: u64,
    pub short_break: u64,
    pub long_break: u64,
}

#[derive(Debug, Deserialize)]
pub struct CycleContent {
    pub sessions_until_long_break: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct BehaviorContent {
    #[serde(default)]
    pub auto_start_next: bool,
}

#[derive(Debug, Deserialize)]
pub struct NotificationContent {
    pub work: MessageContent,
    pub short_break: MessageContent,
    pub long_break: MessageContent,
}

#[derive(Debug, Deserialize)]
pub struct MessageContent {
    pub summary: String,
    pub body: Option<String>,
}

impl MessageContent {
    fn try_into_message(self) -> Result<NotificationMessage, TryNewNotificationMessageError> {
        NotificationMessage::try_new(self.summary, self.body)
    }
}

impl Configuration {
    /// Validate the raw content into the configuration the driver takes.
    ///
    /// # Errors
    ///
    /// This function will return an error if any duration is zero, the long
    /// break interval is zero, or a notification summary is empty.
    pub fn try_into_driver_config(self) -> Result<DriverConfig, InvalidConfigurationError> {
        let timer = TimerConfig::try_new(
            self.duration.work,
            self.duration.short_break,
            self.duration.long_break,
            self.cycle.sessions_until_long_break,
        )
        .context(TimerSnafu)?;

        let messages = CompletionMessages {
            work: self.notification.work.try_into_message().context(MessageSnafu)?,
            short_break: self
                .notification
                .short_break
                .try_into_message()
                .context(MessageSnafu)?,
            long_break: self
                .notification
                .long_break
                .try_into_message()
                .context(MessageSnafu)?,
        };

        Ok(DriverConfig {
            timer,
            messages,
            auto_start_next: self.behavior.auto_start_next,
        })
    }
}

/// An error type of validating configuration content.
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidConfigurationError {
    #[snafu(display("Invalid timer durations"))]
    #[non_exhaustive]
    Timer { source: TryNewTimerConfigError },
    #[snafu(display("Invalid notification message"))]
    #[non_exhaustive]
    Message { source: TryNewNotificationMessageError },
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::reader::DEFAULT_CONTENT;

    #[test]
    fn default_content_is_valid() {
        let configuration: Configuration = toml::from_str(DEFAULT_CONTENT).unwrap();
        let config = configuration.try_into_driver_config().unwrap();

        assert_eq!(config.timer.work.seconds(), 1500);
        assert_eq!(config.timer.short_break.seconds(), 300);
        assert_eq!(config.timer.long_break.seconds(), 900);
        assert_eq!(config.timer.sessions_until_long_break.inner(), 4);
        assert!(!config.auto_start_next);
    }

    #[test]
    fn behavior_section_is_optional() {
        let content = r#"
            [duration]
            work = 10
            short_break = 5
            long_break = 15

            [cycle]
            sessions_until_long_break = 2

            [notification.work]
            summary = "Work done"

            [notification.short_break]
            summary = "Break over"

            [notification.long_break]
            summary = "Long break over"
        "#;

        let configuration: Configuration = toml::from_str(content).unwrap();
        let config = configuration.try_into_driver_config().unwrap();
        assert!(!config.auto_start_next);
    }

    #[test]
    fn zero_duration_is_rejected() {
        let content = r#"
            [duration]
            work = 0
            short_break = 5
            long_break = 15

            [cycle]
            sessions_until_long_break = 2

            [notification.work]
            summary = "Work done"

            [notification.short_break]
            summary = "Break over"

            [notification.long_break]
            summary = "Long break over"
        "#;

        let configuration: Configuration = toml::from_str(content).unwrap();
        assert!(matches!(
            configuration.try_into_driver_config(),
            Err(InvalidConfigurationError::Timer { .. })
        ));
    }
}
