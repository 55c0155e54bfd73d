use std::ops::ControlFlow;
use std::sync::Arc;

use tokio::sync::mpsc::Receiver;
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior};

use crate::domain::entity::{NotificationMessage, SessionKind};
use crate::domain::timer::{SessionCompleted, SessionTimer, TickOutcome};
use crate::driver::handle::{Command, StatusReport};
use crate::driver::outbound::NotifyPort;
use crate::storage::SnapshotRepository;
use crate::tracing_report;

/// How often the driver re-reads the countdown. The timer math is
/// wall-clock-based, so this only bounds how late a completion can be
/// observed.
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// The desktop notification shown when a session of each kind completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionMessages {
    pub work: NotificationMessage,
    pub short_break: NotificationMessage,
    pub long_break: NotificationMessage,
}

impl CompletionMessages {
    /// Get the message corresponding to the completed session kind.
    pub fn message(&self, kind: SessionKind) -> &NotificationMessage {
        match kind {
            SessionKind::Work => &self.work,
            SessionKind::ShortBreak => &self.short_break,
            SessionKind::LongBreak => &self.long_break,
        }
    }
}

/// A [`DriverContext`] stores all collaborators the driving loop needs
/// besides the timer itself.
pub struct DriverContext {
    pub messages: CompletionMessages,
    pub auto_start_next: bool,
    pub commands: Receiver<Command>,
    pub notifier: Arc<dyn NotifyPort>,
    pub store: Arc<dyn SnapshotRepository>,
}

/// A type responsible for driving one [`SessionTimer`]. A [`DriverRoutine`]
/// runs on background, ticking the timer once per second and executing
/// [`Command`]s from a [`DriverHandle`]. It owns the timer exclusively, so
/// no tick can race a control operation.
///
/// [`DriverHandle`]: crate::driver::handle::DriverHandle
pub struct DriverRoutine {
    timer: SessionTimer,
    context: DriverContext,
}

impl DriverRoutine {
    /// Spawn a running [`DriverRoutine`] on background.
    pub fn spawn(timer: SessionTimer, context: DriverContext) -> JoinHandle<()> {
        tokio::spawn(async {
            let mut routine = Self { timer, context };
            routine.run().await;
        })
    }

    /// Main loop: tick the timer and serve commands until shutdown.
    async fn run(&mut self) {
        let mut interval = tokio::time::interval(TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            let flow = tokio::select! {
                _ = interval.tick() => {
                    self.handle_tick().await;
                    ControlFlow::Continue(())
                }
                command = self.context.commands.recv() => match command {
                    Some(command) => self.handle_command(command).await,
                    None => ControlFlow::Break(()),
                },
            };

            if flow.is_break() {
                break;
            }
        }
    }

    async fn handle_tick(&mut self) {
        if let TickOutcome::Completed(event) = self.timer.tick() {
            self.handle_completion(event).await;
        }
    }

    /// Completion side effects: log, notify, persist, and optionally start
    /// the next session right away. Notification and persistence failures
    /// are reported but never stop the driver.
    async fn handle_completion(&mut self, event: SessionCompleted) {
        tracing::info!(
            completed = %event.completed_kind,
            next = %event.next_kind,
            total = event.completed_total_sessions,
            "Session completed"
        );

        let message = self.context.messages.message(event.completed_kind);
        if let Err(err) = self.context.notifier.notify(message).await {
            tracing_report!(err);
        }

        self.persist().await;

        if self.context.auto_start_next {
            let _ = self.timer.start();
        }
    }

    async fn handle_command(&mut self, command: Command) -> ControlFlow<()> {
        match command {
            Command::Start => {
                let _ = self.timer.start();
            }
            Command::Pause => {
                let _ = self.timer.pause();
            }
            Command::Stop => self.timer.stop(),
            Command::Reset => {
                self.timer.reset();
                self.persist().await;
            }
            Command::SetDurations {
                work,
                short_break,
                long_break,
                sessions_until_long_break,
                responder,
            } => {
                let res = self.timer.set_durations(
                    work,
                    short_break,
                    long_break,
                    sessions_until_long_break,
                );
                let _ = responder.send(res);
            }
            Command::Query { responder } => {
                let _ = responder.send(self.report());
            }
            Command::Shutdown => return ControlFlow::Break(()),
        }

        ControlFlow::Continue(())
    }

    async fn persist(&self) {
        if let Err(err) = self.context.store.save(&self.timer.snapshot()).await {
            tracing_report!(err);
        }
    }

    fn report(&self) -> StatusReport {
        StatusReport {
            status: self.timer.status(),
            kind: self.timer.kind(),
            remaining: self.timer.remaining(),
            formatted_remaining: self.timer.format_remaining(),
            progress: self.timer.progress_fraction(),
            snapshot: self.timer.snapshot(),
            statistics: self.timer.statistics(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use tokio::sync::mpsc::Sender;
    use tokio::time::sleep;

    use crate::domain::timer::{TimerConfig, TimerStatus};
    use crate::driver::outbound::{NotifyError, NotifyRequest};
    use crate::storage::MockSnapshotRepository;

    #[tokio::test(start_paused = true)]
    async fn completion_notifies_and_persists() {
        let (sender, notifier, saved) = spawn_routine(false);

        sender.send(Command::Start).await.unwrap();
        sleep(Duration::from_secs(4)).await;

        let report = query(&sender).await;
        assert_eq!(report.status, TimerStatus::Stopped);
        assert_eq!(report.kind, SessionKind::ShortBreak);
        assert_eq!(report.snapshot.completed_work_sessions, 1);
        assert_eq!(report.snapshot.completed_total_sessions, 1);

        let request = notifier.lock().unwrap().first().unwrap().clone();
        assert_eq!(request.summary, "Work done");

        let snapshot = *saved.lock().unwrap().first().unwrap();
        assert_eq!(snapshot.session_kind, SessionKind::ShortBreak);
        assert_eq!(snapshot.completed_work_sessions, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn auto_start_runs_the_next_session() {
        let (sender, _, _) = spawn_routine(true);

        sender.send(Command::Start).await.unwrap();
        sleep(Duration::from_secs(4)).await;

        let report = query(&sender).await;
        assert_eq!(report.status, TimerStatus::Running);
        assert_eq!(report.kind, SessionKind::ShortBreak);
    }

    #[tokio::test(start_paused = true)]
    async fn without_auto_start_the_timer_waits() {
        let (sender, _, _) = spawn_routine(false);

        sender.send(Command::Start).await.unwrap();
        sleep(Duration::from_secs(60)).await;

        // Only the first session completed; nothing started the break.
        let report = query(&sender).await;
        assert_eq!(report.status, TimerStatus::Stopped);
        assert_eq!(report.snapshot.completed_total_sessions, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn set_durations_rejected_while_running() {
        let (sender, _, _) = spawn_routine(false);

        sender.send(Command::Start).await.unwrap();

        let (responder, receiver) = tokio::sync::oneshot::channel();
        sender
            .send(Command::SetDurations {
                work: 60,
                short_break: 10,
                long_break: 20,
                sessions_until_long_break: 4,
                responder,
            })
            .await
            .unwrap();
        assert!(receiver.await.unwrap().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_persists_cleared_counters() {
        let (sender, _, saved) = spawn_routine(false);

        sender.send(Command::Start).await.unwrap();
        sleep(Duration::from_secs(4)).await;
        sender.send(Command::Reset).await.unwrap();

        let report = query(&sender).await;
        assert_eq!(report.kind, SessionKind::Work);
        assert_eq!(report.snapshot.completed_total_sessions, 0);

        let snapshot = *saved.lock().unwrap().last().unwrap();
        assert_eq!(snapshot.completed_total_sessions, 0);
    }

    struct MockNotifier {
        notifications: Arc<Mutex<Vec<NotifyRequest>>>,
    }

    impl MockNotifier {
        fn new() -> (Arc<dyn NotifyPort>, Arc<Mutex<Vec<NotifyRequest>>>) {
            let notifications = Arc::new(Mutex::new(Vec::new()));
            let res = Self {
                notifications: Arc::clone(&notifications),
            };
            (Arc::new(res), notifications)
        }
    }

    #[async_trait::async_trait]
    impl NotifyPort for MockNotifier {
        async fn notify_impl(&self, request: NotifyRequest) -> Result<(), NotifyError> {
            self.notifications.lock().unwrap().push(request);
            Ok(())
        }
    }

    type Saved = Arc<Mutex<Vec<crate::domain::timer::TimerSnapshot>>>;

    fn recording_store() -> (Arc<dyn SnapshotRepository>, Saved) {
        let saved: Saved = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&saved);

        let mut mock = MockSnapshotRepository::new();
        mock.expect_load().returning(|| Ok(None));
        mock.expect_save().returning(move |snapshot| {
            sink.lock().unwrap().push(*snapshot);
            Ok(())
        });

        (Arc::new(mock), saved)
    }

    fn test_messages() -> CompletionMessages {
        let new_message = |s: &str| NotificationMessage::try_new(s.to_owned(), None).unwrap();
        CompletionMessages {
            work: new_message("Work done"),
            short_break: new_message("Short break done"),
            long_break: new_message("Long break done"),
        }
    }

    fn spawn_routine(
        auto_start_next: bool,
    ) -> (Sender<Command>, Arc<Mutex<Vec<NotifyRequest>>>, Saved) {
        let (sender, commands) = tokio::sync::mpsc::channel(1);
        let (notifier, notifications) = MockNotifier::new();
        let (store, saved) = recording_store();

        let timer = SessionTimer::new(TimerConfig::try_new(3, 5, 7, 4).unwrap());
        let context = DriverContext {
            messages: test_messages(),
            auto_start_next,
            commands,
            notifier,
            store,
        };
        DriverRoutine::spawn(timer, context);

        (sender, notifications, saved)
    }

    async fn query(sender: &Sender<Command>) -> StatusReport {
        let (responder, receiver) = tokio::sync::oneshot::channel();
        sender.send(Command::Query { responder }).await.unwrap();
        receiver.await.unwrap()
    }
}
