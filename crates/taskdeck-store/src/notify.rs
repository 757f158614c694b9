/*
[INPUT]:  Command outcomes (create success, any failure)
[OUTPUT]: Transient user-facing messages with severity
[POS]:    Sync layer - feedback relay between stores and toast surfaces
[UPDATE]: When changing message shapes or delivery
*/

use tokio::sync::broadcast;

/// Visual weight of a transient message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// One transient user-facing message.
///
/// Exactly one is produced per command outcome that warrants feedback:
/// create successes and every failure. Nothing is retried on the user's
/// behalf; an error message is an invitation to re-trigger the action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub body: String,
}

/// Stateless fan-out for notifications.
///
/// Publishing never blocks and never fails the publishing command; with no
/// subscribers the message is dropped.
#[derive(Debug, Clone)]
pub struct NotificationRelay {
    tx: broadcast::Sender<Notification>,
}

impl NotificationRelay {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    pub(crate) fn success(&self, title: &str, body: &str) {
        self.publish(Severity::Success, title, body);
    }

    pub(crate) fn error(&self, title: &str, body: &str) {
        self.publish(Severity::Error, title, body);
    }

    fn publish(&self, severity: Severity, title: &str, body: &str) {
        let _ = self.tx.send(Notification {
            severity,
            title: title.to_string(),
            body: body.to_string(),
        });
    }
}
