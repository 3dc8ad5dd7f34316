use std::sync::Mutex;

use async_trait::async_trait;

/// Failure to hand a message to the delivery system. Always non-fatal to
/// the operation that triggered the message.
#[derive(Debug)]
pub struct NotifyError(pub String);

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "notification failed: {}", self.0)
    }
}

impl std::error::Error for NotifyError {}

/// The contract the workflow requires from the messaging system.
/// Fire-and-forget: the workflow reports failures but never retries or
/// rolls back because of them.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, to: &str, subject: &str, body_html: &str) -> Result<(), NotifyError>;
}

/// A message as handed to a notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub to: String,
    pub subject: String,
    pub body_html: String,
}

/// Captures every delivery instead of sending it. For tests and embedders
/// that render notices themselves.
#[derive(Default)]
pub struct RecordingNotifier {
    deliveries: Mutex<Vec<Delivery>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().expect("notifier mutex poisoned").clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, to: &str, subject: &str, body_html: &str) -> Result<(), NotifyError> {
        self.deliveries
            .lock()
            .expect("notifier mutex poisoned")
            .push(Delivery {
                to: to.to_string(),
                subject: subject.to_string(),
                body_html: body_html.to_string(),
            });
        Ok(())
    }
}
