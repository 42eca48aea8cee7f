use presence_types::ClientError;
use tokio::sync::oneshot;

/// Errors from a debounced publish.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PublishError {
    #[error("failed to update presence activity: {0}")]
    Client(#[from] ClientError),
}

/// What happened to a published payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Sent to the presence service.
    Published,
    /// Replaced by a newer payload before the window elapsed.
    Superseded,
    /// The presence service returned an error. Not retried.
    Failed(PublishError),
    /// The publisher shut down before the window elapsed.
    Abandoned,
}

impl PublishOutcome {
    pub fn is_published(&self) -> bool {
        matches!(self, PublishOutcome::Published)
    }
}

/// Handle to the eventual outcome of a `publish` call.
///
/// Dropping the ticket does not cancel anything; the outcome is then only
/// visible in the logs.
#[derive(Debug)]
pub struct PublishTicket {
    rx: oneshot::Receiver<PublishOutcome>,
}

impl PublishTicket {
    pub(crate) fn new(rx: oneshot::Receiver<PublishOutcome>) -> Self {
        Self { rx }
    }

    /// Wait until the payload is sent, replaced or abandoned.
    pub async fn outcome(self) -> PublishOutcome {
        self.rx.await.unwrap_or(PublishOutcome::Abandoned)
    }
}
