use crate::outcome::{PublishOutcome, PublishTicket};
use presence_types::{PresenceClientRef, PresencePayload};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

/// Default quiet period before a payload is sent.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(5);

/// What a scheduled payload represents. Only changes how it is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PublishKind {
    Update,
    Clear,
}

struct PublishRequest {
    kind: PublishKind,
    payload: PresencePayload,
    reply: oneshot::Sender<PublishOutcome>,
}

/// Trailing-edge debouncer in front of `PresenceClient::set_activity`.
///
/// All clones feed the same background task, which owns the single pending
/// slot; concurrent `publish` calls are serialized by its channel.
#[derive(Clone)]
pub struct DebouncedPublisher {
    tx: mpsc::UnboundedSender<PublishRequest>,
    window: Duration,
}

impl DebouncedPublisher {
    /// Spawn the debounce task on the current tokio runtime.
    ///
    /// The task stops once every clone of the publisher has been dropped; a
    /// payload still waiting at that point is abandoned.
    pub fn new(client: PresenceClientRef, window: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_debounce_loop(client, rx, window));
        Self { tx, window }
    }

    /// Schedule `payload`, replacing any payload still waiting.
    ///
    /// Returns immediately.
    pub fn publish(&self, payload: PresencePayload) -> PublishTicket {
        self.schedule(PublishKind::Update, payload)
    }

    /// Schedule an idle payload. Debounced exactly like `publish`; a clear
    /// replaces a pending update and vice versa.
    pub fn publish_clear(&self, payload: PresencePayload) -> PublishTicket {
        self.schedule(PublishKind::Clear, payload)
    }

    fn schedule(&self, kind: PublishKind, payload: PresencePayload) -> PublishTicket {
        let (reply, rx) = oneshot::channel();
        let request = PublishRequest {
            kind,
            payload,
            reply,
        };
        if let Err(mpsc::error::SendError(request)) = self.tx.send(request) {
            tracing::warn!(kind = ?request.kind, "Presence publisher stopped, dropping update");
            let _ = request.reply.send(PublishOutcome::Abandoned);
        }
        PublishTicket::new(rx)
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

/// Debounce loop.
///
/// Idle: wait for the first request of a burst. Pending: every new request
/// restarts the quiet period and replaces the buffered one. When the quiet
/// period elapses the buffered payload is sent and the loop goes idle again.
async fn run_debounce_loop(
    client: PresenceClientRef,
    mut rx: mpsc::UnboundedReceiver<PublishRequest>,
    window: Duration,
) {
    tracing::debug!(?window, "Presence publisher started");

    while let Some(mut pending) = rx.recv().await {
        loop {
            tokio::select! {
                biased;
                next = rx.recv() => match next {
                    Some(request) => {
                        let replaced = std::mem::replace(&mut pending, request);
                        let _ = replaced.reply.send(PublishOutcome::Superseded);
                    }
                    None => {
                        tracing::debug!("Presence publisher closed, abandoning pending update");
                        return;
                    }
                },
                _ = tokio::time::sleep(window) => break,
            }
        }

        let PublishRequest {
            kind,
            payload,
            reply,
        } = pending;
        match kind {
            PublishKind::Update => tracing::info!(
                state = %payload.state,
                details = %payload.details,
                "Updating presence activity"
            ),
            PublishKind::Clear => tracing::info!(
                state = %payload.state,
                details = %payload.details,
                "Clearing presence activity"
            ),
        }

        let outcome = match client.set_activity(&payload).await {
            Ok(()) => PublishOutcome::Published,
            Err(e) => {
                tracing::error!(error = %e, "Failed to update presence activity");
                PublishOutcome::Failed(e.into())
            }
        };
        let _ = reply.send(outcome);
    }

    tracing::debug!("Presence publisher stopped");
}
