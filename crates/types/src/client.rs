//! Remote presence client abstraction.
//!
//! The transport (IPC socket, login handshake) lives outside this workspace.
//! Everything here talks to it through `PresenceClient`, which keeps the
//! pipeline testable without a running presence service.

use crate::payload::PresencePayload;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Errors reported by the remote presence service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("not connected to the presence service")]
    NotConnected,

    #[error("presence service rejected the request: {0}")]
    Rejected(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Session and publish primitives of the remote presence service.
#[async_trait]
pub trait PresenceClient: Send + Sync {
    /// Open a session for the given application.
    async fn login(&self, application_id: &str) -> Result<(), ClientError>;

    /// Close the session. Never fails; a dead session is already logged out.
    async fn logout(&self);

    /// Replace the current presence with `payload`.
    async fn set_activity(&self, payload: &PresencePayload) -> Result<(), ClientError>;
}

/// Type alias for a shared client handle.
pub type PresenceClientRef = Arc<dyn PresenceClient>;

/// In-memory client for testing.
///
/// Captures logins, logouts and published payloads for later inspection.
#[derive(Default)]
pub struct RecordingClient {
    logins: Mutex<Vec<String>>,
    logouts: AtomicUsize,
    payloads: Mutex<Vec<PresencePayload>>,
    fail_next: Mutex<Option<ClientError>>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `set_activity` call fail with `error`.
    pub fn fail_next(&self, error: ClientError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }

    /// Application ids passed to `login`, in order.
    pub fn logins(&self) -> Vec<String> {
        self.logins.lock().unwrap().clone()
    }

    pub fn logout_count(&self) -> usize {
        self.logouts.load(Ordering::SeqCst)
    }

    /// All successfully published payloads, oldest first.
    pub fn payloads(&self) -> Vec<PresencePayload> {
        self.payloads.lock().unwrap().clone()
    }

    pub fn last_payload(&self) -> Option<PresencePayload> {
        self.payloads.lock().unwrap().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl PresenceClient for RecordingClient {
    async fn login(&self, application_id: &str) -> Result<(), ClientError> {
        self.logins.lock().unwrap().push(application_id.to_string());
        Ok(())
    }

    async fn logout(&self) {
        self.logouts.fetch_add(1, Ordering::SeqCst);
    }

    async fn set_activity(&self, payload: &PresencePayload) -> Result<(), ClientError> {
        if let Some(error) = self.fail_next.lock().unwrap().take() {
            return Err(error);
        }
        self.payloads.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

/// Client that accepts and discards everything.
pub struct NullClient;

#[async_trait]
impl PresenceClient for NullClient {
    async fn login(&self, _application_id: &str) -> Result<(), ClientError> {
        Ok(())
    }

    async fn logout(&self) {}

    async fn set_activity(&self, _payload: &PresencePayload) -> Result<(), ClientError> {
        Ok(())
    }
}
