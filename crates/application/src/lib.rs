//! Presence application service.
//!
//! `PresenceService` is the single entry point editor integrations talk to.
//! It owns one composer, one debounced publisher and the client session:
//!
//! ```text
//! EditorEvent / IdleEvent
//!        │
//!        ▼
//!   Composer (template + icon checks) ──► DebouncedPublisher ──► PresenceClient
//! ```

mod error;
mod service;

pub use error::ServiceError;
pub use service::PresenceService;

// Re-export what callers need to drive the service
pub use presence_composer::{Clock, FixedClock, SystemClock};
pub use presence_config::PresenceConfig;
pub use presence_publisher::{PublishError, PublishOutcome, PublishTicket};
pub use presence_types::{EditorEvent, GitContext, IdleEvent, PresenceClient, PresencePayload};
