//! Shared contracts for the presence pipeline.
//!
//! This crate defines the data that flows between the composer, the
//! publisher and the remote presence service:
//! - `ActivityTemplate` / `SlotUse` - user configured activity strings
//! - `EditorEvent` / `IdleEvent` - inputs produced by editor integrations
//! - `PresencePayload` - the only value sent to the remote service
//!
//! It also provides the `PresenceClient` trait, so the pipeline can be driven
//! without a live connection (see `RecordingClient` and `NullClient`).

mod activity;
mod client;
mod event;
mod payload;

pub use activity::{ActivityTemplate, SlotUse, ICON_BASE_URL};
pub use client::{ClientError, NullClient, PresenceClient, PresenceClientRef, RecordingClient};
pub use event::{EditorEvent, GitContext, IdleEvent};
pub use payload::{Button, PresencePayload};
