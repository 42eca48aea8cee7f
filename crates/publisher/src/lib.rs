//! Debounced presence publishing.
//!
//! Editor events arrive in bursts (every keystroke, every buffer switch).
//! The presence service only needs the last state of a burst, so
//! `DebouncedPublisher` holds a single pending payload and sends it once no
//! new payload has arrived for a full window.
//!
//! # Example
//!
//! ```ignore
//! use presence_publisher::DebouncedPublisher;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let publisher = DebouncedPublisher::new(client, Duration::from_secs(5));
//! let ticket = publisher.publish(payload);
//! // Await only if the caller cares about the result
//! let outcome = ticket.outcome().await;
//! ```

mod outcome;
mod publisher;

pub use outcome::{PublishError, PublishOutcome, PublishTicket};
pub use publisher::{DebouncedPublisher, DEFAULT_DEBOUNCE};
