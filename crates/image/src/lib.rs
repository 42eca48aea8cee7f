//! Icon URL resolution.
//!
//! Presence icons are plain URLs taken from user templates. Before sending
//! one to the presence service we check that it actually serves something;
//! anything unreachable is replaced by a default icon. Failures are expected
//! (typos, languages without an icon) and never surface as errors.

mod cache;
mod probe;
mod resolver;

pub use probe::{HttpProbe, ImageProbe, DEFAULT_PROBE_TIMEOUT};
pub use resolver::ImageResolver;
