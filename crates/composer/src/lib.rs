//! Activity composition.
//!
//! Merges an `ActivityTemplate` with the current editor event into a
//! `PresencePayload`:
//!
//! ```text
//! EditorEvent ──► PlaceholderContext ──► ResolvedActivity
//!                                              │
//!                    icon checks (ImageResolver)
//!                                              │
//!              language suppression ► slot overlays ► timestamp ► repo button
//!                                              │
//!                                              ▼
//!                                       PresencePayload
//! ```
//!
//! Composition never fails: every step has a defined fallback.

mod clock;
mod composer;
mod overlay;
mod resolved;

pub use clock::{Clock, FixedClock, SystemClock};
pub use composer::Composer;
pub use resolved::ResolvedActivity;

/// Icon used whenever a configured icon cannot be reached.
pub const DEFAULT_ICON_URL: &str =
    "https://raw.githubusercontent.com/zerootoad/discord-rich-presence-lsp/refs/heads/main/assets/icons/text.png";

/// Editor that always gets its dedicated large icon.
pub const NEOVIM_EDITOR: &str = "neovim";

/// Dedicated large icon for `NEOVIM_EDITOR`.
pub const NEOVIM_ICON_URL: &str =
    "https://raw.githubusercontent.com/zerootoad/discord-rich-presence-lsp/refs/heads/main/assets/icons/Nvemo.png";

/// Label of the button linking to the git remote.
pub const REPOSITORY_BUTTON_LABEL: &str = "View Repository";
