//! User configured activity template.

use serde::{Deserialize, Serialize};

/// Base URL of the bundled icon set.
pub const ICON_BASE_URL: &str =
    "https://raw.githubusercontent.com/zerootoad/discord-rich-presence-lsp/refs/heads/main/assets/icons";

/// Which display pair a presence image slot shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SlotUse {
    /// Keep whatever the template resolved for the slot.
    #[default]
    None,
    /// Show the language icon and text.
    Language,
    /// Show the editor icon and text.
    Editor,
}

impl SlotUse {
    pub fn label(&self) -> &'static str {
        match self {
            SlotUse::None => "none",
            SlotUse::Language => "language",
            SlotUse::Editor => "editor",
        }
    }
}

impl std::fmt::Display for SlotUse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Activity strings as written by the user, placeholders unresolved.
///
/// Every text field may contain placeholder tokens such as `{filename}`.
/// The large slot is the editor slot and the small slot is the language slot;
/// `large_use` / `small_use` can swap what each slot displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityTemplate {
    pub state: String,
    pub details: String,
    pub large_image: String,
    pub large_text: String,
    pub small_image: String,
    pub small_text: String,
    /// Attach the editor session start time to the payload.
    #[serde(alias = "timestamp")]
    pub include_timestamp: bool,
    pub large_use: SlotUse,
    pub small_use: SlotUse,
}

impl Default for ActivityTemplate {
    fn default() -> Self {
        Self {
            state: "{action} {filename}".to_string(),
            details: "In {workspace}".to_string(),
            large_image: format!("{ICON_BASE_URL}/{{editor}}.png"),
            large_text: "{editor}".to_string(),
            small_image: format!("{ICON_BASE_URL}/{{language}}.png"),
            small_text: "Coding in {language}".to_string(),
            include_timestamp: true,
            large_use: SlotUse::None,
            small_use: SlotUse::None,
        }
    }
}
