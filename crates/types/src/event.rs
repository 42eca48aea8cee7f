//! Editor events that drive presence updates.
//!
//! Producers: editor integrations (file open, language detection, git context).
//! Consumers: the activity composer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Git repository information for the current workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitContext {
    /// Browsable remote URL (e.g. `https://github.com/user/repo`).
    #[serde(default)]
    pub remote_url: String,
    /// Checked out branch name.
    #[serde(default)]
    pub branch: String,
}

impl GitContext {
    pub fn new(remote_url: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            remote_url: remote_url.into(),
            branch: branch.into(),
        }
    }

    /// Whether there is a remote to link to.
    pub fn has_remote(&self) -> bool {
        !self.remote_url.is_empty()
    }
}

/// Editor activity, e.g. a file being opened or edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorEvent {
    /// Verb shown to other users ("Editing", "Viewing", ...).
    pub action: String,
    pub filename: String,
    pub workspace: String,
    pub editor: String,
    /// Detected language; empty when unknown.
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub git: Option<GitContext>,
    /// When the editing session started.
    pub started_at: DateTime<Utc>,
}

impl EditorEvent {
    pub fn new(
        action: impl Into<String>,
        filename: impl Into<String>,
        workspace: impl Into<String>,
        editor: impl Into<String>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            action: action.into(),
            filename: filename.into(),
            workspace: workspace.into(),
            editor: editor.into(),
            language: String::new(),
            git: None,
            started_at,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_git(mut self, git: GitContext) -> Self {
        self.git = Some(git);
        self
    }
}

/// Editor went idle or is closing; presence is reset to an idle status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdleEvent {
    pub action: String,
    pub filename: String,
    pub workspace: String,
    pub editor: String,
    #[serde(default)]
    pub git: Option<GitContext>,
}

impl IdleEvent {
    pub fn new(
        action: impl Into<String>,
        filename: impl Into<String>,
        workspace: impl Into<String>,
        editor: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            filename: filename.into(),
            workspace: workspace.into(),
            editor: editor.into(),
            git: None,
        }
    }

    pub fn with_git(mut self, git: GitContext) -> Self {
        self.git = Some(git);
        self
    }
}

impl From<&EditorEvent> for IdleEvent {
    fn from(event: &EditorEvent) -> Self {
        Self {
            action: event.action.clone(),
            filename: event.filename.clone(),
            workspace: event.workspace.clone(),
            editor: event.editor.clone(),
            git: event.git.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_event_deserialize_minimal() {
        let json = r#"{
            "action": "Editing",
            "filename": "main.rs",
            "workspace": "presence",
            "editor": "helix",
            "startedAt": "2024-05-01T10:00:00Z"
        }"#;
        let event: EditorEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.filename, "main.rs");
        assert!(event.language.is_empty());
        assert!(event.git.is_none());
    }

    #[test]
    fn test_git_context_has_remote() {
        let linked = GitContext::new("https://github.com/a/b", "main");
        assert!(linked.has_remote());
        assert!(!GitContext::new("", "main").has_remote());
    }

    #[test]
    fn test_idle_event_from_editor_event() {
        let event = EditorEvent::new("Editing", "lib.rs", "presence", "neovim", Utc::now())
            .with_language("rust")
            .with_git(GitContext::new("https://github.com/a/b", "dev"));

        let idle = IdleEvent::from(&event);
        assert_eq!(idle.editor, "neovim");
        assert_eq!(idle.git.as_ref().map(|g| g.branch.as_str()), Some("dev"));
    }
}
