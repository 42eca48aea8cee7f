//! Template resolution against an event's placeholder context.

use presence_template::{substitute, Placeholder, PlaceholderContext};
use presence_types::{ActivityTemplate, EditorEvent, IdleEvent};

/// Activity strings after placeholder substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedActivity {
    pub state: String,
    pub details: String,
    pub large_image: String,
    pub large_text: String,
    pub small_image: String,
    pub small_text: String,
}

impl ResolvedActivity {
    /// Substitute `context` into every text field of `template`.
    pub fn resolve(template: &ActivityTemplate, context: &PlaceholderContext) -> Self {
        Self {
            state: substitute(&template.state, context),
            details: substitute(&template.details, context),
            large_image: substitute(&template.large_image, context),
            large_text: substitute(&template.large_text, context),
            small_image: substitute(&template.small_image, context),
            small_text: substitute(&template.small_text, context),
        }
    }
}

pub(crate) fn event_context(event: &EditorEvent) -> PlaceholderContext {
    PlaceholderContext::new()
        .with(Placeholder::Action, event.action.as_str())
        .with(Placeholder::Filename, event.filename.as_str())
        .with(Placeholder::Workspace, event.workspace.as_str())
        .with(Placeholder::Editor, event.editor.as_str())
        .with(Placeholder::Language, event.language.as_str())
}

/// Idle events carry no language; `{language}` resolves to nothing.
pub(crate) fn idle_context(event: &IdleEvent) -> PlaceholderContext {
    PlaceholderContext::new()
        .with(Placeholder::Action, event.action.as_str())
        .with(Placeholder::Filename, event.filename.as_str())
        .with(Placeholder::Workspace, event.workspace.as_str())
        .with(Placeholder::Editor, event.editor.as_str())
        .with(Placeholder::Language, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_resolve_every_field() {
        let template = ActivityTemplate {
            state: "{action} {filename}".into(),
            details: "In {workspace}".into(),
            large_image: "https://icons/{editor}.png".into(),
            large_text: "{editor}".into(),
            small_image: "https://icons/{language}.png".into(),
            small_text: "Coding in {language}".into(),
            ..Default::default()
        };
        let event = EditorEvent::new("Editing", "main.go", "api", "helix", Utc::now())
            .with_language("go");

        let resolved = ResolvedActivity::resolve(&template, &event_context(&event));
        assert_eq!(resolved.state, "Editing main.go");
        assert_eq!(resolved.details, "In api");
        assert_eq!(resolved.large_image, "https://icons/helix.png");
        assert_eq!(resolved.large_text, "helix");
        assert_eq!(resolved.small_image, "https://icons/go.png");
        assert_eq!(resolved.small_text, "Coding in go");
    }

    #[test]
    fn test_idle_context_blanks_language() {
        let event = IdleEvent::new("Idle", "", "api", "helix");
        let ctx = idle_context(&event);
        assert_eq!(ctx.get("{language}"), Some(""));
        assert_eq!(ctx.get("{editor}"), Some("helix"));
    }
}
