use crate::clock::{Clock, SystemClock};
use crate::overlay::{apply_overlays, Slot};
use crate::resolved::{event_context, idle_context, ResolvedActivity};
use crate::{DEFAULT_ICON_URL, NEOVIM_EDITOR, NEOVIM_ICON_URL, REPOSITORY_BUTTON_LABEL};
use presence_image::{HttpProbe, ImageProbe, ImageResolver};
use presence_types::{ActivityTemplate, Button, EditorEvent, GitContext, IdleEvent, PresencePayload};
use std::sync::Arc;

/// Builds presence payloads from templates and editor events.
pub struct Composer<P = HttpProbe> {
    images: ImageResolver<P>,
    clock: Arc<dyn Clock>,
}

impl<P: ImageProbe> Composer<P> {
    pub fn new(images: ImageResolver<P>) -> Self {
        Self {
            images,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock used for idle timestamps.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Compose the presence for an active editor event.
    pub async fn compose(
        &self,
        template: &ActivityTemplate,
        event: &EditorEvent,
    ) -> PresencePayload {
        let resolved = ResolvedActivity::resolve(template, &event_context(event));

        let editor = Slot::new(
            self.large_icon(&resolved.large_image, &event.editor).await,
            resolved.large_text,
        );

        // No language, no language icon. Skipping the probe here is
        // equivalent to resolving and then clearing.
        let language = if event.language.is_empty() {
            Slot::default()
        } else {
            Slot::new(
                self.images
                    .resolve(&resolved.small_image, DEFAULT_ICON_URL)
                    .await,
                resolved.small_text,
            )
        };

        let (large, small) =
            apply_overlays(template.large_use, template.small_use, editor, language);

        let mut payload = PresencePayload {
            state: resolved.state,
            details: resolved.details,
            large_image: large.image,
            large_text: large.text,
            small_image: small.image,
            small_text: small.text,
            start_timestamp: template.include_timestamp.then_some(event.started_at),
            buttons: Vec::new(),
        };
        attach_repository(&mut payload, event.git.as_ref());

        tracing::debug!(
            state = %payload.state,
            details = %payload.details,
            large_image = %payload.large_image,
            small_image = %payload.small_image,
            "composed activity"
        );
        payload
    }

    /// Compose the idle presence shown when the editor closes or goes quiet.
    ///
    /// No language slot and no overlays; the timestamp is always "now".
    pub async fn compose_clear(
        &self,
        template: &ActivityTemplate,
        event: &IdleEvent,
    ) -> PresencePayload {
        let resolved = ResolvedActivity::resolve(template, &idle_context(event));

        let mut payload = PresencePayload {
            state: resolved.state,
            details: resolved.details,
            large_image: self.large_icon(&resolved.large_image, &event.editor).await,
            large_text: resolved.large_text,
            start_timestamp: Some(self.clock.now()),
            ..Default::default()
        };
        attach_repository(&mut payload, event.git.as_ref());

        tracing::debug!(
            state = %payload.state,
            details = %payload.details,
            "composed idle activity"
        );
        payload
    }

    async fn large_icon(&self, candidate: &str, editor: &str) -> String {
        if editor == NEOVIM_EDITOR {
            return NEOVIM_ICON_URL.to_string();
        }
        self.images.resolve(candidate, DEFAULT_ICON_URL).await
    }
}

/// Link the git remote and annotate details with the branch.
fn attach_repository(payload: &mut PresencePayload, git: Option<&GitContext>) {
    let Some(git) = git.filter(|g| g.has_remote()) else {
        return;
    };

    let button = Button::new(REPOSITORY_BUTTON_LABEL, git.remote_url.as_str());
    payload.buttons = vec![button];
    payload.details.push_str(&format!(" ({})", git.branch));
}
