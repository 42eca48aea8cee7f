use crate::error::ServiceError;
use presence_composer::{Clock, Composer};
use presence_config::PresenceConfig;
use presence_image::{HttpProbe, ImageProbe, ImageResolver};
use presence_publisher::{DebouncedPublisher, PublishTicket};
use presence_types::{EditorEvent, IdleEvent, PresenceClientRef};
use std::sync::Arc;

/// Shared probe handle so tests can swap the network out.
type ProbeRef = Arc<dyn ImageProbe>;

/// Drives one presence stream for the whole process.
pub struct PresenceService {
    config: PresenceConfig,
    client: PresenceClientRef,
    composer: Composer<ProbeRef>,
    publisher: DebouncedPublisher,
}

impl PresenceService {
    /// Build the service with an HTTP icon probe.
    ///
    /// Must be called inside a tokio runtime (the publisher spawns a task).
    pub fn new(config: PresenceConfig, client: PresenceClientRef) -> Self {
        let probe: ProbeRef = Arc::new(HttpProbe::with_timeout(config.image_timeout()));
        Self::with_probe(config, client, probe)
    }

    /// Build the service with a custom icon probe.
    pub fn with_probe(config: PresenceConfig, client: PresenceClientRef, probe: ProbeRef) -> Self {
        let images = ImageResolver::new(probe).with_cache_ttl(config.image_cache_ttl());
        let composer = Composer::new(images);
        let publisher = DebouncedPublisher::new(Arc::clone(&client), config.debounce_window());

        tracing::debug!(
            debounce = ?config.debounce_window(),
            image_timeout = ?config.image_timeout(),
            "Presence service created"
        );

        Self {
            config,
            client,
            composer,
            publisher,
        }
    }

    /// Replace the clock used for idle timestamps.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.composer = self.composer.with_clock(clock);
        self
    }

    pub fn config(&self) -> &PresenceConfig {
        &self.config
    }

    /// Log in to the presence service.
    pub async fn start(&self) -> Result<(), ServiceError> {
        let application_id = self.config.application_id.trim();
        if application_id.is_empty() {
            return Err(ServiceError::MissingApplicationId);
        }

        self.client
            .login(application_id)
            .await
            .map_err(ServiceError::Login)?;

        tracing::info!(%application_id, "Logged in to presence service");
        Ok(())
    }

    /// Compose the presence for `event` and schedule it.
    pub async fn update_activity(&self, event: &EditorEvent) -> PublishTicket {
        let payload = self.composer.compose(&self.config.activity, event).await;
        self.publisher.publish(payload)
    }

    /// Compose the idle presence for `event` and schedule it.
    pub async fn clear_activity(&self, event: &IdleEvent) -> PublishTicket {
        let payload = self
            .composer
            .compose_clear(&self.config.activity, event)
            .await;
        self.publisher.publish_clear(payload)
    }

    /// Log out. Any update still waiting in the debounce window is abandoned
    /// once the service is dropped.
    pub async fn shutdown(&self) {
        self.client.logout().await;
        tracing::info!("Logged out of presence service");
    }
}
