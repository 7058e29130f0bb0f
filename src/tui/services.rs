use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::core::catalog::{CatalogClient, CatalogSource, Effect};

use super::events::AppEvent;

/// Centralized handle to backend services.
///
/// Created once at startup. Owns the catalog source and the sender half of
/// the event channel so effects can report back into the loop.
pub struct Services {
    pub catalog: Arc<dyn CatalogSource>,
    pub event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl Services {
    /// Initialize services from config.
    pub fn init(
        config: &AppConfig,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let client = CatalogClient::from_config(&config.api)?;
        log::info!("Catalog client initialized for {}", client.base_url());

        Ok(Self::with_source(Arc::new(client), event_tx))
    }

    pub fn with_source(
        catalog: Arc<dyn CatalogSource>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self { catalog, event_tx }
    }

    /// Run `effect` on the runtime and post its outcome as an event.
    ///
    /// Superseded work is not cancelled; the reducer drops stale results.
    pub fn spawn_effect(&self, effect: Effect) {
        let catalog = self.catalog.clone();
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            log::debug!("Running effect {effect:?}");
            let msg = effect.execute(catalog.as_ref()).await;
            let _ = tx.send(AppEvent::Catalog(msg));
        });
    }
}
