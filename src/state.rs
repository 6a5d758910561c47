use crate::{
    config::Settings,
    database::{
        RecordStore, connection, console_store::ConsoleStore, pg_store::PgStore,
        rest_store::RestStore,
    },
    services::email::EmailService,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub submission_timeout: Duration,
    pub mailer: Option<Arc<EmailService>>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>, submission_timeout: Duration) -> Self {
        Self {
            store,
            submission_timeout,
            mailer: None,
        }
    }

    pub fn with_mailer(mut self, mailer: Option<Arc<EmailService>>) -> Self {
        self.mailer = mailer;
        self
    }

    pub async fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let store = build_store(settings).await?;
        info!("Using {} record store", store.name());

        let mailer = EmailService::from_settings(&settings.smtp)?.map(Arc::new);
        if mailer.is_none() {
            warn!("SMTP not configured, acknowledgement emails disabled");
        }

        Ok(Self::new(store, settings.submission_timeout()).with_mailer(mailer))
    }
}

/// Postgres when `DATABASE_URL` is set, the hosted store when both its URL
/// and key are set, otherwise records are only logged.
pub async fn build_store(settings: &Settings) -> anyhow::Result<Arc<dyn RecordStore>> {
    let store = &settings.store;

    if let Some(database_url) = store.database_url() {
        let pool = connection::create_pool(database_url, store.max_connections).await?;
        return Ok(Arc::new(PgStore::new(pool)));
    }

    match (store.url(), store.api_key()) {
        (Some(url), Some(key)) => Ok(Arc::new(RestStore::new(url, key))),
        (Some(_), None) | (None, Some(_)) => {
            warn!("Record store needs both PROJECT_URL and API_KEY; logging records instead");
            Ok(Arc::new(ConsoleStore))
        }
        (None, None) => Ok(Arc::new(ConsoleStore)),
    }
}
