use ::config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Origin of the public site allowed to call the API.
    pub allowed_origin: Option<String>,
}

/// Where form records are appended.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreSettings {
    /// Hosted record store base URL (`PROJECT_URL`).
    pub url: Option<String>,
    /// Hosted record store access key (`API_KEY`).
    pub api_key: Option<String>,
    /// Direct Postgres connection (`DATABASE_URL`), preferred when present.
    pub database_url: Option<String>,
    pub max_connections: u32,
}

impl StoreSettings {
    pub fn database_url(&self) -> Option<&str> {
        configured(&self.database_url)
    }

    pub fn url(&self) -> Option<&str> {
        configured(&self.url)
    }

    pub fn api_key(&self) -> Option<&str> {
        configured(&self.api_key)
    }
}

/// Blank values (`API_KEY=` in a `.env`) count as unset.
pub fn configured(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionSettings {
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SmtpSettings {
    pub server: Option<String>,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from_email: Option<String>,
    pub from_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub store: StoreSettings,
    pub submission: SubmissionSettings,
    #[serde(default)]
    pub smtp: SmtpSettings,
}

impl Settings {
    /// Layers built-in defaults, `config/default.toml`, `config/local.toml`,
    /// `HOPE__*` variables and finally the bare variables the hosted site
    /// has always used (`PROJECT_URL`, `API_KEY`, `DATABASE_URL`, `SMTP_*`).
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("HOPE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("server.port", env::var("PORT").ok())?
            .set_override_option("store.url", env::var("PROJECT_URL").ok())?
            .set_override_option("store.api_key", env::var("API_KEY").ok())?
            .set_override_option("store.database_url", env::var("DATABASE_URL").ok())?
            .set_override_option("smtp.server", env::var("SMTP_SERVER").ok())?
            .set_override_option("smtp.port", env::var("SMTP_PORT").ok())?
            .set_override_option("smtp.username", env::var("SMTP_USERNAME").ok())?
            .set_override_option("smtp.password", env::var("SMTP_PASSWORD").ok())?
            .set_override_option("smtp.from_email", env::var("FROM_EMAIL").ok())?
            .set_override_option("smtp.from_name", env::var("FROM_NAME").ok())?;

        builder.build()?.try_deserialize()
    }

    /// Settings from defaults alone; used by tests and as the base layer.
    pub fn defaults() -> Result<::config::ConfigBuilder<::config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("store.max_connections", 5)?
            .set_default("submission.timeout_secs", 15)?
            .set_default("smtp.port", 587)?
            .set_default("smtp.from_name", "Hope Foundation")
    }

    pub fn submission_timeout(&self) -> Duration {
        Duration::from_secs(self.submission.timeout_secs)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}
