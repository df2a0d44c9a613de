//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Backend service configuration.
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Backend service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL the summary endpoint paths are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// The plain `BACKEND_URL` variable is recognized as an override for
    /// `backend.base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PANO").separator("__"));

        if let Ok(url) = std::env::var("BACKEND_URL") {
            builder = builder.set_override("backend.base_url", url)?;
        }

        builder.build()?.try_deserialize()
    }
}
