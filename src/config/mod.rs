// Configuration module entry point
// Loads settings from config.toml, environment variables and defaults

mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, ServerConfig, StorageConfig};

impl Config {
    /// Load configuration from "config.toml" (when present) and the
    /// `SERVER_*` environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("storage.root", "storage/app")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("http.max_body_size", 10_485_760)? // 10MB
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
