// Configuration module entry point
// Loads the immutable server configuration and the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use types::{Config, SiteConfig};

/// Default config file, looked up in the working directory (extension optional)
pub const DEFAULT_CONFIG_FILE: &str = "devserver";

impl Config {
    /// Load configuration from the default file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from specified file path (extension optional)
    ///
    /// The file is optional; without it every value keeps its built-in default.
    /// `DEVSERVER_SERVER__PORT=9000` style variables override both.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let site = SiteConfig::default();
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("DEVSERVER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("site.mount_prefix", site.mount_prefix)?
            .set_default("site.root_dir", site.root_dir)?
            .set_default("site.index_file", site.index_file)?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
