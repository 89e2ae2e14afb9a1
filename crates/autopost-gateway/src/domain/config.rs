//! Gateway configuration.
//!
//! Credentials and paths come from the environment at startup and are passed
//! down as explicit dependencies; nothing reads the environment after boot.
//! A missing bot token or admin key is not fatal here; the affected routes
//! answer with the matching error envelope instead, so the page and the
//! read-only routes keep working.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Bind address.
    pub host: IpAddr,
    /// Port (default: 8787).
    pub port: u16,
    /// Bot API token; `None` disables broadcast and verification routes.
    pub bot_token: Option<String>,
    /// Admin credential for mutating routes; `None` disables them.
    pub admin_key: Option<String>,
    /// Path of the file-backed key-value store.
    pub store_path: PathBuf,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8787,
            bot_token: None,
            admin_key: None,
            store_path: PathBuf::from("data/autopost.json"),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from the environment.
    ///
    /// Recognized variables: `BIND_ADDR` (host:port), `TELEGRAM_BOT_TOKEN`,
    /// `ADMIN_KEY`, `STORE_PATH`. Empty credential values count as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(bind) = std::env::var("BIND_ADDR") {
            let addr: SocketAddr = bind
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr(bind.clone()))?;
            config.host = addr.ip();
            config.port = addr.port();
        }
        config.bot_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());
        config.admin_key = std::env::var("ADMIN_KEY").ok().filter(|k| !k.is_empty());
        if let Ok(path) = std::env::var("STORE_PATH") {
            config.store_path = PathBuf::from(path);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("store_path cannot be empty".into()));
        }
        Ok(())
    }

    /// Get the server bind address.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Configuration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// `BIND_ADDR` did not parse as host:port.
    #[error("invalid bind address: {0}")]
    InvalidBindAddr(String),
    /// General configuration error.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
