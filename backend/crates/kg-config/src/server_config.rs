use crate::error::ensure_in_range;
use crate::{
    ConfigError, ConfigErrorResult, ConfigSection, DEFAULT_HOST, DEFAULT_MAX_CONNECTIONS,
    DEFAULT_PORT, MAX_MAX_CONNECTIONS, MIN_MAX_CONNECTIONS, MIN_PORT,
};

use serde::Deserialize;

/// HTTP listener and the database pool that backs it
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    /// 0 lets the OS pick
    pub port: u16,
    /// Database pool size
    pub max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::invalid(
                ConfigSection::Server,
                "server.host cannot be empty",
            ));
        }

        if self.port != 0 {
            ensure_in_range(ConfigSection::Server, "port", self.port, MIN_PORT..=u16::MAX)?;
        }

        ensure_in_range(
            ConfigSection::Server,
            "max_connections",
            self.max_connections,
            MIN_MAX_CONNECTIONS..=MAX_MAX_CONNECTIONS,
        )
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
