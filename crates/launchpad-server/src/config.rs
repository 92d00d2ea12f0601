//! Server configuration read from environment variables.
//!
//! - `LAUNCHPAD_HOST`: listen address (default: "0.0.0.0")
//! - `LAUNCHPAD_PORT`: listen port (default: "8080")
//! - `LAUNCHPAD_SEED`: load the demo launches at startup (default: "true")

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid LAUNCHPAD_PORT '{0}': expected a number between 0 and 65535")]
    InvalidPort(String),

    #[error("invalid LAUNCHPAD_SEED '{0}': expected true/false")]
    InvalidSeed(String),
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Whether the store starts with the demo launches.
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed: true,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(host) = lookup("LAUNCHPAD_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("LAUNCHPAD_PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(seed) = lookup("LAUNCHPAD_SEED") {
            config.seed = parse_bool(&seed).ok_or_else(|| ConfigError::InvalidSeed(seed.clone()))?;
        }

        Ok(config)
    }

    /// `host:port` suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
