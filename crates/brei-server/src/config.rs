use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration using `lookup` to read variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = lookup("BREI_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|_| {
                ConfigError::Invalid("BREI_LISTEN_ADDR", "must be a valid socket address")
            })?;

        let db_path = lookup("BREI_DB_PATH").unwrap_or_else(|| "./brei.redb".to_string());
        if db_path.trim().is_empty() {
            return Err(ConfigError::Invalid("BREI_DB_PATH", "must not be empty"));
        }

        let static_dir =
            lookup("BREI_STATIC_DIR").unwrap_or_else(|| "crates/brei-server/static".to_string());

        Ok(Config {
            listen_addr,
            db_path: db_path.into(),
            static_dir: static_dir.into(),
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str, &'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid(var, msg) => write!(f, "Invalid value for {}: {}", var, msg),
        }
    }
}

impl std::error::Error for ConfigError {}
