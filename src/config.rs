use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

/// Runtime configuration resolved from the environment.
///
/// Defaults: port 3000 on all interfaces, `security.log` and static
/// files in the working directory.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub audit_log_path: PathBuf,
    pub static_dir: PathBuf,
}

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_AUDIT_LOG_PATH: &str = "security.log";
const DEFAULT_STATIC_DIR: &str = ".";

impl AppConfig {
    /// Resolve configuration from environment variables, falling back to
    /// the defaults for anything unset
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(raw) => parse_bind_addr(&raw)?,
            Err(_) => parse_bind_addr(DEFAULT_BIND_ADDR)?,
        };

        let audit_log_path = std::env::var("AUDIT_LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_AUDIT_LOG_PATH));

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR));

        let config = Self {
            bind_addr,
            audit_log_path,
            static_dir,
        };

        info!(
            "Configuration resolved: bind={} audit_log={} static_dir={}",
            config.bind_addr,
            config.audit_log_path.display(),
            config.static_dir.display()
        );

        Ok(config)
    }
}

fn parse_bind_addr(raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::InvalidBindAddr(raw.to_string()))
}

/// Configuration errors
#[derive(Debug, Clone)]
pub enum ConfigError {
    InvalidBindAddr(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidBindAddr(raw) => {
                write!(f, "Invalid bind address '{}'", raw)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
