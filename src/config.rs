use std::env;
use std::time::Duration;

const DEFAULT_GATEWAY_TIMEOUT_MS: u64 = 5000;

/// Workflow configuration. The administrator address receives the
/// "awaiting decision" notice for every new submission.
#[derive(Debug, Clone)]
pub struct Config {
    pub admin_email: String,
    /// Upper bound on any single repository or notifier call.
    pub gateway_timeout: Duration,
}

impl Config {
    pub fn new(admin_email: impl Into<String>) -> Self {
        Self {
            admin_email: admin_email.into(),
            gateway_timeout: Duration::from_millis(DEFAULT_GATEWAY_TIMEOUT_MS),
        }
    }

    /// Reads `SALA_ADMIN_EMAIL` (required) and `SALA_GATEWAY_TIMEOUT_MS`
    /// (optional, milliseconds).
    pub fn from_env() -> Result<Self, ConfigError> {
        let admin_email = env::var("SALA_ADMIN_EMAIL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("SALA_ADMIN_EMAIL"))?;
        let gateway_timeout = env::var("SALA_GATEWAY_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(DEFAULT_GATEWAY_TIMEOUT_MS));
        Ok(Self {
            admin_email,
            gateway_timeout,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(var) => write!(f, "missing environment variable: {var}"),
        }
    }
}

impl std::error::Error for ConfigError {}
