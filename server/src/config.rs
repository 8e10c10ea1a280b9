//! Dashboard configuration parsed from environment variables.

use research::bots::{BotRouting, RoutingError};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is not set (or is blank).
    #[error("missing required env var {var}")]
    Missing { var: &'static str },

    /// A variable is set but cannot be parsed.
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },

    /// `BOT_ROUTES` contains a bad entry.
    #[error("invalid BOT_ROUTES: {0}")]
    Routing(#[from] RoutingError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Primary application API base, without trailing `/`.
    pub api_url: String,
    /// Secondary bot service base, without trailing `/`.
    pub bot_service_url: String,
    pub port: u16,
    pub routing: BotRouting,
    pub connect_timeout_secs: u64,
}

impl DashboardConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `API_URL`
    /// - `BOT_SERVICE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BOT_ROUTES`: `name=route` entries separated by `;`
    /// - `UPSTREAM_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error when a required variable is missing or any value fails
    /// to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`DashboardConfig::from_env`] with an injected variable source.
    ///
    /// # Errors
    ///
    /// See [`DashboardConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = required_url(&lookup, "API_URL")?;
        let bot_service_url = required_url(&lookup, "BOT_SERVICE_URL")?;
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let connect_timeout_secs = parse_or(&lookup, "UPSTREAM_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?;
        let routing = match lookup("BOT_ROUTES") {
            Some(raw) => BotRouting::with_overrides(&raw)?,
            None => BotRouting::default(),
        };
        Ok(Self { api_url, bot_service_url, port, routing, connect_timeout_secs })
    }
}

fn required_url(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<String, ConfigError> {
    let raw = lookup(var).ok_or(ConfigError::Missing { var })?;
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Missing { var });
    }
    Ok(trimmed.to_owned())
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
