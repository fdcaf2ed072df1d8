use anyhow::{Context, Result, anyhow};
use std::time::Duration;

/// Current-weather endpoint used when `OPENWEATHER_URL` is not set.
pub const DEFAULT_OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

pub const API_KEY_VAR: &str = "API_KEY";
pub const OPENWEATHER_URL_VAR: &str = "OPENWEATHER_URL";
pub const TIMEOUT_VAR: &str = "UPSTREAM_TIMEOUT_SECS";

/// Settings read once at cold start and shared, read-only, by every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// OpenWeather credential. May be empty; it is still sent as-is.
    pub api_key: String,

    pub endpoint: String,

    /// Optional per-request timeout. `None` means no explicit timeout.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: DEFAULT_OPENWEATHER_URL.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    /// Load config from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).unwrap_or_default();

        let endpoint = lookup(OPENWEATHER_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OPENWEATHER_URL.to_string());

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) if !raw.trim().is_empty() => Some(parse_timeout(&raw)?),
            _ => None,
        };

        Ok(Self { api_key, endpoint, timeout })
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("Invalid {TIMEOUT_VAR} value '{raw}'"))?;

    if secs == 0 {
        return Err(anyhow!("{TIMEOUT_VAR} must be greater than zero; unset it to disable the timeout"));
    }

    Ok(Duration::from_secs(secs))
}
