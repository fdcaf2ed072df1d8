use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::{config::Config, error::FetchError, model::UpstreamReply};

use super::CurrentWeatherSource;

/// OpenWeather current-weather client. Cheap to clone; the pooled
/// `reqwest::Client` is shared between clones.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl OpenWeatherProvider {
    /// Build the provider once at cold start, applying the optional timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client for OpenWeather")?;

        Ok(Self { api_key: config.api_key.clone(), endpoint: config.endpoint.clone(), http })
    }
}

#[async_trait]
impl CurrentWeatherSource for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<UpstreamReply, FetchError> {
        // `without_url` keeps the credential in `appid` out of error text.
        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.without_url()))?;

        let status = res.status().as_u16();
        let body = res.text().await.map_err(|e| FetchError::Transport(e.without_url()))?;

        let body: Value = serde_json::from_str(&body).map_err(|e| FetchError::decode(e, &body))?;

        Ok(UpstreamReply { status, body })
    }
}
