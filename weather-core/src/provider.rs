use crate::{error::FetchError, model::UpstreamReply};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Anything that can answer "what is the weather in `city` right now".
#[async_trait]
pub trait CurrentWeatherSource: Send + Sync + Debug {
    /// Issue exactly one upstream request. No retries.
    async fn current_weather(&self, city: &str) -> Result<UpstreamReply, FetchError>;
}
