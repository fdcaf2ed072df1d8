//! Binary crate for the weather proxy Lambda function.
//!
//! This crate focuses on:
//! - Cold-start setup (logging, config, HTTP client)
//! - Adapting API Gateway events to `weather_core::handle_request`

use lambda_http::{Error, Request, run, service_fn};
use tracing_subscriber::EnvFilter;
use weather_core::{Config, OpenWeatherProvider};

mod handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // CloudWatch adds the ingestion time.
        .without_time()
        .with_target(false)
        .init();

    let config = Config::from_env()?;
    if !config.has_api_key() {
        tracing::warn!("API_KEY is not set; OpenWeather will reject requests");
    }

    let provider = OpenWeatherProvider::from_config(&config)?;
    let provider = &provider;

    run(service_fn(move |event: Request| async move { handler::function_handler(provider, event).await })).await
}
