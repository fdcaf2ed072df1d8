//! Core library for the weather proxy function.
//!
//! This crate defines:
//! - Configuration read from the environment at cold start
//! - The upstream weather source abstraction and its OpenWeather client
//! - The response record and the request-handling policy
//!
//! It is used by `weather-lambda`, but has no dependency on the Lambda runtime.

pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::FetchError;
pub use handler::handle_request;
pub use model::{ProxyResponse, UpstreamReply};
pub use provider::{CurrentWeatherSource, openweather::OpenWeatherProvider};
