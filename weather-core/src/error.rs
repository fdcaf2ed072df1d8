use std::error::Error as _;
use thiserror::Error;

/// Failure to obtain a decoded reply from the upstream provider.
///
/// Upstream error statuses are not failures here: they come back as an
/// [`UpstreamReply`](crate::UpstreamReply) and are passed through.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body read failure.
    #[error("{}", with_causes(.0))]
    Transport(#[from] reqwest::Error),

    /// The provider answered with something that is not JSON.
    #[error("failed to parse OpenWeather response JSON: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        /// Raw body, truncated for logging.
        body: String,
    },
}

impl FetchError {
    pub fn decode(source: serde_json::Error, raw: &str) -> Self {
        Self::Decode { source, body: truncate_body(raw) }
    }
}

/// `reqwest` keeps the useful part ("connection refused") in the source chain.
fn with_causes(err: &reqwest::Error) -> String {
    let mut msg = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        msg.push_str(": ");
        msg.push_str(&inner.to_string());
        cause = inner.source();
    }
    msg
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
