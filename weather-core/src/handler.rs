use tracing::{error, info, warn};

use crate::{model::ProxyResponse, provider::CurrentWeatherSource};

/// Turn one `city` lookup into exactly one response record.
///
/// Never fails: every outcome, including transport errors, is mapped to a
/// status code and a JSON body carrying the CORS header.
pub async fn handle_request<S>(source: &S, city: Option<&str>) -> ProxyResponse
where
    S: CurrentWeatherSource + ?Sized,
{
    let Some(city) = city.filter(|c| !c.is_empty()) else {
        warn!("Missing 'city' query parameter");
        return ProxyResponse::missing_city();
    };

    info!(city, "Fetching weather data");

    match source.current_weather(city).await {
        Err(err) => {
            error!(city, error = %err, "Error fetching data");
            ProxyResponse::fetch_failed(&err)
        }
        Ok(reply) if !reply.is_ok() => {
            warn!(city, status = reply.status, "OpenWeather API error");
            ProxyResponse::upstream_error(&reply)
        }
        Ok(reply) => {
            info!(city, name = reply.location_name().unwrap_or("<unnamed>"), "Fetched weather data");
            ProxyResponse::success(&reply)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::FetchError,
        model::{CONTENT_TYPE_HEADER, CORS_ORIGIN_HEADER, UpstreamReply},
    };
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::Mutex;

    /// Canned source that records which cities it was asked for.
    #[derive(Debug)]
    struct Canned {
        outcome: fn() -> Result<UpstreamReply, FetchError>,
        asked: Mutex<Vec<String>>,
    }

    impl Canned {
        fn new(outcome: fn() -> Result<UpstreamReply, FetchError>) -> Self {
            Self { outcome, asked: Mutex::new(Vec::new()) }
        }

        fn asked(&self) -> Vec<String> {
            self.asked.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CurrentWeatherSource for Canned {
        async fn current_weather(&self, city: &str) -> Result<UpstreamReply, FetchError> {
            self.asked.lock().unwrap().push(city.to_string());
            (self.outcome)()
        }
    }

    fn london() -> Result<UpstreamReply, FetchError> {
        Ok(UpstreamReply { status: 200, body: json!({ "name": "London", "main": { "temp": 15.0 } }) })
    }

    fn not_found() -> Result<UpstreamReply, FetchError> {
        Ok(UpstreamReply { status: 404, body: json!({ "cod": "404", "message": "city not found" }) })
    }

    fn garbage() -> Result<UpstreamReply, FetchError> {
        let source = serde_json::from_str::<Value>("<html>").unwrap_err();
        Err(FetchError::decode(source, "<html>"))
    }

    fn body(res: &ProxyResponse) -> Value {
        serde_json::from_str(&res.body).expect("body must be JSON")
    }

    #[tokio::test]
    async fn missing_or_empty_city_is_bad_request() {
        let source = Canned::new(london);

        for city in [None, Some("")] {
            let res = handle_request(&source, city).await;

            assert_eq!(res.status_code, 400);
            assert_eq!(res.header(CORS_ORIGIN_HEADER), Some("*"));
            assert_eq!(body(&res), json!({ "message": "Missing 'city' query parameter." }));
        }

        assert!(source.asked().is_empty(), "no upstream call without a city");
    }

    #[tokio::test]
    async fn success_relays_body_with_content_type() {
        let source = Canned::new(london);

        let res = handle_request(&source, Some("London")).await;

        assert_eq!(res.status_code, 200);
        assert_eq!(res.header(CORS_ORIGIN_HEADER), Some("*"));
        assert_eq!(res.header(CONTENT_TYPE_HEADER), Some("application/json"));
        assert_eq!(res.body, r#"{"name":"London","main":{"temp":15.0}}"#);
        assert_eq!(source.asked(), vec!["London".to_string()]);
    }

    #[tokio::test]
    async fn success_without_name_is_still_success() {
        fn unnamed() -> Result<UpstreamReply, FetchError> {
            Ok(UpstreamReply { status: 200, body: json!({ "main": { "temp": 1.5 } }) })
        }
        let res = handle_request(&Canned::new(unnamed), Some("Nowhere")).await;

        assert_eq!(res.status_code, 200);
        assert_eq!(body(&res), json!({ "main": { "temp": 1.5 } }));
    }

    #[tokio::test]
    async fn upstream_error_is_passed_through() {
        let res = handle_request(&Canned::new(not_found), Some("Atlantis")).await;

        assert_eq!(res.status_code, 404);
        assert_eq!(res.header(CORS_ORIGIN_HEADER), Some("*"));
        assert_eq!(res.header(CONTENT_TYPE_HEADER), None);
        assert_eq!(body(&res), json!({ "cod": "404", "message": "city not found" }));
    }

    #[tokio::test]
    async fn fetch_failure_is_internal_error() {
        let res = handle_request(&Canned::new(garbage), Some("London")).await;

        assert_eq!(res.status_code, 500);
        assert_eq!(res.header(CORS_ORIGIN_HEADER), Some("*"));

        let msg = body(&res);
        let msg = msg.as_str().expect("500 body is a JSON string");
        assert!(msg.starts_with("Error fetching data: failed to parse OpenWeather response JSON"));
    }

    #[tokio::test]
    async fn repeated_requests_give_identical_responses() {
        let source = Canned::new(london);

        let first = handle_request(&source, Some("London")).await;
        let second = handle_request(&source, Some("London")).await;

        assert_eq!(first, second);
        assert_eq!(source.asked().len(), 2);
    }
}
