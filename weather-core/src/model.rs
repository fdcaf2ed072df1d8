use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub const CORS_ORIGIN_HEADER: &str = "Access-Control-Allow-Origin";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const MISSING_CITY_MESSAGE: &str = "Missing 'city' query parameter.";
const MISSING_CITY_BODY: &str = r#"{"message": "Missing 'city' query parameter."}"#;

/// What the upstream provider answered: its status and the decoded JSON body.
///
/// The body is kept as an opaque tree and never mapped onto a schema.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Value,
}

impl UpstreamReply {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Resolved location name, if the provider included one.
    pub fn location_name(&self) -> Option<&str> {
        self.body.get("name").and_then(Value::as_str)
    }
}

/// Response record handed back to the hosting runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON-encoded payload.
    pub body: String,
}

impl ProxyResponse {
    fn with_cors(status_code: u16, body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CORS_ORIGIN_HEADER.to_string(), "*".to_string());

        Self { status_code, headers, body }
    }

    pub fn missing_city() -> Self {
        Self::with_cors(400, MISSING_CITY_BODY.to_string())
    }

    /// Pass the provider's error status and body through untouched.
    pub fn upstream_error(reply: &UpstreamReply) -> Self {
        Self::with_cors(reply.status, reply.body.to_string())
    }

    /// 500 whose body is a JSON string describing the failure.
    pub fn fetch_failed(error: &impl std::fmt::Display) -> Self {
        let message = format!("Error fetching data: {error}");
        Self::with_cors(500, Value::String(message).to_string())
    }

    pub fn success(reply: &UpstreamReply) -> Self {
        let mut response = Self::with_cors(200, reply.body.to_string());
        response
            .headers
            .insert(CONTENT_TYPE_HEADER.to_string(), "application/json".to_string());
        response
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
