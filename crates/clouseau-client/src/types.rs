use reqwest::header::HeaderMap;
use reqwest::Method;
use serde_json::Value;

/// Path prefix under which the backend mounts its routers.
pub const API_BASE_PATH: &str = "/api";

/// Per-request overrides merged into the defaults of `fetch_api`.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    /// Merged over `Content-Type: application/json`; these win on conflict.
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

/// REST paths of the session API, relative to [`API_BASE_PATH`].
///
/// Ids are percent-encoded, so an id can never address anything but its own
/// path segment.
pub mod endpoints {
    use urlencoding::encode;

    pub fn sessions() -> String {
        "/sessions".to_string()
    }

    pub fn session(id: &str) -> String {
        format!("/sessions/{}", encode(id))
    }

    pub fn conversations_by_session(session_id: &str) -> String {
        format!("/conversations/by-session/{}", encode(session_id))
    }

    pub fn conversation(id: &str) -> String {
        format!("/conversations/{}", encode(id))
    }

    pub fn exchanges_by_conversation(conversation_id: &str) -> String {
        format!("/exchanges/by-conversation/{}", encode(conversation_id))
    }

    pub fn exchange(id: &str) -> String {
        format!("/exchanges/{}", encode(id))
    }
}
