//! Wire records as returned by the session API.

use serde::{Deserialize, Serialize};

/// A session as serialized by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSession {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// A conversation as serialized by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConversation {
    pub id: i64,
    pub session_id: i64,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
}

/// An exchange (one user/assistant pair) as serialized by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiExchange {
    pub id: i64,
    pub conversation_id: i64,
    pub user_message: String,
    pub assistant_message: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub input_tokens: Option<u64>,
    #[serde(default)]
    pub output_tokens: Option<u64>,
    pub created_at: String,
}

/// Envelope of every list endpoint.
///
/// Only `items` is consumed; the client always reads the first page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiPaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}
