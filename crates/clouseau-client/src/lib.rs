//! Client for the Clouseau session API.
//!
//! The viewer and the CLI talk to the backend through the [`ClouseauApi`] trait
//! rather than through `reqwest` directly, which keeps the transport swappable
//! and lets tests stand in a mock. [`http_client::HttpApiClient`] is the real
//! implementation; its `fetch_api` is the single place where HTTP statuses are
//! turned into typed [`ApiError`]s.

use anyhow::Result;
use async_trait::async_trait;
use clouseau_types::{Conversation, Exchange, Session};

pub mod error;
pub mod http_client;
pub mod types;

pub use error::*;
pub use types::*;

/// Read access to sessions, conversations and exchanges.
///
/// List calls return the first page only, in server order.
#[async_trait]
pub trait ClouseauApi: Send + Sync {
    async fn list_sessions(&self) -> Result<Vec<Session>>;

    async fn get_session(&self, id: &str) -> Result<Session>;

    async fn list_conversations(&self, session_id: &str) -> Result<Vec<Conversation>>;

    async fn get_conversation(&self, id: &str) -> Result<Conversation>;

    async fn list_exchanges(&self, conversation_id: &str) -> Result<Vec<Exchange>>;

    async fn get_exchange(&self, id: &str) -> Result<Exchange>;

    /// Permanently removes a session and everything under it.
    async fn delete_session(&self, id: &str) -> Result<()>;

    /// Check if the backend is reachable
    async fn health_check(&self) -> Result<()>;
}

pub type ApiClientBox = Box<dyn ClouseauApi>;

/// Factory for creating ClouseauApi instances
pub struct ApiClientFactory;

impl ApiClientFactory {
    /// Create an HTTP client for a backend rooted at `base_url`
    pub fn create_http_client(base_url: String) -> ApiClientBox {
        Box::new(http_client::HttpApiClient::new(base_url))
    }
}
