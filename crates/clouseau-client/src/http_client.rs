use anyhow::{bail, Result};
use async_trait::async_trait;
use clouseau_types::{
    transform_conversation, transform_exchange, transform_session, ApiConversation, ApiExchange,
    ApiPaginatedResponse, ApiSession, Conversation, Exchange, Session,
};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ClientError};
use crate::types::{endpoints, RequestOptions, API_BASE_PATH};
use crate::ClouseauApi;

/// HTTP client for a Clouseau backend.
///
/// Every call is a fresh round trip: no retries, no timeout and no caching.
pub struct HttpApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApiClient {
    /// `base_url` is the server root, e.g. `http://localhost:8000`.
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a request to `base_url + /api + path` and decodes the JSON body.
    pub async fn fetch_api<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> std::result::Result<T, ClientError> {
        let response = self.send_api(path, options).await?;
        Ok(response.json::<T>().await?)
    }

    /// Same as [`Self::fetch_api`] without decoding a body. Used for `204 No Content`.
    pub async fn send_api(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> std::result::Result<reqwest::Response, ClientError> {
        let url = format!("{}{}{}", self.base_url, API_BASE_PATH, path);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers);

        let mut request = self
            .client
            .request(options.method.clone(), &url)
            .headers(headers);
        if let Some(body) = &options.body {
            request = request.body(body.to_string());
        }

        tracing::debug!(method = %options.method, url = %url, "api request");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or_default();
            tracing::warn!(status = status.as_u16(), url = %url, "api request failed");
            return Err(ApiError::new(status.as_u16(), status_text).into());
        }

        Ok(response)
    }

    async fn fetch_items<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let page = self
            .fetch_api::<ApiPaginatedResponse<T>>(path, RequestOptions::default())
            .await
            .map_err(ClientError::into_anyhow)?;
        Ok(page.items)
    }
}

#[async_trait]
impl ClouseauApi for HttpApiClient {
    async fn list_sessions(&self) -> Result<Vec<Session>> {
        let items = self.fetch_items::<ApiSession>(&endpoints::sessions()).await?;
        Ok(items.into_iter().map(transform_session).collect())
    }

    async fn get_session(&self, id: &str) -> Result<Session> {
        let session = self
            .fetch_api::<ApiSession>(&endpoints::session(id), RequestOptions::default())
            .await
            .map_err(ClientError::into_anyhow)?;
        Ok(transform_session(session))
    }

    async fn list_conversations(&self, session_id: &str) -> Result<Vec<Conversation>> {
        let items = self
            .fetch_items::<ApiConversation>(&endpoints::conversations_by_session(session_id))
            .await?;
        Ok(items.into_iter().map(transform_conversation).collect())
    }

    async fn get_conversation(&self, id: &str) -> Result<Conversation> {
        let conversation = self
            .fetch_api::<ApiConversation>(&endpoints::conversation(id), RequestOptions::default())
            .await
            .map_err(ClientError::into_anyhow)?;
        Ok(transform_conversation(conversation))
    }

    async fn list_exchanges(&self, conversation_id: &str) -> Result<Vec<Exchange>> {
        let items = self
            .fetch_items::<ApiExchange>(&endpoints::exchanges_by_conversation(conversation_id))
            .await?;
        Ok(items.into_iter().map(transform_exchange).collect())
    }

    async fn get_exchange(&self, id: &str) -> Result<Exchange> {
        let exchange = self
            .fetch_api::<ApiExchange>(&endpoints::exchange(id), RequestOptions::default())
            .await
            .map_err(ClientError::into_anyhow)?;
        Ok(transform_exchange(exchange))
    }

    async fn delete_session(&self, id: &str) -> Result<()> {
        self.send_api(&endpoints::session(id), RequestOptions::new(Method::DELETE))
            .await
            .map_err(ClientError::into_anyhow)?;
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        let health_url = format!("{}/health", self.base_url);
        let response = self.client.get(&health_url).send().await?;

        if !response.status().is_success() {
            bail!("Health check failed: {}", response.status());
        }

        Ok(())
    }
}
