//! Error types for the session API client.

use thiserror::Error;

/// A non-success HTTP response.
///
/// The message is the status text, matching what the server reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{status_text}")]
pub struct ApiError {
    pub status: u16,
    pub status_text: String,
}

impl ApiError {
    pub fn new(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
        }
    }
}

/// Errors returned by [`crate::http_client::HttpApiClient::fetch_api`].
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Connection, TLS or body decoding failure, passed through untouched.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api(err) => Some(err.status),
            ClientError::Transport(err) => err.status().map(|s| s.as_u16()),
        }
    }

    /// Unwraps into `anyhow`, so callers can downcast straight to
    /// [`ApiError`] or `reqwest::Error`.
    pub fn into_anyhow(self) -> anyhow::Error {
        match self {
            ClientError::Api(err) => err.into(),
            ClientError::Transport(err) => err.into(),
        }
    }
}
