use std::sync::Arc;

/// Monotonic per-resource tag used to discard superseded responses.
pub type RequestId = u64;

/// Shared so that a failed resource can be cloned into the views.
pub type FetchError = Arc<anyhow::Error>;

/// One fetch issued by a resource for its key at the time of issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub request_id: RequestId,
    pub key: Option<String>,
}

/// The outcome of a [`FetchRequest`], tagged with the id it answers.
#[derive(Debug)]
pub struct FetchResult<T> {
    pub request_id: RequestId,
    pub result: Result<Vec<T>, FetchError>,
}

impl<T> FetchResult<T> {
    pub fn new(request_id: RequestId, result: anyhow::Result<Vec<T>>) -> Self {
        Self {
            request_id,
            result: result.map_err(Arc::new),
        }
    }
}
