use crate::domain::models::{FetchError, FetchRequest, RequestId};

/// What a view should show for a resource.
#[derive(Debug)]
pub enum ResourceStatus<'a, T> {
    /// Keyed resource without a key. Nothing to fetch.
    Idle,
    Loading,
    Failed(&'a anyhow::Error),
    Empty,
    Ready(&'a [T]),
}

/// Stateful fetcher for one list of records.
///
/// A keyed resource (conversations of a session, exchanges of a conversation)
/// refetches whenever its key changes and sits idle while the key is absent.
/// Every request carries a fresh id; only the result for the last issued id is
/// applied, so a late response for an old key can't overwrite a newer one.
#[derive(Debug, Clone)]
pub struct Resource<T> {
    keyed: bool,
    key: Option<String>,
    last_request_id: RequestId,
    data: Vec<T>,
    loading: bool,
    error: Option<FetchError>,
}

impl<T> Resource<T> {
    /// A resource that always fetches, e.g. the session list.
    pub fn unkeyed() -> Self {
        Self {
            keyed: false,
            key: None,
            last_request_id: 0,
            data: vec![],
            loading: false,
            error: None,
        }
    }

    /// A resource that starts idle until [`Resource::set_key`] is given a key.
    pub fn keyed() -> Self {
        Self {
            keyed: true,
            ..Self::unkeyed()
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.keyed && self.key.is_none()
    }

    /// Points the resource at a new key.
    ///
    /// Returns the request to issue, or `None` when the key is unchanged or
    /// absent. Any request still in flight for the previous key is superseded.
    pub fn set_key(&mut self, key: Option<String>) -> Option<FetchRequest> {
        if !self.keyed || self.key == key {
            return None;
        }

        self.key = key;
        self.data.clear();
        self.error = None;

        if self.key.is_none() {
            self.last_request_id += 1;
            self.loading = false;
            return None;
        }

        Some(self.begin())
    }

    /// Repeats the fetch for the current key, whatever the current state.
    pub fn refetch(&mut self) -> Option<FetchRequest> {
        if self.is_idle() {
            return None;
        }

        Some(self.begin())
    }

    /// Applies a result. Returns `false` if it answered a superseded request.
    pub fn resolve(&mut self, request_id: RequestId, result: Result<Vec<T>, FetchError>) -> bool {
        if request_id != self.last_request_id || !self.loading {
            tracing::debug!(
                request_id,
                last_request_id = self.last_request_id,
                "discarding stale fetch result"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(data) => {
                self.data = data;
                self.error = None;
            }
            Err(err) => {
                self.data.clear();
                self.error = Some(err);
            }
        }

        true
    }

    pub fn status(&self) -> ResourceStatus<'_, T> {
        if self.is_idle() {
            return ResourceStatus::Idle;
        }
        if self.loading {
            return ResourceStatus::Loading;
        }
        if let Some(err) = &self.error {
            return ResourceStatus::Failed(err.as_ref());
        }
        if self.data.is_empty() {
            return ResourceStatus::Empty;
        }

        ResourceStatus::Ready(&self.data)
    }

    fn begin(&mut self) -> FetchRequest {
        self.last_request_id += 1;
        self.loading = true;
        self.error = None;

        FetchRequest {
            request_id: self.last_request_id,
            key: self.key.clone(),
        }
    }
}
