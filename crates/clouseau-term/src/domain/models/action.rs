use super::FetchRequest;

/// Work the UI hands to the actions worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FetchSessions(FetchRequest),
    FetchConversations(FetchRequest),
    FetchExchanges(FetchRequest),
}
