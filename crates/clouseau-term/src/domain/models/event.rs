use clouseau_types::{Conversation, Exchange, Session};

use super::FetchResult;

#[derive(Debug)]
pub enum Event {
    SessionsLoaded(FetchResult<Session>),
    ConversationsLoaded(FetchResult<Conversation>),
    ExchangesLoaded(FetchResult<Exchange>),
    KeyboardCTRLC,
    KeyboardEnter,
    KeyboardEsc,
    KeyboardQuit,
    KeyboardRefresh,
    KeyboardTab,
    UITick,
    UIScrollDown,
    UIScrollUp,
    UIScrollPageDown,
    UIScrollPageUp,
}
