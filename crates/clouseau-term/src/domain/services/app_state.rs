use anyhow::Result;
use clouseau_types::{Conversation, Exchange, Session};
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::Resource;
use super::ResourceStatus;
use super::Selection;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::FetchResult;
use crate::domain::models::Focus;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

pub struct AppStateProps {
    pub api_url: String,
    pub context_window: u64,
    pub session_id: Option<String>,
    pub theme_name: String,
}

/// A selectable row of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow {
    Session(usize),
    Conversation(usize),
}

pub struct AppState {
    pub api_url: String,
    pub chat_line_count: usize,
    pub chat_scroll: usize,
    pub context_window: u64,
    pub conversations: Resource<Conversation>,
    pub exchanges: Resource<Exchange>,
    pub focus: Focus,
    pub last_known_height: usize,
    pub last_known_width: usize,
    pub selection: Selection,
    pub sessions: Resource<Session>,
    pub sidebar_cursor: usize,
    pub theme_name: String,
    initial_session_id: Option<String>,
}

impl AppState {
    pub fn new(props: AppStateProps) -> AppState {
        return AppState {
            api_url: props.api_url,
            chat_line_count: 0,
            chat_scroll: 0,
            context_window: props.context_window,
            conversations: Resource::keyed(),
            exchanges: Resource::keyed(),
            focus: Focus::default(),
            last_known_height: 0,
            last_known_width: 0,
            selection: Selection::default(),
            sessions: Resource::unkeyed(),
            sidebar_cursor: 0,
            theme_name: props.theme_name,
            initial_session_id: props.session_id,
        };
    }

    /// Issues the initial fetches: the session list, plus the conversations of
    /// the preselected session if there is one.
    pub fn start(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if let Some(request) = self.sessions.refetch() {
            tx.send(Action::FetchSessions(request))?;
        }

        if let Some(session_id) = self.initial_session_id.take() {
            self.select_session(Some(session_id), tx)?;
        }

        return Ok(());
    }

    /// Applies one event. Returns `true` when the viewer should exit.
    pub fn handle_event(&mut self, event: Event, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        match event {
            Event::SessionsLoaded(loaded) => self.handle_sessions_loaded(loaded),
            Event::ConversationsLoaded(loaded) => self.handle_conversations_loaded(loaded),
            Event::ExchangesLoaded(loaded) => self.handle_exchanges_loaded(loaded),
            Event::KeyboardCTRLC | Event::KeyboardQuit => return Ok(true),
            Event::KeyboardEnter => self.activate(tx)?,
            Event::KeyboardEsc => {
                self.select_conversation(None, tx)?;
                self.focus = Focus::Sidebar;
            }
            Event::KeyboardRefresh => self.refetch_focused(tx)?,
            Event::KeyboardTab => self.focus = self.focus.toggle(),
            Event::UIScrollDown => match self.focus {
                Focus::Sidebar => self.move_cursor(1),
                Focus::Chat => self.scroll_chat(1),
            },
            Event::UIScrollUp => match self.focus {
                Focus::Sidebar => self.move_cursor(-1),
                Focus::Chat => self.scroll_chat(-1),
            },
            Event::UIScrollPageDown => self.scroll_chat(self.page_size() as isize),
            Event::UIScrollPageUp => self.scroll_chat(-(self.page_size() as isize)),
            Event::UITick => {}
        }

        return Ok(false);
    }

    pub fn select_session(
        &mut self,
        session_id: Option<String>,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        self.selection.select_session(session_id);
        self.chat_scroll = 0;
        return self.sync_resources(tx);
    }

    pub fn select_conversation(
        &mut self,
        conversation_id: Option<String>,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        self.selection.select_conversation(conversation_id);
        self.chat_scroll = 0;
        return self.sync_resources(tx);
    }

    /// Points the keyed resources at the current selection.
    fn sync_resources(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        let session_id = self.selection.selected_session_id().map(str::to_string);
        if let Some(request) = self.conversations.set_key(session_id) {
            tx.send(Action::FetchConversations(request))?;
        }

        let conversation_id = self
            .selection
            .selected_conversation_id()
            .map(str::to_string);
        if let Some(request) = self.exchanges.set_key(conversation_id) {
            tx.send(Action::FetchExchanges(request))?;
        }

        self.clamp_cursor();
        return Ok(());
    }

    pub fn handle_sessions_loaded(&mut self, loaded: FetchResult<Session>) {
        self.sessions.resolve(loaded.request_id, loaded.result);
        self.clamp_cursor();
    }

    pub fn handle_conversations_loaded(&mut self, loaded: FetchResult<Conversation>) {
        self.conversations.resolve(loaded.request_id, loaded.result);
        self.clamp_cursor();
    }

    pub fn handle_exchanges_loaded(&mut self, loaded: FetchResult<Exchange>) {
        if self.exchanges.resolve(loaded.request_id, loaded.result) {
            self.chat_scroll = 0;
        }
    }

    /// Selectable sidebar rows in display order: every session, with the
    /// conversations of the selected session nested right below it.
    ///
    /// Only lists that are on screen contribute rows, so a list being
    /// refetched has none even while its previous data is kept.
    pub fn sidebar_rows(&self) -> Vec<SidebarRow> {
        let ResourceStatus::Ready(sessions) = self.sessions.status() else {
            return vec![];
        };

        let selected = self.selection.selected_session_id();
        let conversation_count = match self.conversations.status() {
            ResourceStatus::Ready(conversations) => conversations.len(),
            _ => 0,
        };
        let mut rows = vec![];

        for (idx, session) in sessions.iter().enumerate() {
            rows.push(SidebarRow::Session(idx));

            if selected == Some(session.id.as_str()) {
                rows.extend((0..conversation_count).map(SidebarRow::Conversation));
            }
        }

        return rows;
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.sidebar_rows().len();
        if len == 0 {
            self.sidebar_cursor = 0;
            return;
        }

        let next = self.sidebar_cursor as isize + delta;
        self.sidebar_cursor = next.clamp(0, len as isize - 1) as usize;
    }

    fn clamp_cursor(&mut self) {
        let len = self.sidebar_rows().len();
        self.sidebar_cursor = self.sidebar_cursor.min(len.saturating_sub(1));
    }

    /// Selects whatever the sidebar cursor points at.
    pub fn activate(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if self.focus != Focus::Sidebar {
            return Ok(());
        }

        match self.sidebar_rows().get(self.sidebar_cursor).copied() {
            Some(SidebarRow::Session(idx)) => {
                let session_id = self.sessions.data()[idx].id.clone();
                self.select_session(Some(session_id), tx)?;
            }
            Some(SidebarRow::Conversation(idx)) => {
                let conversation_id = self.conversations.data()[idx].id.clone();
                self.select_conversation(Some(conversation_id), tx)?;
                self.focus = Focus::Chat;
            }
            None => {}
        }

        return Ok(());
    }

    pub fn refetch_focused(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        match self.focus {
            Focus::Sidebar => {
                if let Some(request) = self.sessions.refetch() {
                    tx.send(Action::FetchSessions(request))?;
                }
                if let Some(request) = self.conversations.refetch() {
                    tx.send(Action::FetchConversations(request))?;
                }
            }
            Focus::Chat => {
                if let Some(request) = self.exchanges.refetch() {
                    tx.send(Action::FetchExchanges(request))?;
                }
            }
        }

        return Ok(());
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width.into();
        self.last_known_height = rect.height.into();
    }

    /// Records how many wrapped lines the chat pane rendered and how tall it is.
    pub fn set_chat_viewport(&mut self, line_count: usize, height: usize) {
        self.chat_line_count = line_count;
        self.chat_scroll = self.chat_scroll.min(line_count.saturating_sub(height));
    }

    pub fn scroll_chat(&mut self, delta: isize) {
        let max = self.chat_line_count.saturating_sub(1) as isize;
        self.chat_scroll = (self.chat_scroll as isize + delta).clamp(0, max.max(0)) as usize;
    }

    fn page_size(&self) -> usize {
        return self.last_known_height.saturating_sub(4).max(1);
    }

    /// Tokens used by the latest exchange and the configured context window.
    pub fn context_usage(&self) -> (u64, u64) {
        let used = self
            .exchanges
            .data()
            .last()
            .map(Exchange::total_tokens)
            .unwrap_or(0);

        return (used, self.context_window);
    }
}
