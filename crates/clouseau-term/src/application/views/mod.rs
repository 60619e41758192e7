//! Renderers for the sidebar, the chat pane and the status bar.
//!
//! Views read [`AppState`] and never change it. Each list view shows one of
//! loading, error, empty or populated content depending on its resource.

pub mod chat;
pub mod session_browser;
pub mod status_bar;
mod palette;

use chrono::DateTime;
use chrono::Utc;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::Frame;

pub use palette::Palette;

use crate::domain::services::AppState;

#[cfg(test)]
#[path = "views_test.rs"]
mod tests;

/// What the chat pane rendered, fed back into the scroll bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatViewport {
    pub line_count: usize,
    pub height: usize,
}

pub fn draw(frame: &mut Frame, app_state: &AppState) -> ChatViewport {
    draw_at(frame, app_state, &Utc::now())
}

/// Like [`draw`] with a fixed clock for relative dates.
pub fn draw_at(frame: &mut Frame, app_state: &AppState, now: &DateTime<Utc>) -> ChatViewport {
    let palette = Palette::from_name(&app_state.theme_name);

    let [main, status] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
    let [sidebar, chat] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Min(20)]).areas(main);

    session_browser::render(frame, sidebar, app_state, &palette, now);
    let viewport = chat::render(frame, chat, app_state, &palette);
    status_bar::render(frame, status, app_state, &palette);

    viewport
}
