use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use super::views;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;

/// Puts the terminal back into cooked mode. Safe to call from a panic hook.
pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

/// Runs the viewer until the user quits or the event channel closes.
pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state_props: AppStateProps,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut app_state = AppState::new(app_state_props);
    let mut events = EventsService::new(rx);

    app_state.start(&tx)?;

    loop {
        let mut viewport = views::ChatViewport::default();
        let frame = terminal.draw(|frame| viewport = views::draw(frame, &app_state))?;
        app_state.set_rect(frame.area);
        app_state.set_chat_viewport(viewport.line_count, viewport.height);

        let event = events.next().await?;
        tracing::trace!(event = ?event, "ui event");

        if app_state.handle_event(event, &tx)? {
            break;
        }
    }

    return Ok(());
}
