use anyhow::bail;
use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;

use crate::domain::models::Event;

pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

/// Maps a key press to a viewer event. Releases and repeats are ignored.
pub fn map_key_event(keyevent: KeyEvent) -> Option<Event> {
    if keyevent.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = keyevent.modifiers.contains(KeyModifiers::CONTROL);
    match keyevent.code {
        KeyCode::Char('c') if ctrl => Some(Event::KeyboardCTRLC),
        KeyCode::Char('d') if ctrl => Some(Event::UIScrollPageDown),
        KeyCode::Char('u') if ctrl => Some(Event::UIScrollPageUp),
        KeyCode::Char('q') => Some(Event::KeyboardQuit),
        KeyCode::Char('r') => Some(Event::KeyboardRefresh),
        KeyCode::Char('j') | KeyCode::Down => Some(Event::UIScrollDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Event::UIScrollUp),
        KeyCode::PageDown => Some(Event::UIScrollPageDown),
        KeyCode::PageUp => Some(Event::UIScrollPageUp),
        KeyCode::Enter => Some(Event::KeyboardEnter),
        KeyCode::Tab | KeyCode::BackTab => Some(Event::KeyboardTab),
        KeyCode::Esc => Some(Event::KeyboardEsc),
        _ => None,
    }
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
                crossterm::event::MouseEventKind::ScrollUp => {
                    return Some(Event::UIScrollUp);
                }
                crossterm::event::MouseEventKind::ScrollDown => {
                    return Some(Event::UIScrollDown);
                }
                _ => {
                    return None;
                }
            },
            CrosstermEvent::Key(keyevent) => map_key_event(keyevent),
            _ => return None,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => match event {
                    Some(event) => Some(event),
                    None => bail!("Event channel closed"),
                },
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = time::sleep(time::Duration::from_millis(500)) => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
