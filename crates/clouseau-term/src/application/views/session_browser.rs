use chrono::DateTime;
use chrono::Utc;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Palette;
use crate::application::format::format_relative_date;
use crate::domain::models::Focus;
use crate::domain::services::AppState;
use crate::domain::services::ResourceStatus;

/// Sidebar text plus the index of the line holding the cursor.
pub struct SidebarLines {
    pub lines: Vec<Line<'static>>,
    pub cursor_line: usize,
}

struct RowStyler<'a> {
    app_state: &'a AppState,
    palette: &'a Palette,
    row: usize,
}

impl RowStyler<'_> {
    /// Style for the next selectable row. Advances the row counter.
    fn next(&mut self, selected: bool) -> (Style, bool) {
        let at_cursor = self.row == self.app_state.sidebar_cursor;
        self.row += 1;

        if at_cursor && self.app_state.focus == Focus::Sidebar {
            return (self.palette.highlight(), at_cursor);
        }
        if selected {
            return (
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
                at_cursor,
            );
        }

        (Style::default().fg(self.palette.text), at_cursor)
    }
}

pub fn sidebar_lines(app_state: &AppState, palette: &Palette, now: &DateTime<Utc>) -> SidebarLines {
    let mut lines = vec![];
    let mut cursor_line = 0;
    let mut styler = RowStyler {
        app_state,
        palette,
        row: 0,
    };

    let sessions = match app_state.sessions.status() {
        ResourceStatus::Idle | ResourceStatus::Loading => {
            lines.push(Line::styled("Loading sessions...", palette.muted()));
            &[][..]
        }
        ResourceStatus::Failed(err) => {
            lines.push(Line::styled(format!("Error: {err}"), palette.error()));
            &[][..]
        }
        ResourceStatus::Empty => {
            lines.push(Line::styled("No sessions found", palette.muted()));
            &[][..]
        }
        ResourceStatus::Ready(sessions) => sessions,
    };

    for session in sessions {
        let selected = app_state.selection.selected_session_id() == Some(session.id.as_str());
        let (style, at_cursor) = styler.next(selected);
        if at_cursor {
            cursor_line = lines.len();
        }

        let marker = if selected { "▾" } else { "▸" };
        lines.push(Line::from(Span::styled(
            format!("{marker} {}", session.name),
            style,
        )));
        if let Some(description) = &session.description {
            lines.push(Line::styled(format!("  {description}"), palette.muted()));
        }
        lines.push(Line::styled(
            format!("  {}", format_relative_date(&session.updated_at, now)),
            palette.muted(),
        ));

        if !selected {
            continue;
        }

        match app_state.conversations.status() {
            ResourceStatus::Idle => {}
            ResourceStatus::Loading => {
                lines.push(Line::styled("    Loading conversations...", palette.muted()));
            }
            ResourceStatus::Failed(err) => {
                lines.push(Line::styled(format!("    Error: {err}"), palette.error()));
            }
            ResourceStatus::Empty => {
                lines.push(Line::styled("    No conversations", palette.muted()));
            }
            ResourceStatus::Ready(conversations) => {
                for conversation in conversations {
                    let selected = app_state.selection.selected_conversation_id()
                        == Some(conversation.id.as_str());
                    let (style, at_cursor) = styler.next(selected);
                    if at_cursor {
                        cursor_line = lines.len();
                    }

                    let marker = if selected { "●" } else { "·" };
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {marker} {}", conversation.title), style),
                        Span::styled(
                            format!(" {}", format_relative_date(&conversation.created_at, now)),
                            palette.muted(),
                        ),
                    ]));
                }
            }
        }
    }

    SidebarLines { lines, cursor_line }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    app_state: &AppState,
    palette: &Palette,
    now: &DateTime<Utc>,
) {
    let sidebar = sidebar_lines(app_state, palette, now);

    let height = area.height.saturating_sub(2) as usize;
    let mut offset = 0;
    if height > 0 && sidebar.cursor_line >= height {
        offset = sidebar.cursor_line + 1 - height;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Sessions ")
        .border_style(palette.border(app_state.focus == Focus::Sidebar));

    let paragraph = Paragraph::new(sidebar.lines)
        .block(block)
        .scroll((offset as u16, 0));

    frame.render_widget(paragraph, area);
}
