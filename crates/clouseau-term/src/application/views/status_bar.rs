use ratatui::layout::Alignment;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Palette;
use crate::application::format::format_context_usage;
use crate::domain::services::AppState;

pub fn hint_text(app_state: &AppState) -> String {
    format!(
        " {} | {} | Tab focus · Enter select · r refresh · Esc back · q quit",
        app_state.api_url, app_state.focus
    )
}

pub fn usage_text(app_state: &AppState) -> String {
    let (used, total) = app_state.context_usage();
    format!("{} ", format_context_usage(used, total))
}

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState, palette: &Palette) {
    let usage = usage_text(app_state);
    let [left, right] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(usage.chars().count() as u16),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(hint_text(app_state), palette.muted())),
        left,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(usage, palette.muted())).alignment(Alignment::Right),
        right,
    );
}
