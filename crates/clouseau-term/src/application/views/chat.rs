use clouseau_types::Exchange;
use ratatui::layout::Alignment;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use super::ChatViewport;
use super::Palette;
use crate::application::format::format_date;
use crate::domain::models::Focus;
use crate::domain::services::AppState;
use crate::domain::services::ResourceStatus;

/// Model and token usage shown under an assistant message.
///
/// Zero counts and an empty model name count as missing. Returns `None` when
/// nothing is left to show.
pub fn token_metadata(exchange: &Exchange) -> Option<String> {
    let model = exchange.model.as_deref().filter(|model| !model.is_empty());
    let has_tokens = exchange.input_tokens.unwrap_or(0) > 0 || exchange.output_tokens.unwrap_or(0) > 0;

    if model.is_none() && !has_tokens {
        return None;
    }

    let mut parts = vec![];
    if let Some(model) = model {
        parts.push(model.to_string());
    }
    if has_tokens {
        parts.push(format!(
            "{} in / {} out tokens",
            exchange.input_tokens.unwrap_or(0),
            exchange.output_tokens.unwrap_or(0)
        ));
    }

    Some(parts.join("  "))
}

/// Greedy word wrap on terminal cell width. Words wider than `width` are
/// split between characters, so wide glyphs never straddle a line end.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut wrapped = vec![];

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split(' ') {
            let word_width = UnicodeWidthStr::width(word);
            if current_width > 0 && current_width + 1 + word_width > width {
                wrapped.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }

            if current_width + word_width <= width {
                current.push_str(word);
                current_width += word_width;
                continue;
            }

            for ch in word.chars() {
                let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if current_width > 0 && current_width + ch_width > width {
                    wrapped.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        wrapped.push(current);
    }

    wrapped
}

/// One bubble pair per exchange: the user message right-aligned with its
/// timestamp, then the assistant message left-aligned with its metadata.
pub fn chat_lines(exchanges: &[Exchange], width: usize, palette: &Palette) -> Vec<Line<'static>> {
    let bubble_width = (width * 4 / 5).max(1);
    let mut lines = vec![];

    for exchange in exchanges {
        let user_style = Style::default().fg(palette.user).add_modifier(Modifier::BOLD);
        for text in wrap_text(&exchange.user_message, bubble_width) {
            lines.push(Line::styled(text, user_style).alignment(Alignment::Right));
        }
        lines.push(
            Line::styled(format_date(&exchange.created_at), palette.muted())
                .alignment(Alignment::Right),
        );
        lines.push(Line::default());

        let assistant_style = Style::default().fg(palette.assistant);
        for text in wrap_text(&exchange.assistant_message, bubble_width) {
            lines.push(Line::styled(text, assistant_style));
        }
        if let Some(metadata) = token_metadata(exchange) {
            lines.push(Line::styled(metadata, palette.muted()));
        }
        lines.push(Line::default());
    }

    lines
}

fn centered(lines: Vec<Line<'static>>, height: usize) -> Vec<Line<'static>> {
    let padding = height.saturating_sub(lines.len()) / 2;
    let mut padded = vec![Line::default(); padding];
    padded.extend(lines.into_iter().map(|line| line.alignment(Alignment::Center)));
    padded
}

/// First visible line, bounded by the last full page and by what ratatui can
/// scroll to.
fn scroll_offset(chat_scroll: usize, line_count: usize, height: usize) -> u16 {
    let offset = chat_scroll.min(line_count.saturating_sub(height));
    u16::try_from(offset).unwrap_or(u16::MAX)
}

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState, palette: &Palette) -> ChatViewport {
    let width = area.width.saturating_sub(2) as usize;
    let height = area.height.saturating_sub(2) as usize;

    let mut title = " Chat ".to_string();
    if let Some(conversation_id) = app_state.selection.selected_conversation_id() {
        if let Some(conversation) = app_state
            .conversations
            .data()
            .iter()
            .find(|conversation| conversation.id == conversation_id)
        {
            title = format!(" {} ", conversation.title);
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(palette.border(app_state.focus == Focus::Chat));

    let (lines, scrollable) = match app_state.exchanges.status() {
        ResourceStatus::Idle => (
            centered(
                vec![
                    Line::styled(
                        "No conversation selected",
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Line::styled(
                        "Select a conversation from the sidebar to view exchanges",
                        palette.muted(),
                    ),
                ],
                height,
            ),
            false,
        ),
        ResourceStatus::Loading => (
            centered(vec![Line::styled("Loading exchanges...", palette.muted())], height),
            false,
        ),
        ResourceStatus::Failed(err) => (
            centered(vec![Line::styled(format!("Error: {err}"), palette.error())], height),
            false,
        ),
        ResourceStatus::Empty => (
            centered(
                vec![Line::styled("No exchanges in this conversation", palette.muted())],
                height,
            ),
            false,
        ),
        ResourceStatus::Ready(exchanges) => (chat_lines(exchanges, width, palette), true),
    };

    let mut viewport = ChatViewport {
        line_count: 0,
        height,
    };
    let mut offset = 0;
    if scrollable {
        viewport.line_count = lines.len();
        offset = scroll_offset(app_state.chat_scroll, viewport.line_count, height);
    }

    let paragraph = Paragraph::new(lines).block(block).scroll((offset, 0));
    frame.render_widget(paragraph, area);

    viewport
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::test_support::exchange;

    #[test]
    fn test_token_metadata_hidden_without_model_or_tokens() {
        let exchange = exchange("1", "10");
        assert_eq!(token_metadata(&exchange), None);
    }

    #[test]
    fn test_token_metadata_with_all_fields() {
        let mut exchange = exchange("1", "10");
        exchange.model = Some("claude-3-opus".to_string());
        exchange.input_tokens = Some(100);
        exchange.output_tokens = Some(50);

        assert_eq!(
            token_metadata(&exchange).as_deref(),
            Some("claude-3-opus  100 in / 50 out tokens")
        );
    }

    #[test]
    fn test_token_metadata_missing_side_is_zero() {
        let mut exchange = exchange("1", "10");
        exchange.output_tokens = Some(42);

        assert_eq!(
            token_metadata(&exchange).as_deref(),
            Some("0 in / 42 out tokens")
        );
    }

    #[test]
    fn test_token_metadata_treats_zero_and_empty_as_missing() {
        let mut exchange = exchange("1", "10");
        exchange.model = Some("".to_string());
        exchange.input_tokens = Some(0);
        exchange.output_tokens = Some(0);
        assert_eq!(token_metadata(&exchange), None);

        exchange.model = Some("gpt-4".to_string());
        assert_eq!(token_metadata(&exchange).as_deref(), Some("gpt-4"));
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("hello world foo", 11), vec!["hello world", "foo"]);
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text("one\n\ntwo", 10), vec!["one", "", "two"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_scroll_offset_is_clamped() {
        assert_eq!(scroll_offset(5, 100, 20), 5);
        assert_eq!(scroll_offset(500, 100, 20), 80);
        assert_eq!(scroll_offset(3, 10, 20), 0);
        assert_eq!(scroll_offset(70_000, 80_000, 20), u16::MAX);
    }

    #[test]
    fn test_wrap_text_measures_wide_characters_in_cells() {
        let text = format!("{}END", "界".repeat(70));
        let wrapped = wrap_text(&text, 60);

        assert_eq!(wrapped.len(), 3);
        assert_eq!(wrapped[0], "界".repeat(30));
        assert_eq!(wrapped[1], "界".repeat(30));
        assert_eq!(wrapped[2], format!("{}END", "界".repeat(10)));
        assert!(wrapped.iter().all(|line| UnicodeWidthStr::width(line.as_str()) <= 60));

        // An odd width leaves the last cell empty rather than splitting a glyph.
        assert_eq!(wrap_text("界界界", 5), vec!["界界", "界"]);
        assert_eq!(wrap_text("hi 界界", 4), vec!["hi", "界界"]);
    }
}
