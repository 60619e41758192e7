use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;

/// Colors used by the views for one `theme` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub error: Color,
    pub muted: Color,
    pub text: Color,
    pub user: Color,
    pub assistant: Color,
}

impl Palette {
    /// Unknown names fall back to `auto`, which leaves the terminal's own
    /// foreground untouched.
    pub fn from_name(name: &str) -> Palette {
        match name {
            "dark" => Palette {
                accent: Color::LightCyan,
                error: Color::LightRed,
                muted: Color::DarkGray,
                text: Color::White,
                user: Color::LightBlue,
                assistant: Color::Gray,
            },
            "light" => Palette {
                accent: Color::Blue,
                error: Color::Red,
                muted: Color::Gray,
                text: Color::Black,
                user: Color::Blue,
                assistant: Color::Black,
            },
            _ => Palette {
                accent: Color::Cyan,
                error: Color::Red,
                muted: Color::DarkGray,
                text: Color::Reset,
                user: Color::Blue,
                assistant: Color::Reset,
            },
        }
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            return Style::default().fg(self.accent);
        }

        Style::default().fg(self.muted)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }
}
