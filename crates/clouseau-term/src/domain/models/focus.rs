use strum_macros::Display;

/// Pane receiving navigation keys.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display)]
pub enum Focus {
    #[default]
    Sidebar,
    Chat,
}

impl Focus {
    pub fn toggle(self) -> Focus {
        match self {
            Focus::Sidebar => Focus::Chat,
            Focus::Chat => Focus::Sidebar,
        }
    }
}
