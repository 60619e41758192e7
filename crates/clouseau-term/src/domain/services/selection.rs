/// The session and conversation currently picked in the viewer.
///
/// Owned by [`super::AppState`] and handed to views by reference. A
/// conversation selection never survives a session change.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    selected_session_id: Option<String>,
    selected_conversation_id: Option<String>,
}

impl Selection {
    pub fn selected_session_id(&self) -> Option<&str> {
        self.selected_session_id.as_deref()
    }

    pub fn selected_conversation_id(&self) -> Option<&str> {
        self.selected_conversation_id.as_deref()
    }

    pub fn select_session(&mut self, session_id: Option<String>) {
        self.selected_session_id = session_id;
        self.selected_conversation_id = None;
    }

    pub fn select_conversation(&mut self, conversation_id: Option<String>) {
        self.selected_conversation_id = conversation_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_selection_is_empty() {
        let selection = Selection::default();
        assert!(selection.selected_session_id().is_none());
        assert!(selection.selected_conversation_id().is_none());
    }

    #[test]
    fn test_selecting_session_clears_conversation() {
        let mut selection = Selection::default();

        selection.select_session(Some("1".to_string()));
        selection.select_conversation(Some("10".to_string()));
        assert_eq!(selection.selected_session_id(), Some("1"));
        assert_eq!(selection.selected_conversation_id(), Some("10"));

        selection.select_session(Some("2".to_string()));
        assert_eq!(selection.selected_session_id(), Some("2"));
        assert!(selection.selected_conversation_id().is_none());
    }

    #[test]
    fn test_reselecting_same_session_still_clears_conversation() {
        let mut selection = Selection::default();

        selection.select_session(Some("1".to_string()));
        selection.select_conversation(Some("10".to_string()));
        selection.select_session(Some("1".to_string()));

        assert!(selection.selected_conversation_id().is_none());
    }

    #[test]
    fn test_select_conversation_keeps_session() {
        let mut selection = Selection::default();

        selection.select_session(Some("1".to_string()));
        selection.select_conversation(Some("10".to_string()));
        selection.select_conversation(None);

        assert_eq!(selection.selected_session_id(), Some("1"));
        assert!(selection.selected_conversation_id().is_none());
    }
}
