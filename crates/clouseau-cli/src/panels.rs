//! Plain-text panels printed by the non-interactive subcommands.

use chrono::DateTime;
use chrono::Utc;
use clouseau_term::application::format::format_date;
use clouseau_term::application::format::format_relative_date;
use clouseau_types::Conversation;
use clouseau_types::Session;

pub const BANNER: &str = "Clouseau CLI - LLM Interaction Inspector";

fn session_line(session: &Session, now: &DateTime<Utc>) -> String {
    let mut line = format!(
        "{:>6}  {}  ({})",
        session.id,
        session.name,
        format_relative_date(&session.updated_at, now)
    );

    if let Some(description) = &session.description {
        line.push_str(&format!("\n        {description}"));
    }

    line
}

pub fn session_list(sessions: &[Session], now: &DateTime<Utc>) -> String {
    if sessions.is_empty() {
        return "No sessions found".to_string();
    }

    sessions
        .iter()
        .map(|session| session_line(session, now))
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn session_detail(session: &Session, conversations: &[Conversation], now: &DateTime<Utc>) -> String {
    let mut lines = vec![
        format!("Session {}: {}", session.id, session.name),
    ];
    if let Some(description) = &session.description {
        lines.push(description.clone());
    }
    lines.push(format!("Created: {}", format_date(&session.created_at)));
    lines.push(format!("Updated: {}", format_date(&session.updated_at)));
    lines.push(String::new());

    if conversations.is_empty() {
        lines.push("No conversations".to_string());
    } else {
        lines.push(format!("Conversations ({}):", conversations.len()));
        for conversation in conversations {
            lines.push(format!(
                "{:>6}  {}  ({})",
                conversation.id,
                conversation.title,
                format_relative_date(&conversation.created_at, now)
            ));
        }
    }

    lines.join("\n")
}

/// Sessions whose name or description contains `query`, ignoring case.
pub fn filter_sessions<'a>(sessions: &'a [Session], query: &str) -> Vec<&'a Session> {
    let needle = query.to_lowercase();

    sessions
        .iter()
        .filter(|session| {
            session.name.to_lowercase().contains(&needle)
                || session
                    .description
                    .as_deref()
                    .is_some_and(|description| description.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    fn session(id: &str, name: &str, description: Option<&str>) -> Session {
        Session {
            id: id.to_string(),
            name: name.to_string(),
            description: description.map(str::to_string),
            created_at: now() - Duration::days(30),
            updated_at: now() - Duration::hours(2),
        }
    }

    #[test]
    fn test_session_list() {
        let sessions = vec![
            session("1", "Debugging", Some("Flaky test hunt")),
            session("12", "Refactor", None),
        ];

        assert_eq!(
            session_list(&sessions, &now()),
            "     1  Debugging  (2h ago)\n        Flaky test hunt\n    12  Refactor  (2h ago)"
        );
        assert_eq!(session_list(&[], &now()), "No sessions found");
    }

    #[test]
    fn test_session_detail() {
        let conversation = Conversation {
            id: "10".to_string(),
            session_id: "1".to_string(),
            title: "Stack traces".to_string(),
            created_at: now() - Duration::minutes(5),
            updated_at: now(),
        };

        let detail = session_detail(&session("1", "Debugging", None), &[conversation], &now());

        assert!(detail.starts_with("Session 1: Debugging\nCreated: Dec 16, 2023, 12:00 PM"));
        assert!(detail.contains("Conversations (1):\n    10  Stack traces  (5m ago)"));

        let empty = session_detail(&session("1", "Debugging", None), &[], &now());
        assert!(empty.ends_with("No conversations"));
    }

    #[test]
    fn test_filter_sessions_is_case_insensitive() {
        let sessions = vec![
            session("1", "Debugging", Some("Flaky TEST hunt")),
            session("2", "Refactor", None),
            session("3", "Test plan", None),
        ];

        let ids = filter_sessions(&sessions, "test")
            .iter()
            .map(|session| session.id.as_str())
            .collect::<Vec<&str>>();
        assert_eq!(ids, vec!["1", "3"]);

        assert!(filter_sessions(&sessions, "missing").is_empty());
    }
}
