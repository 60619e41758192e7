use chrono::{DateTime, TimeZone, Utc};
use clouseau_types::{Conversation, Exchange, Session};

pub fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap()
}

pub fn session(id: &str, name: &str) -> Session {
    Session {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        created_at: at(0),
        updated_at: at(0),
    }
}

pub fn conversation(id: &str, session_id: &str) -> Conversation {
    Conversation {
        id: id.to_string(),
        session_id: session_id.to_string(),
        title: format!("Conversation {id}"),
        created_at: at(0),
        updated_at: at(0),
    }
}

pub fn exchange(id: &str, conversation_id: &str) -> Exchange {
    Exchange {
        id: id.to_string(),
        conversation_id: conversation_id.to_string(),
        user_message: "Hello".to_string(),
        assistant_message: "Hi there".to_string(),
        model: None,
        input_tokens: None,
        output_tokens: None,
        created_at: at(0),
    }
}
