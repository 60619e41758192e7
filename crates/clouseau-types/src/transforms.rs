//! Wire → view-model conversion.
//!
//! Every function here is total: ids are stringified, `null` optionals stay
//! `None` and timestamps are parsed. A timestamp that cannot be parsed falls
//! back to the Unix epoch and is logged, so a single malformed record never
//! takes a whole list down with it.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::api::{ApiConversation, ApiExchange, ApiSession};
use crate::models::{Conversation, Exchange, Session};

pub fn transform_session(api: ApiSession) -> Session {
    Session {
        id: api.id.to_string(),
        name: api.name,
        description: api.description,
        created_at: parse_timestamp(&api.created_at),
        updated_at: parse_timestamp(&api.updated_at),
    }
}

pub fn transform_conversation(api: ApiConversation) -> Conversation {
    Conversation {
        id: api.id.to_string(),
        session_id: api.session_id.to_string(),
        title: api.title,
        created_at: parse_timestamp(&api.created_at),
        updated_at: parse_timestamp(&api.updated_at),
    }
}

pub fn transform_exchange(api: ApiExchange) -> Exchange {
    Exchange {
        id: api.id.to_string(),
        conversation_id: api.conversation_id.to_string(),
        user_message: api.user_message,
        assistant_message: api.assistant_message,
        model: api.model,
        input_tokens: api.input_tokens,
        output_tokens: api.output_tokens,
        created_at: parse_timestamp(&api.created_at),
    }
}

/// Parses an ISO-8601 timestamp. Values without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Utc);
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.and_utc();
    }

    log::warn!("unparseable timestamp from API: {raw:?}");
    DateTime::<Utc>::default()
}
