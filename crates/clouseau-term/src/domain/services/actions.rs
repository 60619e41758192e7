use std::sync::Arc;

use anyhow::Result;
use clouseau_client::{ApiClientBox, ClouseauApi};
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::FetchRequest;
use crate::domain::models::FetchResult;

async fn fetch(
    api_client: &ApiClientBox,
    action: Action,
    event_tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    let event = match action {
        Action::FetchSessions(FetchRequest { request_id, .. }) => Event::SessionsLoaded(
            FetchResult::new(request_id, api_client.list_sessions().await),
        ),
        Action::FetchConversations(FetchRequest { request_id, key }) => {
            let result = match key {
                Some(session_id) => api_client.list_conversations(&session_id).await,
                None => Ok(vec![]),
            };
            Event::ConversationsLoaded(FetchResult::new(request_id, result))
        }
        Action::FetchExchanges(FetchRequest { request_id, key }) => {
            let result = match key {
                Some(conversation_id) => api_client.list_exchanges(&conversation_id).await,
                None => Ok(vec![]),
            };
            Event::ExchangesLoaded(FetchResult::new(request_id, result))
        }
    };

    event_tx.send(event)?;
    Ok(())
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs until the action channel closes. Each fetch gets its own task so a
    /// slow request never blocks a newer one.
    pub async fn start(
        api_client: ApiClientBox,
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let api_client_arc = Arc::new(api_client);

        while let Some(action) = rx.recv().await {
            tracing::debug!(action = ?action, "dispatching");

            let client_worker = api_client_arc.clone();
            let worker_event_tx = event_tx.clone();
            tokio::spawn(async move {
                if let Err(err) = fetch(&client_worker, action, &worker_event_tx).await {
                    tracing::error!(error = ?err, "failed to deliver fetch result");
                }
            });
        }

        Ok(())
    }
}
