use std::io::Write;

use anyhow::bail;
use anyhow::Result;
use chrono::Utc;
use clouseau_client::ClouseauApi;
use dialoguer::Confirm;

use crate::cli::SessionAction;
use crate::panels;

fn require_id<'a>(action: &str, session_id: Option<&'a str>) -> Result<&'a str> {
    match session_id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => bail!("Missing session id\n\nUsage: clou session {action} <SESSION_ID>"),
    }
}

pub async fn run(
    api: &dyn ClouseauApi,
    action: SessionAction,
    session_id: Option<&str>,
    yes: bool,
    out: &mut impl Write,
) -> Result<()> {
    let now = Utc::now();

    match action {
        SessionAction::List => {
            let sessions = api.list_sessions().await?;
            writeln!(out, "{}", panels::session_list(&sessions, &now))?;
        }
        SessionAction::Show => {
            let id = require_id("show", session_id)?;
            let session = api.get_session(id).await?;
            let conversations = api.list_conversations(id).await?;
            writeln!(out, "{}", panels::session_detail(&session, &conversations, &now))?;
        }
        SessionAction::Delete => {
            let id = require_id("delete", session_id)?;
            if !yes
                && !Confirm::new()
                    .with_prompt(format!("Delete session {id} and all of its conversations?"))
                    .default(false)
                    .interact()?
            {
                writeln!(out, "Aborted")?;
                return Ok(());
            }

            api.delete_session(id).await?;
            log::info!("deleted session {id}");
            writeln!(out, "Deleted session {id}")?;
        }
    }

    Ok(())
}
