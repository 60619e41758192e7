use std::io::Write;

use anyhow::Result;
use chrono::Utc;
use clouseau_client::ClouseauApi;

use crate::panels;

/// Filters the first page of sessions by name or description.
pub async fn run(api: &dyn ClouseauApi, query: &str, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Searching: {query}")?;

    let sessions = api.list_sessions().await?;
    let matches = panels::filter_sessions(&sessions, query);
    log::debug!("search '{query}' matched {} of {} sessions", matches.len(), sessions.len());

    if matches.is_empty() {
        writeln!(out, "No sessions match \"{query}\"")?;
        return Ok(());
    }

    let matches = matches.into_iter().cloned().collect::<Vec<_>>();
    writeln!(out, "{}", panels::session_list(&matches, &Utc::now()))?;

    Ok(())
}
