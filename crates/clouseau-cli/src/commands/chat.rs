use std::io;

use anyhow::Result;
use clouseau_term::domain::services::actions::ActionsService;
use clouseau_term::{destruct_terminal_for_panic, start_loop};
use clouseau_term::{Action, ApiClientManager, AppStateProps, Config, ConfigKey, Event};
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::task;

async fn start_ui(tx: mpsc::UnboundedSender<Action>, rx: mpsc::UnboundedReceiver<Event>) -> Result<()> {
    let mut session_id = None;
    if !Config::get(ConfigKey::SessionID).is_empty() {
        session_id = Some(Config::get(ConfigKey::SessionID));
    }

    let app_state_props = AppStateProps {
        api_url: Config::get(ConfigKey::ApiUrl),
        context_window: Config::get_u64(ConfigKey::ContextWindow)?,
        session_id,
        theme_name: Config::get(ConfigKey::Theme),
    };

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let result = start_loop(&mut terminal, app_state_props, tx, rx).await;

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    let _ = crossterm::execute!(io::stdout(), cursor::Show);

    result
}

/// Opens the interactive viewer against the configured API.
pub async fn run() -> Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let api_client = ApiClientManager::get()?;
    if let Err(err) = api_client.health_check().await {
        log::warn!("API at {} is not healthy: {err}", Config::get(ConfigKey::ApiUrl));
    }

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let mut background_futures = task::JoinSet::new();
    background_futures.spawn(async move {
        ActionsService::start(api_client, event_tx, &mut action_rx).await
    });

    let result = tokio::select!(
        res = background_futures.join_next() => match res {
            Some(Ok(res)) => res,
            Some(Err(err)) => Err(err.into()),
            None => Ok(()),
        },
        res = start_ui(action_tx, event_rx) => res,
    );

    if result.is_err() {
        destruct_terminal_for_panic();
    }

    result
}
