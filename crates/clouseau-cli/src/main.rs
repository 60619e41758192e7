use std::fs::OpenOptions;
use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap::FromArgMatches;
use clouseau_cli::cli::Cli;
use clouseau_cli::cli::Commands;
use clouseau_cli::commands;
use clouseau_cli::panels;
use clouseau_term::ApiClientManager;
use clouseau_term::Config;
use log::LevelFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = Cli::command();
    let matches = cmd.clone().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Info);
    match cli.command {
        Some(Commands::Chat { .. }) => {
            // The viewer owns the terminal, so logs go to a file.
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open("clouseau.log")?;

            env_logger::Builder::new()
                .filter_level(log_level_filter)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .init();
        }
        _ => {
            env_logger::Builder::new()
                .filter_level(log_level_filter)
                .init();
        }
    }

    let mut clap_arg_matches = vec![&matches];
    if let Some((_, subcommand_matches)) = matches.subcommand() {
        clap_arg_matches.push(subcommand_matches);
    }
    Config::load(cmd.clone(), clap_arg_matches).await?;

    let mut stdout = io::stdout();
    match cli.command {
        Some(Commands::Chat { .. }) => commands::chat::run().await,
        Some(Commands::Session {
            action,
            session_id,
            yes,
        }) => {
            let api_client = ApiClientManager::get()?;
            commands::session::run(
                api_client.as_ref(),
                action,
                session_id.as_deref(),
                yes,
                &mut stdout,
            )
            .await
        }
        Some(Commands::Search { query }) => {
            let api_client = ApiClientManager::get()?;
            commands::search::run(api_client.as_ref(), &query, &mut stdout).await
        }
        Some(Commands::Config { action }) => commands::config::run(cmd, action, &mut stdout).await,
        None => {
            println!("{}\n", panels::BANNER);
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
